//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `event_config.rs`: built-in event, config file loading and resolution.
//! - `formatters.rs`: event label / matchup / teams line.
//! - `keywords.rs`: classifier keywords derived from the event.
//! - `guard/`: drift guard policy and its two engines.
//! - `output.rs`: JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.
//! - The guard never reads the event configuration.

pub mod event_config;
pub mod formatters;
pub mod guard;
pub mod keywords;
pub mod output;
