//! Command handler layer.
//!
//! ## Files
//! - `event.rs`: label/matchup/teams/participant/keywords/show/validate.
//! - `guard.rs`: drift guard run, banners, exit status.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod event;
pub mod guard;

pub use event::handle_event_commands;
pub use guard::handle_guard_command;
