//! Shared data model layer.
//!
//! ## Files
//! - `event.rs`: `Team`, `EventConfiguration`, `ConfigError`.
//! - `names.rs`: whitespace/case normalization for team names.
//! - `models.rs`: scan hits, reports, JSON envelope.
//! - `constants.rs`: the compiled-in canonical event and env var names.
//!
//! ## Rule of thumb
//! Domain types stay free of filesystem/network side effects. Validation is
//! allowed here because it is pure.
//!
//! ## Compatibility note
//! `Serialize` shapes here are the `--json` outputs. Keep schema-impacting
//! changes synchronized with `docs/contracts/*`.

pub mod constants;
pub mod event;
pub mod models;
pub mod names;
