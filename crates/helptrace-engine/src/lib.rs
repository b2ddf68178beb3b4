// Engine module - pure derivation logic between domain types and presentation.
// Everything here is a synchronous function of its inputs: no IO, no shared
// state, idempotent over the same arguments.

pub mod filter;
pub mod format;
pub mod stats;
pub mod validate;

pub use filter::{filter_sessions, matches_query};
pub use format::{DurationDisplay, session_duration};
pub use stats::{escalation_rate_pct, resolved_sessions};
pub use validate::{ValidationIssue, validate_dataset};
