//! Constraint validation for a single line.
//!
//! Runs before any search: a line that breaks a limit or has broken item
//! numbering is rejected with a [`Violation`](crate::error::Violation)
//! describing the first broken rule.

mod config;
mod rules;

pub use config::{PackingLimits, MAX_ENUMERABLE_ITEMS};
pub use rules::Validator;
