//! Exhaustive subset search for one line.
//!
//! The pipeline, per line:
//!
//! 1. [`Subsets`]: enumerate all `2^n` subsets by bitmask
//! 2. [`FeasibilityFilter`]: drop the empty subset and subsets over capacity
//! 3. [`CandidateRanker`]: pick the best survivor using sequential
//!    [`RankRule`]s (price desc, weight asc, item count desc)
//!
//! [`LineSolver`] runs the validator first and then the pipeline above.
//! With at most 15 items (32768 subsets) the exhaustive search is exact and
//! fast, so no pruning is attempted.

mod filter;
mod ranker;
mod runner;
mod subsets;
mod types;

pub use filter::FeasibilityFilter;
pub use ranker::CandidateRanker;
pub use runner::{LineSolver, SolveReport};
pub use subsets::Subsets;
pub use types::{HighestPrice, LightestWeight, MostItems, RankRule};
