//! Per-line exhaustive search.

use super::filter::FeasibilityFilter;
use super::ranker::CandidateRanker;
use super::subsets::Subsets;
use crate::error::Result;
use crate::model::{ItemCollection, Solution};
use crate::validate::{PackingLimits, Validator};
use tracing::debug;

/// Result of solving one line.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveReport {
    /// The selected subset, or why there is none.
    pub solution: Solution,

    /// Number of subsets enumerated (`2^n`, or 0 for an empty line).
    pub subsets_examined: u64,

    /// Number of subsets that passed the feasibility filter.
    pub feasible: usize,
}

/// Solves one line: validate, enumerate, filter, rank.
///
/// The search is exact. Every subset is enumerated, infeasible ones are
/// dropped, and the [`CandidateRanker`] picks the winner.
///
/// # Examples
///
/// ```
/// use u_packer::model::{Item, ItemCollection};
/// use u_packer::search::LineSolver;
///
/// let items = ItemCollection::new(vec![
///     Item::new(1, 53.38, 45.0),
///     Item::new(2, 88.62, 98.0),
///     Item::new(3, 78.48, 3.0),
///     Item::new(4, 72.30, 76.0),
///     Item::new(5, 30.18, 9.0),
///     Item::new(6, 46.34, 48.0),
/// ]);
///
/// let report = LineSolver::default().solve(1, 81.0, &items).unwrap();
/// assert_eq!(report.solution.ids(), vec![4]);
/// assert_eq!(report.subsets_examined, 64);
/// ```
pub struct LineSolver {
    validator: Validator,
    ranker: CandidateRanker,
}

impl LineSolver {
    /// Creates a solver with the given limits and the standard ranking.
    pub fn new(limits: PackingLimits) -> Self {
        let ranker = CandidateRanker::standard();
        debug!(rules = ?ranker.rule_names(), "line solver ready");
        Self {
            validator: Validator::new(limits),
            ranker,
        }
    }

    /// Solves the line numbered `line` (1-based).
    ///
    /// A broken constraint is returned as the matching
    /// [`PackError`](crate::error::PackError) tagged with `line`.
    pub fn solve(&self, line: usize, capacity: f64, items: &ItemCollection) -> Result<SolveReport> {
        self.validator
            .check(capacity, items)
            .map_err(|violation| violation.at_line(line))?;

        if items.is_empty() {
            debug!(line, "no items, skipping search");
            return Ok(SolveReport {
                solution: Solution::Empty,
                subsets_examined: 0,
                feasible: 0,
            });
        }

        let feasibility = FeasibilityFilter::new(capacity);
        let subsets = Subsets::new(items.as_slice());
        let subsets_examined = subsets.total();

        let mut feasible = 0usize;
        let best = self.ranker.select_best(
            subsets
                .filter(|candidate| feasibility.accepts(candidate))
                .inspect(|_| feasible += 1),
        );

        let solution = match best {
            Some(candidate) => Solution::Packed(candidate),
            None => Solution::Infeasible,
        };

        debug!(
            line,
            items = items.len(),
            subsets_examined,
            feasible,
            selected = %solution,
            "line solved"
        );

        Ok(SolveReport {
            solution,
            subsets_examined,
            feasible,
        })
    }
}

impl Default for LineSolver {
    fn default() -> Self {
        Self::new(PackingLimits::default())
    }
}
