//! Capacity feasibility.

use crate::model::Candidate;

/// Accepts non-empty candidates whose total weight fits the capacity.
///
/// The comparison is exact: a total weight even slightly above the
/// capacity is rejected.
#[derive(Debug, Clone, Copy)]
pub struct FeasibilityFilter {
    capacity: f64,
}

impl FeasibilityFilter {
    pub fn new(capacity: f64) -> Self {
        Self { capacity }
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// `true` iff the candidate is non-empty and fits.
    pub fn accepts(&self, candidate: &Candidate) -> bool {
        !candidate.is_empty() && candidate.total_weight() <= self.capacity
    }
}
