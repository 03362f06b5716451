//! Ranking rules for candidates.

use crate::model::Candidate;

/// A scoring rule that assigns a rank value to a candidate.
///
/// Rules return `f64` scores where **lower is better**. Maximizing rules
/// negate their quantity.
///
/// # Examples
///
/// ```
/// use u_packer::model::Candidate;
/// use u_packer::search::RankRule;
///
/// // Prefer candidates with fewer items
/// struct FewestItems;
///
/// impl RankRule for FewestItems {
///     fn name(&self) -> &str { "FewestItems" }
///     fn score(&self, candidate: &Candidate) -> f64 {
///         candidate.len() as f64
///     }
/// }
/// ```
pub trait RankRule: Send + Sync {
    /// Returns the name of this rule.
    fn name(&self) -> &str;

    /// Computes the rank score of a candidate. Lower is better.
    fn score(&self, candidate: &Candidate) -> f64;
}

/// Higher total price first.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighestPrice;

impl RankRule for HighestPrice {
    fn name(&self) -> &str {
        "HighestPrice"
    }

    fn score(&self, candidate: &Candidate) -> f64 {
        -candidate.total_price()
    }
}

/// Lower total weight first.
#[derive(Debug, Clone, Copy, Default)]
pub struct LightestWeight;

impl RankRule for LightestWeight {
    fn name(&self) -> &str {
        "LightestWeight"
    }

    fn score(&self, candidate: &Candidate) -> f64 {
        candidate.total_weight()
    }
}

/// More items first.
#[derive(Debug, Clone, Copy, Default)]
pub struct MostItems;

impl RankRule for MostItems {
    fn name(&self) -> &str {
        "MostItems"
    }

    fn score(&self, candidate: &Candidate) -> f64 {
        -(candidate.len() as f64)
    }
}
