//! Candidate ranking by sequential rule composition.

use super::types::{HighestPrice, LightestWeight, MostItems, RankRule};
use crate::model::Candidate;
use std::cmp::Ordering;

/// Orders candidates by a sequence of [`RankRule`]s.
///
/// Rules are applied in order. A later rule is only consulted when every
/// earlier rule scores both candidates exactly equal. Scores are compared
/// with [`f64::total_cmp`], so the order is total and transitive.
/// Candidates that tie on all rules compare equal;
/// [`select_best`](CandidateRanker::select_best) then keeps the one seen
/// first.
///
/// # Examples
///
/// ```
/// use u_packer::model::{Candidate, Item};
/// use u_packer::search::CandidateRanker;
///
/// let ranker = CandidateRanker::standard();
/// let cheap = Candidate::new(vec![Item::new(1, 1.0, 5.0)]);
/// let dear = Candidate::new(vec![Item::new(2, 9.0, 8.0)]);
///
/// let best = ranker.select_best(vec![cheap, dear.clone()]);
/// assert_eq!(best, Some(dear));
/// ```
pub struct CandidateRanker {
    rules: Vec<Box<dyn RankRule>>,
}

impl CandidateRanker {
    /// Price descending, then weight ascending, then item count descending.
    pub fn standard() -> Self {
        Self { rules: Vec::new() }
            .with_rule(HighestPrice)
            .with_rule(LightestWeight)
            .with_rule(MostItems)
    }

    /// Appends a rule, consulted after all rules added before it.
    pub fn with_rule<R: RankRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Returns the names of all rules in order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    fn scores(&self, candidate: &Candidate) -> Vec<f64> {
        self.rules.iter().map(|rule| rule.score(candidate)).collect()
    }

    fn compare_scores(sa: &[f64], sb: &[f64]) -> Ordering {
        sa.iter()
            .zip(sb.iter())
            .map(|(va, vb)| va.total_cmp(vb))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// Compares two candidates; `Less` means `a` ranks better than `b`.
    pub fn compare(&self, a: &Candidate, b: &Candidate) -> Ordering {
        Self::compare_scores(&self.scores(a), &self.scores(b))
    }

    /// Returns the best candidate, or `None` if there are none.
    ///
    /// Single pass; among fully tied candidates the first one wins.
    pub fn select_best<I>(&self, candidates: I) -> Option<Candidate>
    where
        I: IntoIterator<Item = Candidate>,
    {
        let mut best: Option<(Candidate, Vec<f64>)> = None;
        for candidate in candidates {
            let scores = self.scores(&candidate);
            let better = match &best {
                Some((_, best_scores)) => Self::compare_scores(&scores, best_scores).is_lt(),
                None => true,
            };
            if better {
                best = Some((candidate, scores));
            }
        }
        best.map(|(candidate, _)| candidate)
    }
}

impl Default for CandidateRanker {
    fn default() -> Self {
        Self::standard()
    }
}
