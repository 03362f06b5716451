//! Candidate subsets and per-line solutions.

use super::item::Item;
use std::fmt;

/// A subset of a line's items together with its total weight and price.
///
/// Totals are computed on construction. There is no way to change
/// membership in place: [`with_item`](Candidate::with_item) and
/// [`without_item`](Candidate::without_item) return a new candidate, so
/// the totals can never drift from the items they describe.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Candidate {
    items: Vec<Item>,
    total_weight: f64,
    total_price: f64,
}

impl Candidate {
    /// Builds a candidate and computes its totals.
    pub fn new(items: Vec<Item>) -> Self {
        let total_weight = items.iter().map(|item| item.weight).sum();
        let total_price = items.iter().map(|item| item.price).sum();
        Self {
            items,
            total_weight,
            total_price,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    /// Number of items in the subset.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item ids in ascending order.
    pub fn ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.items.iter().map(|item| item.id).collect();
        ids.sort_unstable();
        ids
    }

    /// Returns a new candidate with `item` appended.
    pub fn with_item(&self, item: Item) -> Self {
        let mut items = self.items.clone();
        items.push(item);
        Self::new(items)
    }

    /// Returns a new candidate without the item(s) carrying `id`.
    pub fn without_item(&self, id: u32) -> Self {
        Self::new(
            self.items
                .iter()
                .filter(|item| item.id != id)
                .copied()
                .collect(),
        )
    }
}

/// Outcome of solving one line.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Solution {
    /// The line had no items; nothing was searched.
    Empty,

    /// No non-empty subset fits within the capacity.
    Infeasible,

    /// The best feasible subset.
    Packed(Candidate),
}

impl Solution {
    /// The selected candidate, if any.
    pub fn candidate(&self) -> Option<&Candidate> {
        match self {
            Solution::Packed(candidate) => Some(candidate),
            Solution::Empty | Solution::Infeasible => None,
        }
    }

    /// Selected item ids in ascending order (empty when nothing was packed).
    pub fn ids(&self) -> Vec<u32> {
        self.candidate().map(Candidate::ids).unwrap_or_default()
    }
}

/// Renders the per-line output: ids joined by `,`, `-` when nothing fits,
/// and an empty string for an empty line.
impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solution::Empty => Ok(()),
            Solution::Infeasible => f.write_str("-"),
            Solution::Packed(candidate) => {
                let ids: Vec<String> = candidate.ids().iter().map(u32::to_string).collect();
                f.write_str(&ids.join(","))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Candidate {
        Candidate::new(vec![Item::new(1, 10.5, 20.0), Item::new(3, 4.5, 7.0)])
    }

    #[test]
    fn test_totals_computed_on_construction() {
        let c = sample();
        assert!((c.total_weight() - 15.0).abs() < 1e-10);
        assert!((c.total_price() - 27.0).abs() < 1e-10);
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn test_with_item_recomputes_totals() {
        let c = sample().with_item(Item::new(2, 1.0, 3.0));
        assert!((c.total_weight() - 16.0).abs() < 1e-10);
        assert!((c.total_price() - 30.0).abs() < 1e-10);
        assert_eq!(c.ids(), vec![1, 2, 3]);
    }

    #[test]
    fn test_without_item_recomputes_totals() {
        let c = sample().without_item(1);
        assert!((c.total_weight() - 4.5).abs() < 1e-10);
        assert!((c.total_price() - 7.0).abs() < 1e-10);
        assert_eq!(c.ids(), vec![3]);

        let empty = c.without_item(3);
        assert!(empty.is_empty());
        assert!(empty.total_weight().abs() < 1e-10);
    }

    #[test]
    fn test_solution_display() {
        assert_eq!(Solution::Empty.to_string(), "");
        assert_eq!(Solution::Infeasible.to_string(), "-");

        let packed = Candidate::new(vec![Item::new(9, 6.76, 64.0), Item::new(8, 19.36, 79.0)]);
        assert_eq!(Solution::Packed(packed).to_string(), "8,9");
    }

    #[test]
    fn test_solution_ids() {
        assert!(Solution::Infeasible.ids().is_empty());
        assert_eq!(Solution::Packed(sample()).ids(), vec![1, 3]);
    }
}
