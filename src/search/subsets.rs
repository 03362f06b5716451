//! Power-set enumeration by bitmask.

use crate::model::{Candidate, Item};

/// Iterator over every subset of a slice of items, the empty subset included.
///
/// Subset `k` (for `k` in `0..2^n`) contains item `i` iff bit `i` of `k` is
/// set, so items keep their input order within each subset. The iterator
/// borrows the items and holds no other state; call [`Subsets::new`] again
/// to restart.
///
/// # Panics
///
/// Panics if the slice has 64 or more items. Callers validate the item
/// count first (see [`MAX_ENUMERABLE_ITEMS`](crate::validate::MAX_ENUMERABLE_ITEMS)).
#[derive(Debug, Clone)]
pub struct Subsets<'a> {
    items: &'a [Item],
    next_mask: u64,
    end: u64,
}

impl<'a> Subsets<'a> {
    pub fn new(items: &'a [Item]) -> Self {
        assert!(items.len() < 64, "cannot enumerate {} items", items.len());
        Self {
            items,
            next_mask: 0,
            end: 1u64 << items.len(),
        }
    }

    /// Total number of subsets, `2^n`.
    pub fn total(&self) -> u64 {
        self.end
    }

    fn subset(&self, mask: u64) -> Candidate {
        Candidate::new(
            self.items
                .iter()
                .enumerate()
                .filter(|&(bit, _)| mask & (1 << bit) != 0)
                .map(|(_, item)| *item)
                .collect(),
        )
    }
}

impl Iterator for Subsets<'_> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        if self.next_mask >= self.end {
            return None;
        }
        let candidate = self.subset(self.next_mask);
        self.next_mask += 1;
        Some(candidate)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next_mask) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Subsets<'_> {}
