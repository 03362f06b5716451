//! Items and per-line item collections.

use std::fmt;

/// A single item that may be put into a package.
///
/// Identity is the `id`; two items with the same id on one line are
/// treated as the same item by the id-integrity rule.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Item number, expected to be unique within a line and start at 1.
    pub id: u32,
    /// Weight of the item.
    pub weight: f64,
    /// Price of the item.
    pub price: f64,
}

impl Item {
    /// Creates a new item.
    pub fn new(id: u32, weight: f64, price: f64) -> Self {
        Self { id, weight, price }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},€{})", self.id, self.weight, self.price)
    }
}

/// The items of one input line, in input order.
///
/// Id contiguity (`{1..n}`) is not enforced here; it is checked by the
/// [`Validator`](crate::validate::Validator) so the failure can be reported
/// with context.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemCollection {
    items: Vec<Item>,
}

impl ItemCollection {
    /// Creates a collection from items in input order.
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Number of items, duplicates included.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Distinct ids in ascending order.
    pub fn distinct_ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.items.iter().map(|item| item.id).collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}

impl From<Vec<Item>> for ItemCollection {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}

impl<'a> IntoIterator for &'a ItemCollection {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
