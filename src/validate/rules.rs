//! Line validation rules.

use super::config::PackingLimits;
use crate::error::Violation;
use crate::model::{Item, ItemCollection};

/// Checks one line's capacity and items against [`PackingLimits`].
///
/// Rules, in reporting order:
///
/// 1. capacity ≤ `max_capacity`
/// 2. item count ≤ `max_items`
/// 3. every item weight ≤ `max_item_weight`
/// 4. every item price ≤ `max_item_price`
/// 5. the distinct ids are exactly `1..=n`, `n` being the number of
///    distinct ids
///
/// Duplicate ids that still cover `1..=n` pass rule 5.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    limits: PackingLimits,
}

impl Validator {
    pub fn new(limits: PackingLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &PackingLimits {
        &self.limits
    }

    /// Returns the first broken rule, if any.
    pub fn check(&self, capacity: f64, items: &ItemCollection) -> Result<(), Violation> {
        self.capacity_rule(capacity)
            .or_else(|| self.count_rule(items))
            .or_else(|| self.weight_rule(items))
            .or_else(|| self.price_rule(items))
            .or_else(|| id_rule(items))
            .map_or(Ok(()), Err)
    }

    /// Runs every rule and returns all broken ones in rule order.
    pub fn check_all(&self, capacity: f64, items: &ItemCollection) -> Vec<Violation> {
        [
            self.capacity_rule(capacity),
            self.count_rule(items),
            self.weight_rule(items),
            self.price_rule(items),
            id_rule(items),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn capacity_rule(&self, capacity: f64) -> Option<Violation> {
        (capacity > self.limits.max_capacity).then_some(Violation::CapacityExceeded {
            capacity,
            limit: self.limits.max_capacity,
        })
    }

    fn count_rule(&self, items: &ItemCollection) -> Option<Violation> {
        (items.len() > self.limits.max_items).then_some(Violation::TooManyItems {
            count: items.len(),
            limit: self.limits.max_items,
        })
    }

    fn weight_rule(&self, items: &ItemCollection) -> Option<Violation> {
        let limit = self.limits.max_item_weight;
        let heavy = offending(items, |item| item.weight > limit);
        (!heavy.is_empty()).then_some(Violation::ItemTooHeavy {
            items: heavy,
            limit,
        })
    }

    fn price_rule(&self, items: &ItemCollection) -> Option<Violation> {
        let limit = self.limits.max_item_price;
        let pricey = offending(items, |item| item.price > limit);
        (!pricey.is_empty()).then_some(Violation::ItemTooExpensive {
            items: pricey,
            limit,
        })
    }
}

fn offending(items: &ItemCollection, pred: impl Fn(&Item) -> bool) -> Vec<Item> {
    items.iter().filter(|item| pred(item)).copied().collect()
}

fn id_rule(items: &ItemCollection) -> Option<Violation> {
    let ids = items.distinct_ids();
    if ids.is_empty() {
        return None;
    }
    if ids.binary_search(&1).is_err() {
        return Some(Violation::FirstItemMissing);
    }

    let n = ids.len() as u32;
    let missing: Vec<u32> = (1..=n).filter(|id| ids.binary_search(id).is_err()).collect();
    (!missing.is_empty()).then_some(Violation::ItemIdGap { missing })
}
