//! Packing domain model.
//!
//! - [`Item`]: a purchasable unit (id, weight, price)
//! - [`ItemCollection`]: the ordered items of one input line
//! - [`Candidate`]: a subset of a collection with its totals
//! - [`Solution`]: the outcome of solving one line
//!
//! Everything here is a plain value. Items and collections are read-only
//! once built; candidates recompute their totals whenever membership changes.

mod candidate;
mod item;

pub use candidate::{Candidate, Solution};
pub use item::{Item, ItemCollection};
