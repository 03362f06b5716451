//! Exact 0/1 package packing.
//!
//! Each input line describes a package capacity and up to 15 candidate
//! items (id, weight, price). For every line the crate selects the subset
//! of items that:
//!
//! 1. fits within the capacity,
//! 2. has the highest total price,
//! 3. on equal price, has the lowest total weight,
//! 4. on equal price and weight, has the most items.
//!
//! # Modules
//!
//! - [`model`]: items, item collections, candidates, solutions
//! - [`validate`]: numeric limits and item-numbering checks
//! - [`search`]: subset enumeration, feasibility filtering, ranking, and the
//!   per-line solver
//! - [`line`]: numbered line input and line text parsing
//! - [`packager`]: whole-input runs with positional output
//! - [`error`]: the error taxonomy and exit codes
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use u_packer::packager::{Packager, PackerConfig};
//!
//! let input = "81 : (1,53.38,€45) (2,88.62,€98) (3,78.48,€3) (4,72.30,€76)\n\n";
//! let mut out = Vec::new();
//!
//! Packager::new(&PackerConfig::default())
//!     .unwrap()
//!     .run(Cursor::new(input), &mut out)
//!     .unwrap();
//!
//! assert_eq!(String::from_utf8(out).unwrap(), "4\n\n");
//! ```

pub mod error;
pub mod line;
pub mod model;
pub mod packager;
pub mod search;
pub mod validate;

pub use error::{PackError, Result, Violation};
