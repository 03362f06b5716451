//! Line input: numbered line source and line text parser.
//!
//! Input format, one package per line:
//!
//! ```text
//! 81 : (1,53.38,€45) (2,88.62,€98) (3,78.48,€3)
//! ```
//!
//! The number before the colon is the package capacity; each parenthesized
//! triple is `(id,weight,€price)`. Empty lines are kept and produce empty
//! output lines.

mod parser;
mod source;

pub use parser::{parse_line, ParsedLine};
pub use source::LineSource;
