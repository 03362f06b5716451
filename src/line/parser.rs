//! Line text parsing.

use crate::error::{PackError, Result};
use crate::model::{Item, ItemCollection};
use regex::Regex;
use std::sync::OnceLock;

const NUMBER: &str = r"[0-9]+(?:\.[0-9]+)?";

/// Whole-line pattern: `81 : (1,53.38,€45) (2,88.62,€98)`.
fn line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(&format!(
            r"({NUMBER})\s:((?:\s\(\d+,{NUMBER},€{NUMBER}\))+)"
        ))
        .expect("line pattern is valid")
    })
}

/// Single item pattern: `(1,53.38,€45)`.
fn item_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(&format!(r"\((\d+),({NUMBER}),€({NUMBER})\)")).expect("item pattern is valid")
    })
}

/// A parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedLine {
    /// The line was empty.
    Blank,

    /// A capacity and the items to choose from.
    Packing {
        capacity: f64,
        items: ItemCollection,
    },
}

/// Parses one raw line, numbered `line` (1-based).
///
/// The pattern is searched anywhere in the line, so surrounding text is
/// ignored. A line without a match is [`PackError::MalformedLine`].
///
/// # Examples
///
/// ```
/// use u_packer::line::{parse_line, ParsedLine};
///
/// match parse_line(1, "8 : (1,15.3,€34)").unwrap() {
///     ParsedLine::Packing { capacity, items } => {
///         assert_eq!(capacity, 8.0);
///         assert_eq!(items.len(), 1);
///     }
///     ParsedLine::Blank => unreachable!(),
/// }
/// ```
pub fn parse_line(line: usize, text: &str) -> Result<ParsedLine> {
    if text.is_empty() {
        return Ok(ParsedLine::Blank);
    }

    let malformed = || PackError::MalformedLine { line };
    let caps = line_pattern().captures(text).ok_or_else(malformed)?;

    let capacity: f64 = caps[1].parse().map_err(|_| malformed())?;
    let items = item_pattern()
        .captures_iter(&caps[2])
        .map(|item| -> Result<Item> {
            let id = item[1].parse().map_err(|_| malformed())?;
            let weight = item[2].parse().map_err(|_| malformed())?;
            let price = item[3].parse().map_err(|_| malformed())?;
            Ok(Item::new(id, weight, price))
        })
        .collect::<Result<Vec<Item>>>()?;

    Ok(ParsedLine::Packing {
        capacity,
        items: ItemCollection::new(items),
    })
}
