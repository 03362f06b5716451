//! Error types for u-packer.

use crate::model::Item;
use std::path::PathBuf;
use thiserror::Error;

/// Joins items for error messages: `(1,53.38,€45),(2,88.62,€98)`.
fn join_items(items: &[Item]) -> String {
    items
        .iter()
        .map(Item::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// A broken packing constraint on one line, before the line number is known.
///
/// Produced by the [`Validator`](crate::validate::Validator) and turned into
/// a [`PackError`] with [`at_line`](Violation::at_line).
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    /// The package capacity is above the allowed maximum.
    CapacityExceeded { capacity: f64, limit: f64 },

    /// The line offers more items than allowed.
    TooManyItems { count: usize, limit: usize },

    /// Items heavier than the per-item maximum.
    ItemTooHeavy { items: Vec<Item>, limit: f64 },

    /// Items pricier than the per-item maximum.
    ItemTooExpensive { items: Vec<Item>, limit: f64 },

    /// No item carries id 1.
    FirstItemMissing,

    /// Ids missing from `1..=n`, ascending.
    ItemIdGap { missing: Vec<u32> },
}

impl Violation {
    /// Attaches the 1-based line number.
    pub fn at_line(self, line: usize) -> PackError {
        match self {
            Violation::CapacityExceeded { capacity, limit } => PackError::CapacityExceeded {
                line,
                capacity,
                limit,
            },
            Violation::TooManyItems { count, limit } => {
                PackError::TooManyItems { line, count, limit }
            }
            Violation::ItemTooHeavy { items, limit } => {
                PackError::ItemTooHeavy { line, items, limit }
            }
            Violation::ItemTooExpensive { items, limit } => {
                PackError::ItemTooExpensive { line, items, limit }
            }
            Violation::FirstItemMissing => PackError::FirstItemMissing { line },
            Violation::ItemIdGap { missing } => PackError::ItemIdGap { line, missing },
        }
    }
}

/// Main error type for u-packer operations.
///
/// Every error is fatal to a run: the first one stops processing.
#[derive(Debug, Error)]
pub enum PackError {
    /// Wrong or missing command-line arguments.
    #[error("{0}")]
    Usage(String),

    #[error("the passed file path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("the passed path is not a file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("unable to read file {}, please check permissions: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error while reading input: {0}")]
    Read(#[source] std::io::Error),

    #[error("error while writing output: {0}")]
    Write(#[source] std::io::Error),

    #[error("line {line} is not in correct format")]
    MalformedLine { line: usize },

    #[error("package max weight exceeded in line {line}: {capacity} > {limit}")]
    CapacityExceeded { line: usize, capacity: f64, limit: f64 },

    #[error("too many items for the package in line {line}: {count} > {limit}")]
    TooManyItems {
        line: usize,
        count: usize,
        limit: usize,
    },

    #[error(
        "the following items are heavier than {limit} in line {line}: {}",
        join_items(.items)
    )]
    ItemTooHeavy {
        line: usize,
        items: Vec<Item>,
        limit: f64,
    },

    #[error(
        "the following items cost more than €{limit} in line {line}: {}",
        join_items(.items)
    )]
    ItemTooExpensive {
        line: usize,
        items: Vec<Item>,
        limit: f64,
    },

    #[error("item number 1 is missing in line {line}")]
    FirstItemMissing { line: usize },

    #[error("item numbers missing in line {line}: {missing:?}")]
    ItemIdGap { line: usize, missing: Vec<u32> },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[cfg(feature = "serde")]
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl PackError {
    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            PackError::Usage(_) => 11,
            PackError::PathNotFound(_) => 20,
            PackError::NotAFile(_) => 21,
            PackError::Unreadable { .. } => 22,
            PackError::Read(_) => 23,
            PackError::MalformedLine { .. } => 30,
            PackError::CapacityExceeded { .. } => 40,
            PackError::TooManyItems { .. } => 41,
            PackError::ItemTooHeavy { .. } => 42,
            PackError::ItemTooExpensive { .. } => 43,
            PackError::FirstItemMissing { .. } => 44,
            PackError::ItemIdGap { .. } => 45,
            PackError::Write(_) | PackError::Config(_) => 10,
            #[cfg(feature = "serde")]
            PackError::Toml(_) => 10,
        }
    }

    /// The 1-based input line the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            PackError::MalformedLine { line }
            | PackError::CapacityExceeded { line, .. }
            | PackError::TooManyItems { line, .. }
            | PackError::ItemTooHeavy { line, .. }
            | PackError::ItemTooExpensive { line, .. }
            | PackError::FirstItemMissing { line }
            | PackError::ItemIdGap { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Result type alias for u-packer operations.
pub type Result<T> = std::result::Result<T, PackError>;
