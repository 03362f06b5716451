//! Numbered line input.

use crate::error::{PackError, Result};
use std::io::{BufRead, Lines};

/// Lazily yields `(line_number, text)` pairs from a reader, in order.
///
/// Numbering starts at 1. Line terminators (`\n`, `\r\n`) are stripped and
/// empty lines are yielded like any other. A read failure is yielded as
/// [`PackError::Read`].
pub struct LineSource<R> {
    lines: Lines<R>,
    number: usize,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            number: 0,
        }
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = Result<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.lines.next()?;
        self.number += 1;
        Some(text.map(|t| (self.number, t)).map_err(PackError::Read))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_numbers_from_one_and_keeps_blank_lines() {
        let input = Cursor::new("first\n\nthird\r\n");
        let lines: Vec<(usize, String)> = LineSource::new(input).map(|l| l.unwrap()).collect();
        assert_eq!(
            lines,
            vec![
                (1, "first".to_string()),
                (2, String::new()),
                (3, "third".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(LineSource::new(Cursor::new("")).count(), 0);
    }

    #[test]
    fn test_invalid_utf8_is_read_error() {
        let input = Cursor::new(vec![b'o', b'k', b'\n', 0xff, 0xfe, b'\n']);
        let results: Vec<Result<(usize, String)>> = LineSource::new(input).collect();
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(PackError::Read(_))));
    }
}
