//! Run loop: read lines, solve each, write one output line per input line.

use super::config::PackerConfig;
use crate::error::{PackError, Result};
use crate::line::{parse_line, LineSource, ParsedLine};
use crate::model::Solution;
use crate::search::LineSolver;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::{info, warn};

/// Counters for a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines read.
    pub lines: usize,

    /// Lines for which a subset was selected.
    pub solved: usize,

    /// Lines where no non-empty subset fits (`-`).
    pub no_solution: usize,

    /// Empty lines passed through.
    pub blank: usize,
}

/// Processes packing input line by line.
///
/// Lines are handled strictly in input order and each produces exactly one
/// output line. The first error stops the run: output already written stays
/// written and later lines are not read.
pub struct Packager {
    solver: LineSolver,
}

impl Packager {
    /// Creates a packager.
    ///
    /// Returns [`PackError::Config`] if the configuration is invalid.
    pub fn new(config: &PackerConfig) -> Result<Self> {
        config.validate().map_err(PackError::Config)?;
        Ok(Self {
            solver: LineSolver::new(config.limits.clone()),
        })
    }

    /// Processes the file at `path`, writing results to `out`.
    pub fn run_path(&self, path: impl AsRef<Path>, out: &mut impl Write) -> Result<RunSummary> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PackError::PathNotFound(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(PackError::NotAFile(path.to_path_buf()));
        }
        let file = File::open(path).map_err(|source| PackError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), "packing");
        self.run(BufReader::new(file), out)
    }

    /// Processes every line from `reader`, writing results to `out`.
    pub fn run<R: BufRead, W: Write>(&self, reader: R, out: &mut W) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        let result = self.run_lines(reader, out, &mut summary);
        // Keep whatever was written before a failure.
        let flushed = out.flush().map_err(PackError::Write);

        match result.and(flushed) {
            Ok(()) => {
                info!(
                    lines = summary.lines,
                    solved = summary.solved,
                    no_solution = summary.no_solution,
                    blank = summary.blank,
                    "packing finished"
                );
                Ok(summary)
            }
            Err(err) => {
                warn!(line = ?err.line(), code = err.exit_code(), "packing aborted: {err}");
                Err(err)
            }
        }
    }

    fn run_lines<R: BufRead, W: Write>(
        &self,
        reader: R,
        out: &mut W,
        summary: &mut RunSummary,
    ) -> Result<()> {
        for entry in LineSource::new(reader) {
            let (line, text) = entry?;
            summary.lines += 1;

            let solution = match parse_line(line, &text)? {
                ParsedLine::Blank => Solution::Empty,
                ParsedLine::Packing { capacity, items } => {
                    self.solver.solve(line, capacity, &items)?.solution
                }
            };

            match solution {
                Solution::Empty => summary.blank += 1,
                Solution::Infeasible => summary.no_solution += 1,
                Solution::Packed(_) => summary.solved += 1,
            }
            writeln!(out, "{solution}").map_err(PackError::Write)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SAMPLE: &str = "\
81 : (1,53.38,€45) (2,88.62,€98) (3,78.48,€3) (4,72.30,€76) (5,30.18,€9) (6,46.34,€48)
8 : (1,15.3,€34)
75 : (1,85.31,€29) (2,14.55,€74) (3,3.98,€16) (4,26.24,€55) (5,63.69,€52) (6,76.25,€75) (7,60.02,€74) (8,93.18,€35) (9,89.95,€78)
56 : (1,90.72,€13) (2,33.80,€40) (3,43.15,€10) (4,37.97,€16) (5,46.81,€36) (6,48.77,€79) (7,81.80,€45) (8,19.36,€79) (9,6.76,€64)
";

    fn packager() -> Packager {
        Packager::new(&PackerConfig::default()).unwrap()
    }

    fn run_str(input: &str) -> (Result<RunSummary>, String) {
        let mut out = Vec::new();
        let result = packager().run(Cursor::new(input), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_sample_input() {
        let (result, output) = run_str(SAMPLE);
        assert_eq!(output, "4\n-\n2,7\n8,9\n");
        let summary = result.unwrap();
        assert_eq!(summary.lines, 4);
        assert_eq!(summary.solved, 3);
        assert_eq!(summary.no_solution, 1);
    }

    #[test]
    fn test_blank_lines_preserved() {
        let input = "\n8 : (1,15.3,€34)\n\n10 : (1,2.5,€10) (2,3,€20) (3,4.5,€30)\n";
        let (result, output) = run_str(input);
        assert_eq!(output, "\n-\n\n1,2,3\n");
        assert_eq!(result.unwrap().blank, 2);
    }

    #[test]
    fn test_error_stops_run_and_keeps_earlier_output() {
        let input = "8 : (1,15.3,€34)\n101 : (1,1,€1)\n10 : (1,2,€3)\n";
        let (result, output) = run_str(input);
        assert_eq!(output, "-\n");
        let err = result.unwrap_err();
        assert!(matches!(err, PackError::CapacityExceeded { line: 2, .. }));
        assert_eq!(err.exit_code(), 40);
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let (result, output) = run_str("\n\nnot a package line\n");
        assert_eq!(output, "\n\n");
        let err = result.unwrap_err();
        assert_eq!(err.line(), Some(3));
        assert_eq!(err.exit_code(), 30);
    }

    #[test]
    fn test_empty_input_writes_nothing() {
        let (result, output) = run_str("");
        assert!(output.is_empty());
        assert_eq!(result.unwrap(), RunSummary::default());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let limits = crate::validate::PackingLimits::default().with_max_items(64);
        let config = PackerConfig::default().with_limits(limits);
        assert!(matches!(Packager::new(&config), Err(PackError::Config(_))));
    }

    #[test]
    fn test_custom_limits_apply() {
        let config = PackerConfig::default()
            .with_limits(crate::validate::PackingLimits::default().with_max_capacity(200.0));
        let packager = Packager::new(&config).unwrap();
        let mut out = Vec::new();
        packager
            .run(Cursor::new("150 : (1,90,€10) (2,60,€20)\n"), &mut out)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1,2\n");
    }

    #[test]
    fn test_run_path_missing_file() {
        let mut out = Vec::new();
        let err = packager()
            .run_path("does/not/exist.txt", &mut out)
            .unwrap_err();
        assert!(matches!(err, PackError::PathNotFound(_)));
        assert_eq!(err.exit_code(), 20);
    }

    #[test]
    fn test_run_path_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        let err = packager().run_path(dir.path(), &mut out).unwrap_err();
        assert!(matches!(err, PackError::NotAFile(_)));
        assert_eq!(err.exit_code(), 21);
    }

    #[test]
    fn test_run_path_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, SAMPLE).unwrap();
        let mut out = Vec::new();
        let summary = packager().run_path(&path, &mut out).unwrap();
        assert_eq!(summary.lines, 4);
        assert_eq!(String::from_utf8(out).unwrap(), "4\n-\n2,7\n8,9\n");
    }

    /// Accepts writes, fails every flush.
    struct BrokenFlush(Vec<u8>);

    impl Write for BrokenFlush {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::other("flush failed"))
        }
    }

    #[test]
    fn test_line_error_wins_over_flush_error() {
        let mut out = BrokenFlush(Vec::new());
        let err = packager()
            .run(Cursor::new("8 : (1,15.3,€34)\nnot a line\n"), &mut out)
            .unwrap_err();
        assert!(matches!(err, PackError::MalformedLine { line: 2 }));
        assert_eq!(out.0, b"-\n");
    }

    #[test]
    fn test_flush_error_reported_on_success() {
        let mut out = BrokenFlush(Vec::new());
        let err = packager()
            .run(Cursor::new("8 : (1,15.3,€34)\n"), &mut out)
            .unwrap_err();
        assert!(matches!(err, PackError::Write(_)));
    }
}
