//! Packing runs over whole inputs.
//!
//! [`Packager`] drives the per-line pipeline (parse, validate, search) over
//! a file or reader and writes the positional output: one line per input
//! line, in order. Any error aborts the run.

mod config;
mod runner;

pub use config::PackerConfig;
pub use runner::{Packager, RunSummary};
