//! Thin CLI layer: parse args, set up logging, and run the packager.
//!
//! Results go to stdout, one line per input line. Diagnostics and logs go
//! to stderr. The exit code identifies the first error (see
//! [`PackError::exit_code`]).

use clap::error::ErrorKind;
use clap::{crate_version, value_parser, Arg, ArgAction, ArgMatches, Command};
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use u_packer::packager::{Packager, PackerConfig, RunSummary};
use u_packer::PackError;

/// Exit code for failures that are not a [`PackError`].
const UNEXPECTED_FAILURE: i32 = 10;

fn command() -> Command {
    Command::new("u-packer")
        .version(crate_version!())
        .about("Pick the most valuable set of items that fits into each package")
        .after_help(
            "Input lines look like:\n  81 : (1,53.38,€45) (2,88.62,€98) (3,78.48,€3)\n\nLogging is controlled with RUST_LOG (e.g. RUST_LOG=u_packer=debug).",
        )
        .arg(
            Arg::new("file")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("Input file, one package per line"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_parser(value_parser!(PathBuf))
                .help("TOML file with packing limits"),
        )
        .arg(
            Arg::new("max-capacity")
                .long("max-capacity")
                .value_parser(value_parser!(f64))
                .help("Maximum package capacity (default: 100)"),
        )
        .arg(
            Arg::new("max-items")
                .long("max-items")
                .value_parser(value_parser!(usize))
                .help("Maximum items per line (default: 15)"),
        )
        .arg(
            Arg::new("max-item-weight")
                .long("max-item-weight")
                .value_parser(value_parser!(f64))
                .help("Maximum weight of a single item (default: 100)"),
        )
        .arg(
            Arg::new("max-item-price")
                .long("max-item-price")
                .value_parser(value_parser!(f64))
                .help("Maximum price of a single item (default: 100)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log per-line search details to stderr"),
        )
}

fn init_logging(verbose: bool) {
    let default = if verbose { "u_packer=debug" } else { "u_packer=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Defaults, then the config file, then command-line overrides.
fn load_config(matches: &ArgMatches) -> Result<PackerConfig, PackError> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => PackerConfig::from_toml_file(path)?,
        None => PackerConfig::default(),
    };
    if let Some(&limit) = matches.get_one::<f64>("max-capacity") {
        config.limits.max_capacity = limit;
    }
    if let Some(&limit) = matches.get_one::<usize>("max-items") {
        config.limits.max_items = limit;
    }
    if let Some(&limit) = matches.get_one::<f64>("max-item-weight") {
        config.limits.max_item_weight = limit;
    }
    if let Some(&limit) = matches.get_one::<f64>("max-item-price") {
        config.limits.max_item_price = limit;
    }
    Ok(config)
}

fn run() -> Result<RunSummary, PackError> {
    let matches = match command().try_get_matches() {
        Ok(matches) => matches,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return Ok(RunSummary::default());
        }
        Err(e) => return Err(PackError::Usage(e.render().to_string())),
    };

    init_logging(matches.get_flag("verbose"));

    let config = load_config(&matches)?;
    let packager = Packager::new(&config)?;

    let path = matches
        .get_one::<PathBuf>("file")
        .ok_or_else(|| PackError::Usage("missing input file".into()))?;

    let mut out = BufWriter::new(io::stdout().lock());
    packager.run_path(path, &mut out)
}

fn main() {
    let code = match std::panic::catch_unwind(run) {
        Ok(Ok(_)) => 0,
        Ok(Err(e)) => {
            match &e {
                PackError::Usage(_) => eprint!("{e}"),
                _ => eprintln!("An error occurred:\ncode: {}\nerror: {e}", e.exit_code()),
            }
            e.exit_code()
        }
        Err(_) => {
            eprintln!("An unexpected error occurred. Please report this issue.");
            UNEXPECTED_FAILURE
        }
    };
    std::process::exit(code);
}
