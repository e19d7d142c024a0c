//! Command-line interface for textfmt.
//!
//! Defines CLI arguments using clap builder API

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};

use crate::format::FormatterKind;

/// CLI arguments parsed from command line
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// Files whose lines are formatted (`-` for stdin)
    pub inputs: Vec<PathBuf>,

    /// Values given directly on the command line
    pub values: Vec<String>,

    /// Formatter to apply
    pub formatter: Option<FormatterKind>,

    /// Locale for slug rules
    pub locale: Option<String>,

    /// Config file path
    pub config: Option<PathBuf>,

    /// Number of parallel jobs (0 = auto, 1 = sequential)
    pub jobs: Option<usize>,

    /// Print registered rule layers and exit
    pub list_locales: bool,

    /// Enable debug output
    pub debug: bool,

    /// Silent mode (no informational output)
    pub silent: bool,
}

/// Build the clap Command for parsing CLI arguments
#[must_use]
pub fn build_cli() -> Command {
    Command::new("textfmt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Format text as IBANs or locale-aware URL slugs")
        .arg(
            Arg::new("inputs")
                .help("Files to format line by line (- for stdin)")
                .value_name("FILE")
                .num_args(1..)
                .required(false)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("value")
                .short('v')
                .long("value")
                .help("Format this value directly (can be repeated)")
                .value_name("TEXT")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("type")
                .short('t')
                .long("type")
                .help("Formatter: slug or iban [default: slug]")
                .value_name("KIND")
                .value_parser(clap::value_parser!(FormatterKind)),
        )
        .arg(
            Arg::new("locale")
                .short('l')
                .long("locale")
                .help("Locale for slug rules, e.g. de or de_AT [default: en_US]")
                .value_name("LOCALE"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to configuration file (overrides auto-discovery)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("jobs")
                .short('j')
                .long("jobs")
                .help("Number of parallel jobs (0 = auto, 1 = sequential)")
                .value_name("NUM")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("list-locales")
                .long("list-locales")
                .help("List locales with registered slug rules and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .short('D')
                .long("debug")
                .help("Enable debug output (shows config and resolved rules)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("silent")
                .short('S')
                .long("silent")
                .help("Silent mode (no informational output)")
                .action(ArgAction::SetTrue),
        )
}

/// Parse CLI arguments from the process environment
#[must_use]
pub fn parse_args() -> CliArgs {
    let matches = build_cli().get_matches();
    args_from_matches(&matches)
}

/// Parse CLI arguments from an iterator (for testing)
#[must_use]
pub fn parse_args_from<I, T>(args: I) -> CliArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = build_cli().get_matches_from(args);
    args_from_matches(&matches)
}

fn args_from_matches(matches: &clap::ArgMatches) -> CliArgs {
    CliArgs {
        inputs: matches
            .get_many::<PathBuf>("inputs")
            .map(|vals| vals.cloned().collect())
            .unwrap_or_default(),
        values: matches
            .get_many::<String>("value")
            .map(|vals| vals.cloned().collect())
            .unwrap_or_default(),
        formatter: matches.get_one::<FormatterKind>("type").copied(),
        locale: matches.get_one::<String>("locale").cloned(),
        config: matches.get_one::<PathBuf>("config").cloned(),
        jobs: matches.get_one::<usize>("jobs").copied(),
        list_locales: matches.get_flag("list-locales"),
        debug: matches.get_flag("debug"),
        silent: matches.get_flag("silent"),
    }
}
