//! textfmt - IBAN grouping and locale-aware slug formatting

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::io::{self, IsTerminal, Write};

use textfmt::format::{available_locales, language_of, resolve_rules, FormatterKind};
use textfmt::process::{format_source, format_values, resolve_inputs};
use textfmt::{parse_args, CliArgs, Config, Result};

fn main() -> Result<()> {
    let args = parse_args();

    if args.list_locales {
        for tag in available_locales() {
            println!("{tag}");
        }
        return Ok(());
    }

    let sources = resolve_inputs(&args.inputs, !args.values.is_empty());

    // Only implicit stdin with nobody piping input: show usage
    if args.inputs.is_empty() && args.values.is_empty() && io::stdin().is_terminal() {
        print_usage();
        return Ok(());
    }

    let config = build_config(&args)?;

    if let Some(jobs) = args.jobs {
        if jobs > 0 {
            if let Err(e) = rayon::ThreadPoolBuilder::new()
                .num_threads(jobs)
                .build_global()
            {
                eprintln!("Warning: failed to configure thread pool: {e}");
            }
        }
    }
    let parallel = args.jobs != Some(1);

    let formatter = config.formatter.build(&config.locale);
    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    for line in format_values(&args.values, formatter.as_ref(), parallel) {
        writeln!(stdout, "{line}")?;
    }

    let mut lines = 0usize;
    let mut processed = 0usize;
    let mut errors = 0usize;
    for source in &sources {
        match format_source(source, &mut stdin, &mut stdout, formatter.as_ref(), parallel) {
            Ok(count) => {
                processed += 1;
                lines += count;
                if args.debug {
                    eprintln!("[DEBUG] Formatted {count} lines from {source}");
                }
            }
            Err(e) => {
                errors += 1;
                eprintln!("Error formatting {source}: {e}");
            }
        }
    }

    if !args.silent && processed > 0 {
        eprintln!("Formatted {lines} lines from {processed} inputs.");
    }
    if errors > 0 {
        anyhow::bail!("{errors} input(s) could not be formatted");
    }
    Ok(())
}

/// Build configuration from CLI args and config files
fn build_config(args: &CliArgs) -> Result<Config> {
    let mut config = if let Some(config_path) = &args.config {
        if args.debug {
            eprintln!(
                "[DEBUG] Using explicit config file: {}",
                config_path.display()
            );
        }
        Config::from_toml_file(config_path)?
    } else {
        let cwd = std::env::current_dir().unwrap_or_default();
        if args.debug {
            let discovered = Config::discover_config_files(&cwd);
            if discovered.is_empty() {
                eprintln!("[DEBUG] No config files discovered in current directory");
            } else {
                eprintln!("[DEBUG] Discovered config files:");
                for f in &discovered {
                    eprintln!("[DEBUG]   - {}", f.display());
                }
            }
        }
        Config::from_discovered_files(&cwd)
    };

    // Override with CLI arguments
    if let Some(formatter) = args.formatter {
        config.formatter = formatter;
    }
    if let Some(locale) = &args.locale {
        config.locale.clone_from(locale);
    }

    if args.debug {
        print_config_debug(&config);
    }

    if let Some(error) = config.validate() {
        anyhow::bail!("Invalid configuration: {error}");
    }

    Ok(config)
}

/// Print configuration values in debug mode
fn print_config_debug(config: &Config) {
    eprintln!("[DEBUG] Configuration:");
    match config.to_toml_string() {
        Ok(toml) => {
            for line in toml.lines() {
                eprintln!("[DEBUG]   {line}");
            }
        }
        Err(e) => eprintln!("Warning: failed to serialize configuration: {e}"),
    }
    if config.formatter == FormatterKind::Slug {
        let language = language_of(&config.locale);
        let rules = resolve_rules(&config.locale);
        eprintln!("[DEBUG]   language layer: {language}");
        eprintln!("[DEBUG]   resolved rules: {} substitutions", rules.len());
    }
}

fn print_usage() {
    println!(
        "textfmt v{} - IBAN and slug formatter",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("Usage:");
    println!("  textfmt [OPTIONS] <FILE>...");
    println!("  textfmt [OPTIONS] -v <TEXT>");
    println!("  textfmt [OPTIONS] -              # Read from stdin");
    println!("  cat names.txt | textfmt          # Pipe input");
    println!();
    println!("Examples:");
    println!("  textfmt -l de_AT -v 'Grüße aus Wien'   # gruesze-aus-wien");
    println!("  textfmt -t iban -v DE19123412341234123412");
    println!("  textfmt -l pl titles.txt               # One slug per line");
    println!();
    println!("Options:");
    println!("  -t, --type <KIND>               Formatter: slug or iban [default: slug]");
    println!("  -l, --locale <LOCALE>           Slug locale, e.g. de, de_AT [default: en_US]");
    println!("  -v, --value <TEXT>              Format a value directly (repeatable)");
    println!("  -c, --config <FILE>             Config file path (overrides auto-discovery)");
    println!("  -j, --jobs <NUM>                Parallel jobs (0=auto, 1=sequential)");
    println!("      --list-locales              List locales with slug rules");
    println!("  -D, --debug                     Enable debug output");
    println!("  -S, --silent                    Silent mode");
    println!("  -h, --help                      Print help");
    println!();
    println!("Config file auto-discovery:");
    println!("  Searches for textfmt.toml in the current directory and its parents,");
    println!("  plus the home directory. Closer configs override more distant ones.");
}
