//! Command-line interface for ONF
//! This binary parses OntoNotes Normal Form files and prints the sections as JSON or YAML.
//!
//! Usage:
//!   onf `<path>` [--format `<format>`] [--compact]     - Parse a file, or every file under a directory
//!   onf `<path>` --config `<file>`                    - Layer a TOML configuration over the defaults
//!   onf --list-formats                               - List all available output formats

use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgAction, ArgMatches, Command};
use onf_config::{Loader, OnfConfig};
use onf_parser::onf::formats::{serialize_files, serialize_sections, OutputFormat};
use onf_parser::onf::loader::{parse_file, parse_files_with};
use std::path::Path;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("onf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing OntoNotes Normal Form files")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to an .onf file or a directory to search")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default: from config, json)")
                .ignore_case(true)
                .value_parser(PossibleValuesParser::new(
                    OutputFormat::ALL.iter().map(|format| format.name()),
                )),
        )
        .arg(
            Arg::new("compact")
                .long("compact")
                .help("Print JSON on a single line")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("extension")
                .long("extension")
                .help("File extension to look for when the path is a directory"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log parsing progress to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_tracing(matches.get_flag("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    let Some(path) = matches.get_one::<String>("path") else {
        eprintln!("A path is required unless listing formats");
        std::process::exit(1);
    };
    handle_parse_command(Path::new(path), &config);
}

/// Logs go to stderr. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Defaults, then the `--config` file, then command line flags.
fn load_config(matches: &ArgMatches) -> Result<OnfConfig, onf_config::ConfigError> {
    let mut loader = Loader::new();
    if let Some(file) = matches.get_one::<String>("config") {
        loader = loader.with_file(file);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.to_lowercase())?;
    }
    if let Some(extension) = matches.get_one::<String>("extension") {
        loader = loader.set_override("discovery.extension", extension.as_str())?;
    }
    if matches.get_flag("compact") {
        loader = loader.set_override("output.pretty", false)?;
    }
    loader.build()
}

/// Handle the parse command for a single file or a directory tree
fn handle_parse_command(path: &Path, config: &OnfConfig) {
    let format = config.output.format;
    let pretty = config.output.pretty;

    let serialized = if path.is_dir() {
        let discovery = config.discovery.to_discovery();
        debug!(dir = %path.display(), extension = %discovery.extension, "parsing directory");
        let files = parse_files_with(path, &discovery).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });
        serialize_files(&files, format, pretty)
    } else {
        let sections = parse_file(path).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });
        serialize_sections(&sections, format, pretty)
    };

    let mut output = serialized.unwrap_or_else(|e| {
        eprintln!("Error formatting {} output: {}", format, e);
        std::process::exit(1);
    });
    if !output.ends_with('\n') {
        output.push('\n');
    }
    print!("{}", output);
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available output formats:\n");

    for format in OutputFormat::ALL {
        println!("  {}", format.name());
        println!("    {}", format.description());
        println!();
    }
}
