//! consolemock: run JSON commands against the mock messaging console.
//!
//! Two modes:
//! - **Argument mode**: `consolemock [flags] COMMAND...` runs each command, then exits
//! - **Pipe mode**: `echo '"Namespaces"' | consolemock` runs one command per stdin line
//!
//! Results go to stdout, one JSON document per command. Logs go to stderr.

mod commands;
mod format;
mod pipe;

use std::path::Path;
use std::process;
use std::str::FromStr;

use consolemock_executor::{ConsoleConfig, Executor};

use commands::build_cli;
use format::OutputMode;

fn main() {
    let matches = build_cli().get_matches();

    if let Some(path) = matches.get_one::<String>("write-config") {
        match ConsoleConfig::write_default_if_missing(Path::new(path)) {
            Ok(()) => {
                eprintln!("Configuration at {}", path);
                return;
            }
            Err(e) => {
                eprintln!("{}", e);
                process::exit(1);
            }
        }
    }

    let mut config = match load_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };
    if let Some(seed) = matches.get_one::<u64>("seed") {
        config.rng_seed = Some(*seed);
    }

    init_logging(&config.log_level);

    let mut executor = match Executor::from_config(&config) {
        Ok(executor) => executor,
        Err(e) => {
            eprintln!("Failed to load fixtures: {}", e);
            process::exit(1);
        }
    };

    let mode = if matches.get_flag("pretty") {
        OutputMode::Pretty
    } else {
        OutputMode::Compact
    };

    let exit_code = match matches.get_many::<String>("commands") {
        Some(commands) => pipe::run_args(&mut executor, commands, mode),
        None => pipe::run_pipe(&mut executor, mode),
    };
    process::exit(exit_code);
}

fn load_config(matches: &clap::ArgMatches) -> Result<ConsoleConfig, String> {
    let config = match matches.get_one::<String>("config") {
        Some(path) => ConsoleConfig::from_file(Path::new(path)).map_err(|e| e.to_string())?,
        None => ConsoleConfig::default(),
    };
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

fn init_logging(level: &str) {
    let level = tracing::Level::from_str(level).unwrap_or(tracing::Level::INFO);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
