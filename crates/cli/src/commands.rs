//! Clap command definition.

use clap::{Arg, ArgAction, Command};

/// Build the CLI command.
pub fn build_cli() -> Command {
    Command::new("consolemock")
        .about("In-memory mock of the messaging console management API")
        .long_about(
            "Runs JSON commands against a mock console loaded with fixture data.\n\
             Commands are given as arguments, or read one per line from stdin.\n\
             Each result is printed as {\"ok\": ...} or {\"error\": ...}.",
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("N")
                .value_parser(clap::value_parser!(u64))
                .help("Random seed (overrides the configuration)"),
        )
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .help("Pretty-print JSON results")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("write-config")
                .long("write-config")
                .value_name("PATH")
                .help("Write a default configuration file if none exists, then exit"),
        )
        .arg(
            Arg::new("commands")
                .value_name("COMMAND")
                .help("JSON-encoded commands, e.g. '\"Namespaces\"'")
                .num_args(0..)
                .action(ArgAction::Append),
        )
}
