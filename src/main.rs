use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

use gprof_client::commands;

fn build_cli() -> Command {
    Command::new("gprof-client")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Live terminal dashboard for a remote runtime profile (CPU, files, disk)")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("Configuration file (defaults to ./config.toml)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("template")
                .short('t')
                .long("template")
                .value_name("PATH")
                .help("Query template (overrides template_path from the config)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .value_name("PATH")
                .help("Write logs to this file while the dashboard is running")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("once")
                .long("once")
                .help("Fetch one profile, print it as JSON and exit")
                .action(ArgAction::SetTrue),
        )
}

fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    let log_file = matches.get_one::<PathBuf>("log-file");
    gprof_client::init_logging(log_file.map(PathBuf::as_path))
        .context("Failed to initialize logging")?;

    if matches.get_flag("once") {
        commands::snapshot::execute(&matches)
    } else {
        commands::dashboard::execute(&matches)
    }
}
