//! One binary for scriptable logging and log maintenance. Config drives output
//! paths, log level, and formatting — it loads before any logger is created, so
//! every subcommand writes to the same place the applications do.

use clap::Parser;
use stackkit::cli::{Cli, Command, cmd_cleanup, cmd_files, cmd_log, cmd_show, cmd_stats};
use stackkit::config::Config;
use stackkit::logger::Logger;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    // All subcommands share a single logger built from config so output is consistent
    let logger = Logger::from_config(&config);

    match cli.command {
        Command::Log {
            level,
            context,
            message,
            data,
        } => cmd_log(level, &context, &message, data.as_deref(), &logger),
        Command::Show { date } => cmd_show(date.as_deref(), &logger),
        Command::Files => cmd_files(&logger),
        Command::Stats => cmd_stats(&config, &logger),
        Command::Cleanup {
            dry_run,
            all,
            older_than,
            max_size,
            keep_last,
            compress,
        } => cmd_cleanup(
            dry_run,
            all,
            older_than,
            max_size.as_deref(),
            keep_last,
            compress,
            &config,
            &logger,
        ),
    }
}
