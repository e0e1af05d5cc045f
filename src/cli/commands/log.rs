//! Scriptable one-shot logging — shell scripts and cron jobs log through the
//! same pipeline as the applications, so lines land in the same files with the
//! same format.

use crate::cli::LogLevel;
use crate::logger::Logger;
use std::process::ExitCode;

/// Joins the message words, optionally attaches a `--data` JSON payload, and
/// flushes before returning so the line is on disk when the process exits.
#[must_use]
pub fn cmd_log(
    level: LogLevel,
    context: &str,
    message: &[String],
    data: Option<&str>,
    logger: &Logger,
) -> ExitCode {
    if message.is_empty() {
        logger.error("CLI", "No message given");
        return ExitCode::FAILURE;
    }
    let message = message.join(" ");
    let level = level.into();

    match data {
        None => logger.log(level, context, &message),
        Some(raw) => match serde_json::from_str(raw) {
            Ok(value) => logger.log_data(level, context, &message, value),
            Err(e) => {
                logger.error("CLI", &format!("Invalid --data JSON: {e}"));
                return ExitCode::FAILURE;
            }
        },
    }

    logger.close();
    ExitCode::SUCCESS
}
