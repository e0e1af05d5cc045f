//! Prints a day's log file — the retrieval half of the writer, exposed for
//! quick inspection without `cat`-ing paths by hand.

use crate::logger::Logger;
use std::process::ExitCode;

/// `date` is YYYY-MM-DD; today when omitted. Missing file and disabled file
/// logging both report the same way — there is nothing to show.
#[must_use]
pub fn cmd_show(date: Option<&str>, logger: &Logger) -> ExitCode {
    let parsed = match date {
        None => None,
        Some(raw) => match chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(d) => Some(d),
            Err(_) => {
                logger.error("CLI", &format!("Invalid date: {raw} (use YYYY-MM-DD)"));
                return ExitCode::FAILURE;
            }
        },
    };

    match logger.read_log(parsed) {
        Some(content) => {
            for line in content.lines() {
                logger.raw(line);
            }
            ExitCode::SUCCESS
        }
        None => {
            logger.print("SHOW", "No log file for that day");
            ExitCode::SUCCESS
        }
    }
}
