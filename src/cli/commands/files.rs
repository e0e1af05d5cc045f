//! Lists the writer's files newest-first, the same ordering retention uses —
//! what's at the bottom of this list is what cleanup deletes first.

use crate::logger::Logger;
use std::process::ExitCode;

#[must_use]
pub fn cmd_files(logger: &Logger) -> ExitCode {
    let files = logger.log_files();

    if files.is_empty() {
        logger.print("FILES", "No log files found");
        return ExitCode::SUCCESS;
    }

    logger.print("FILES", &format!("{} file(s), newest first:", files.len()));
    for name in files {
        logger.raw(&format!("  {name}"));
    }
    ExitCode::SUCCESS
}
