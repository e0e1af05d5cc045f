//! Disk usage visibility before deciding on cleanup policies.

use crate::config::Config;
use crate::logger::Logger;
use crate::retention::stats;
use std::path::PathBuf;
use std::process::ExitCode;

#[must_use]
pub fn cmd_stats(config: &Config, logger: &Logger) -> ExitCode {
    let dir = expand_dir(&config.file.dir);

    match stats(&dir, &config.general.app_name) {
        Ok(stats) => {
            stats.log(logger);
            ExitCode::SUCCESS
        }
        Err(e) => {
            logger.error("STATS", &format!("{e}"));
            ExitCode::FAILURE
        }
    }
}

/// Config values use `~` for portability — the OS needs an absolute path.
pub(super) fn expand_dir(dir: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(dir).as_ref())
}
