//! Log directories grow without bound — this command applies retention policies
//! (age, size, count) so users don't have to write cron scripts or remember
//! `find -delete`.

use super::stats::expand_dir;
use crate::config::Config;
use crate::logger::Logger;
use crate::retention::{CleanupOptions, cleanup};
use std::process::ExitCode;

/// Flags map straight onto [`CleanupOptions`]; with no filter given nothing is
/// touched, so a bare `stackkit cleanup` is always safe.
#[must_use]
#[allow(clippy::fn_params_excessive_bools)]
pub fn cmd_cleanup(
    dry_run: bool,
    all: bool,
    older_than: Option<u32>,
    max_size: Option<&str>,
    keep_last: Option<usize>,
    compress: bool,
    config: &Config,
    logger: &Logger,
) -> ExitCode {
    let mut options = CleanupOptions::new()
        .dry_run(dry_run)
        .delete_all(all)
        .compress(compress);

    if let Some(days) = older_than {
        options = options.max_age_days(days);
    }
    if let Some(size) = max_size {
        options = options.max_total_size(size);
    }
    if let Some(n) = keep_last {
        options = options.keep_last(n);
    }

    let dir = expand_dir(&config.file.dir);

    match cleanup(&dir, &config.general.app_name, &options) {
        Ok(result) => {
            result.log(logger, dry_run);
            ExitCode::SUCCESS
        }
        Err(e) => {
            logger.error("CLEANUP", &format!("{e}"));
            ExitCode::FAILURE
        }
    }
}
