//! Bridges the TOML config schema to the builder so applications and the CLI
//! construct identical loggers from the same file.

use super::Logger;
use crate::config::Config;

impl Logger {
    /// Builds a logger from a loaded config. The console sink is always
    /// attached (its enabled flag is runtime-toggleable); the file capability
    /// is attempted only when the config asks for it.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut builder = Self::builder()
            .level(config.parse_level())
            .console()
            .enabled(config.console.enabled)
            .colors(config.console.colors)
            .done();

        if config.file.enabled {
            builder = builder
                .file()
                .dir(&config.file.dir)
                .prefix(&config.general.app_name)
                .max_file_size_str(&config.file.max_file_size)
                .max_files(config.file.max_files)
                .batch_size(config.file.batch_size)
                .flush_interval_ms(config.file.flush_interval_ms)
                .compress_rotated(config.file.compress_rotated)
                .done();
        }

        builder.build()
    }
}
