//! One module per subcommand, each returning an `ExitCode` so the binary stays
//! a thin router.

mod cleanup;
mod files;
mod log;
mod show;
mod stats;

pub use cleanup::cmd_cleanup;
pub use files::cmd_files;
pub use log::cmd_log;
pub use show::cmd_show;
pub use stats::cmd_stats;
