//! CLI command implementations.

mod analyze;
mod config;
mod init;
mod videos;

pub use analyze::run_analyze;
pub use config::run_config;
pub use init::run_init;
pub use videos::run_videos;
