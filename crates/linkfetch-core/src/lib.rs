pub mod clock;
pub mod config;
pub mod downloader;
pub mod error;
pub mod fetch;
pub mod format;
pub mod links;
pub mod logging;
pub mod run_log;
pub mod url_model;

pub use downloader::{Downloader, DownloaderOptions, LinkOutcome, RunSummary};
pub use error::RunError;
