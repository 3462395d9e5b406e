//! Batch downloader.
//!
//! Reads a links file, fetches every link one at a time into the save
//! directory (skipping targets that already exist) and keeps a per-run log
//! with the outcome counts. Per-link failures are counted, never raised; only
//! a missing/uncreatable save directory or an unreadable links file aborts
//! the run.

mod link;
mod outcome;

pub use outcome::{LinkOutcome, RunSummary};

use crate::clock::{Clock, SystemClock};
use crate::config::LinkfetchConfig;
use crate::error::RunError;
use crate::fetch::{CurlFetcher, Fetcher};
use crate::links;
use crate::run_log::RunLog;
use std::fs;
use std::path::{Path, PathBuf};

/// Inputs for one [`Downloader`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloaderOptions {
    pub links_file: PathBuf,
    pub save_dir: PathBuf,
    pub log_level: u8,
    /// Where `download_log_*.txt` is written.
    pub log_dir: PathBuf,
}

impl DownloaderOptions {
    /// Options with the run log in the current directory.
    pub fn new(
        links_file: impl Into<PathBuf>,
        save_dir: impl Into<PathBuf>,
        log_level: u8,
    ) -> Self {
        Self {
            links_file: links_file.into(),
            save_dir: save_dir.into(),
            log_level,
            log_dir: PathBuf::from("."),
        }
    }

    pub fn with_log_dir(mut self, log_dir: impl Into<PathBuf>) -> Self {
        self.log_dir = log_dir.into();
        self
    }

    pub fn from_config(cfg: &LinkfetchConfig) -> Self {
        let opts = Self::new(&cfg.links_file, &cfg.save_dir, cfg.log_level);
        match &cfg.log_dir {
            Some(dir) => opts.with_log_dir(dir),
            None => opts,
        }
    }
}

pub struct Downloader<F = CurlFetcher, C = SystemClock> {
    links_file: PathBuf,
    save_dir: PathBuf,
    fetcher: F,
    log: RunLog<C>,
    summary: RunSummary,
}

impl Downloader {
    /// Downloader using libcurl and the local wall clock.
    pub fn new(options: DownloaderOptions) -> Self {
        Self::with_parts(options, CurlFetcher::new(), SystemClock)
    }
}

impl<F: Fetcher, C: Clock> Downloader<F, C> {
    /// Downloader with an explicit fetcher and clock. The run log is named
    /// after the clock's time at this call.
    pub fn with_parts(options: DownloaderOptions, fetcher: F, clock: C) -> Self {
        Self {
            links_file: options.links_file,
            save_dir: with_trailing_separator(&options.save_dir),
            fetcher,
            log: RunLog::new(&options.log_dir, options.log_level, clock),
            summary: RunSummary::default(),
        }
    }

    pub fn log_path(&self) -> &Path {
        self.log.path()
    }

    /// Counts recorded so far.
    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    /// Runs the whole batch.
    ///
    /// Start and end markers are always written. On a fatal error the error
    /// line is written, the summary lines are not, and the error is returned.
    pub fn run(&mut self) -> Result<RunSummary, RunError> {
        self.summary = RunSummary::default();
        let started = self.log.timestamp();
        self.log.log(&format!("Started: {}", started), true);
        tracing::info!(
            links_file = %self.links_file.display(),
            save_dir = %self.save_dir.display(),
            log = %self.log.path().display(),
            "run started"
        );

        let result = self.download_all();
        if let Err(e) = &result {
            self.log.log(&format!("Error: {}", e), true);
            tracing::error!("run aborted: {}", e);
        }

        let finished = self.log.timestamp();
        self.log.log(&format!("Finished: {}", finished), true);
        let summary = self.summary;
        tracing::info!(?summary, "run finished");
        result
    }

    fn download_all(&mut self) -> Result<RunSummary, RunError> {
        self.ensure_save_dir()?;

        let links = links::read_links(&self.links_file)?;
        self.detail(&format!("Links found: {}", links::effective_count(&links)));

        for link in &links {
            self.process_link(link);
        }

        self.log.log(
            &format!("Successfully downloaded: {}", self.summary.downloaded),
            true,
        );
        self.log.log(&format!("Skipped: {}", self.summary.skipped), true);
        self.log.log(&format!("Errors: {}", self.summary.errored), true);
        Ok(self.summary)
    }

    /// Processes one raw link: counts it and writes its log line.
    pub fn process_link(&mut self, raw_link: &str) -> LinkOutcome {
        let outcome = link::process_link(&self.fetcher, &self.save_dir, raw_link);
        self.summary.record(&outcome);

        let link = raw_link.trim();
        if outcome != LinkOutcome::Ignored {
            tracing::debug!(link, ?outcome, "link processed");
        }
        if let Some((line, force)) = outcome.log_line(link, self.log.level()) {
            self.log.log(&line, force);
        }
        outcome
    }

    fn ensure_save_dir(&self) -> Result<(), RunError> {
        if self.save_dir.exists() {
            return Ok(());
        }
        fs::create_dir_all(&self.save_dir).map_err(|source| RunError::CreateDirectory {
            path: self.save_dir.clone(),
            source,
        })?;
        self.detail(&format!("Created directory: {}", self.save_dir.display()));
        Ok(())
    }

    /// Informational line, only written from level 2 up.
    fn detail(&self, message: &str) {
        if self.log.level() >= 2 {
            self.log.log(message, false);
        }
    }
}

/// `out`, `out/` and `out//` all become `out/`; an empty path becomes `./`.
///
/// Works on the `OsStr` components, so non-UTF-8 paths are handled too.
fn with_trailing_separator(dir: &Path) -> PathBuf {
    let trimmed: PathBuf = dir.components().collect();
    if trimmed.as_os_str().is_empty() {
        return PathBuf::from("./");
    }
    // Only the root has no parent, and it already ends in a separator.
    if trimmed.parent().is_none() {
        return trimmed;
    }
    let mut s = trimmed.into_os_string();
    s.push("/");
    PathBuf::from(s)
}
