//! Per-link outcomes and the run counters they feed.

use crate::format::format_file_size;

/// What happened to one link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    /// Blank after trimming; not counted.
    Ignored,
    /// Target file already existed; nothing was fetched.
    Skipped,
    /// Body saved to disk.
    Downloaded { bytes: u64, status: u32 },
    /// Transfer failed or the status was not 200.
    FetchFailed { status: u32 },
    /// Body fetched but could not be written.
    WriteFailed,
}

impl LinkOutcome {
    /// Run-log line for this outcome at `level`, with its force flag.
    ///
    /// Skip and error lines go through the log's own level check; success
    /// lines are forced once `level >= 2`.
    pub fn log_line(&self, link: &str, level: u8) -> Option<(String, bool)> {
        if level < 2 {
            return None;
        }
        match self {
            LinkOutcome::Ignored => None,
            LinkOutcome::Skipped => Some((
                format!("Skipped: {} (file already exists)", link),
                false,
            )),
            LinkOutcome::FetchFailed { status } => {
                Some((format!("Error: {} (HTTP code: {})", link, status), false))
            }
            LinkOutcome::WriteFailed => Some((format!("Save error: {}", link), false)),
            LinkOutcome::Downloaded { bytes, status } => {
                let mut line = format!("Downloaded: {}", link);
                if level >= 3 {
                    line.push_str(&format!(
                        " | Size: {} | HTTP code: {}",
                        format_file_size(*bytes),
                        status
                    ));
                }
                Some((line, true))
            }
        }
    }
}

/// Downloaded / skipped / errored counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub downloaded: usize,
    pub skipped: usize,
    pub errored: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &LinkOutcome) {
        match outcome {
            LinkOutcome::Ignored => {}
            LinkOutcome::Skipped => self.skipped += 1,
            LinkOutcome::Downloaded { .. } => self.downloaded += 1,
            LinkOutcome::FetchFailed { .. } | LinkOutcome::WriteFailed => self.errored += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.downloaded + self.skipped + self.errored
    }
}
