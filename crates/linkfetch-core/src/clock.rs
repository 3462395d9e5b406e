//! Wall-clock source for run-log names and line timestamps.

use chrono::{Local, NaiveDateTime};

/// Timestamp format used inside run-log lines (`[2024-05-01 09:30:00] ...`).
pub const LINE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp format embedded in run-log file names (`download_log_2024-05-01_09-30-00.txt`).
pub const FILE_NAME_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Source of "now". The downloader takes one so tests can pin the time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock that always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
