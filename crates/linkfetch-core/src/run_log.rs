//! Per-run download log: `download_log_<YYYY-MM-DD_HH-MM-SS>.txt`.
//!
//! One plain-text line per entry, `[<YYYY-MM-DD HH:MM:SS>] <message>`. The
//! file is opened in append mode for every entry, so it only comes into
//! existence with the first written line.

use crate::clock::{Clock, FILE_NAME_FORMAT, LINE_FORMAT};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub struct RunLog<C> {
    path: PathBuf,
    level: u8,
    clock: C,
}

impl<C: Clock> RunLog<C> {
    /// Names the log file after the clock's current time, inside `dir`.
    pub fn new(dir: &Path, level: u8, clock: C) -> Self {
        let name = format!("download_log_{}.txt", clock.now().format(FILE_NAME_FORMAT));
        Self {
            path: dir.join(name),
            level,
            clock,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// Current time formatted like the line prefix.
    pub fn timestamp(&self) -> String {
        self.clock.now().format(LINE_FORMAT).to_string()
    }

    /// Appends `message` when the level is at least 1 or `force` is set.
    ///
    /// Write failures are reported as diagnostics and otherwise ignored.
    pub fn log(&self, message: &str, force: bool) {
        if self.level < 1 && !force {
            return;
        }
        if let Err(e) = self.append(message) {
            tracing::warn!(path = %self.path.display(), error = %e, "run log write failed");
        }
    }

    fn append(&self, message: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "[{}] {}", self.timestamp(), message)
    }
}
