//! Diagnostic `tracing` output.
//!
//! Goes to `~/.local/state/linkfetch/linkfetch.log`, or to stderr when that
//! file cannot be opened. This is separate from the per-run download log in
//! [`crate::run_log`], which is part of the program's output.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info,linkfetch=debug,linkfetch_core=debug";

/// Per-event writer: a clone of the diagnostics file handle, or stderr if cloning failed.
enum Sink {
    File(File),
    Stderr,
}

impl io::Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Sink::File(f) => f.write(buf),
            Sink::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::File(f) => f.flush(),
            Sink::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct SharedFile(File);

impl<'a> MakeWriter<'a> for SharedFile {
    type Writer = Sink;

    fn make_writer(&'a self) -> Self::Writer {
        self.0.try_clone().map(Sink::File).unwrap_or(Sink::Stderr)
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Location of the diagnostics file under the XDG state dir.
pub fn diagnostics_log_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linkfetch")?;
    Ok(xdg_dirs.get_state_home().join("linkfetch.log"))
}

/// Installs the global subscriber writing to [`diagnostics_log_path`].
///
/// Returns Err when the file cannot be opened so the caller can fall back to
/// [`init_logging_stderr`].
pub fn init_logging() -> Result<PathBuf> {
    let path = diagnostics_log_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(SharedFile(file))
        .with_ansi(false)
        .init();

    tracing::debug!("diagnostics at {}", path.display());
    Ok(path)
}

/// Installs the global subscriber writing to stderr only.
pub fn init_logging_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}
