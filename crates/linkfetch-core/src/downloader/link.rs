//! Fetch-or-skip-or-fail for a single link.

use super::LinkOutcome;
use crate::fetch::Fetcher;
use crate::url_model::target_path;
use std::fs;
use std::path::Path;

/// Downloads `raw_link` into `save_dir` unless its target already exists.
///
/// The existence check happens before any network access.
pub(crate) fn process_link<F: Fetcher>(
    fetcher: &F,
    save_dir: &Path,
    raw_link: &str,
) -> LinkOutcome {
    let link = raw_link.trim();
    if link.is_empty() {
        return LinkOutcome::Ignored;
    }

    let target = target_path(save_dir, link);
    if target.exists() {
        return LinkOutcome::Skipped;
    }

    let response = fetcher.fetch(link);
    let body = match response.body {
        Some(body) if response.status == 200 => body,
        _ => {
            return LinkOutcome::FetchFailed {
                status: response.status,
            }
        }
    };

    match fs::write(&target, &body) {
        Ok(()) => LinkOutcome::Downloaded {
            bytes: body.len() as u64,
            status: response.status,
        },
        Err(e) => {
            tracing::debug!(path = %target.display(), error = %e, "save failed");
            LinkOutcome::WriteFailed
        }
    }
}
