//! Target filename derivation for downloaded links.

mod path;

pub use path::link_basename;

use std::path::{Path, PathBuf};

/// Path a link is saved to: `save_dir` joined with the link's basename.
///
/// An empty basename (e.g. a link of just `/`) resolves to `save_dir`
/// itself, which always exists by the time links are processed, so such
/// links end up counted as skipped.
pub fn target_path(save_dir: &Path, link: &str) -> PathBuf {
    save_dir.join(link_basename(link))
}
