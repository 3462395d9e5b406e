//! Basename extraction from a raw link string.

/// Returns the final path segment of `link`, the way a shell `basename` would.
///
/// Trailing slashes are ignored, anything after the last remaining `/` is
/// returned verbatim (query strings and fragments included). The link is not
/// parsed as a URL: `https://example.com/` yields `example.com`.
pub fn link_basename(link: &str) -> &str {
    let trimmed = link.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(i) => &trimmed[i + 1..],
        None => trimmed,
    }
}
