//! Status-line parsing from raw response header lines.

/// Returns the code of the first `HTTP/<version> <code>` status line.
///
/// `<version>` is `1.1`-style or a bare major version (`HTTP/2 404`). The
/// pattern may appear anywhere in a line. Lines without one are ignored.
pub fn status_from_headers<S: AsRef<str>>(lines: &[S]) -> Option<u32> {
    lines.iter().find_map(|line| status_in_line(line.as_ref()))
}

fn status_in_line(line: &str) -> Option<u32> {
    let mut rest = line;
    while let Some(i) = rest.find("HTTP/") {
        rest = &rest[i + "HTTP/".len()..];
        if let Some(code) = status_after_prefix(rest) {
            return Some(code);
        }
    }
    None
}

/// Parses `<version> <code>` where `rest` starts right after `HTTP/`.
fn status_after_prefix(rest: &str) -> Option<u32> {
    let (version, tail) = rest.split_once(' ')?;
    if !is_version(version) {
        return None;
    }
    let digits: &str = {
        let end = tail
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(tail.len());
        &tail[..end]
    };
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

fn is_version(v: &str) -> bool {
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    match v.split_once('.') {
        Some((major, minor)) => all_digits(major) && all_digits(minor),
        None => all_digits(v),
    }
}
