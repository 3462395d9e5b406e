//! Link list reading.

use crate::error::RunError;
use std::fs;
use std::path::Path;

/// Reads `path` and returns its links in file order.
pub fn read_links(path: &Path) -> Result<Vec<String>, RunError> {
    if !path.exists() {
        return Err(RunError::LinksFileNotFound {
            path: path.to_path_buf(),
        });
    }
    let bytes = fs::read(path).map_err(|source| RunError::LinksFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    // Invalid UTF-8 only spoils the affected line, not the whole list.
    Ok(parse_links(&String::from_utf8_lossy(&bytes)))
}

/// Splits file content into links.
///
/// The content as a whole is trimmed, then split on `\n`; empty entries are
/// dropped. Individual entries are not trimmed here, so a whitespace-only
/// line in the middle of the file survives as an entry.
pub fn parse_links(content: &str) -> Vec<String> {
    content
        .trim()
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Number of entries that still name a link after trimming.
pub fn effective_count<S: AsRef<str>>(links: &[S]) -> usize {
    links
        .iter()
        .filter(|l| !l.as_ref().trim().is_empty())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_links_keeps_order_and_drops_empty_lines() {
        let content =
            "\n\nhttps://a.example/1.jpg\n\nhttps://b.example/2.jpg\nhttps://c.example/3.jpg\n\n";
        assert_eq!(
            parse_links(content),
            vec![
                "https://a.example/1.jpg",
                "https://b.example/2.jpg",
                "https://c.example/3.jpg",
            ]
        );
    }

    #[test]
    fn parse_links_does_not_trim_entries() {
        let content = "  https://a.example/1.jpg\r\n   \nhttps://b.example/2.jpg  ";
        assert_eq!(
            parse_links(content),
            vec!["https://a.example/1.jpg\r", "   ", "https://b.example/2.jpg"]
        );
    }

    #[test]
    fn parse_links_empty_content() {
        assert!(parse_links("").is_empty());
        assert!(parse_links(" \n\t\n ").is_empty());
    }

    #[test]
    fn effective_count_ignores_whitespace_entries() {
        let links = parse_links("https://a.example/1.jpg\n  \t \nhttps://b.example/2.jpg");
        assert_eq!(links.len(), 3);
        assert_eq!(effective_count(&links), 2);
    }

    #[test]
    fn read_links_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        match read_links(&path) {
            Err(RunError::LinksFileNotFound { path: p }) => assert_eq!(p, path),
            other => panic!("expected LinksFileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn read_links_unreadable_file() {
        // A directory exists but cannot be read.
        let dir = tempfile::tempdir().unwrap();
        match read_links(dir.path()) {
            Err(RunError::LinksFileRead { .. }) => {}
            other => panic!("expected LinksFileRead, got {:?}", other),
        }
    }

    #[test]
    fn read_links_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"https://a.example/1.jpg\nhttps://b.example/2.jpg\n")
            .unwrap();
        f.flush().unwrap();
        let links = read_links(f.path()).unwrap();
        assert_eq!(links.len(), 2);
    }

    #[test]
    fn read_links_tolerates_invalid_utf8() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"https://img.example/a.jpg\nhttps://img.example/caf\xe9.jpg\n")
            .unwrap();
        f.flush().unwrap();
        let links = read_links(f.path()).unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0], "https://img.example/a.jpg");
        assert!(links[1].starts_with("https://img.example/caf"));
        assert!(links[1].ends_with(".jpg"));
    }
}
