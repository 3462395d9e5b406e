//! Blocking HTTP(S) GET.
//!
//! Uses the curl crate (libcurl easy interface) to fetch a link's body
//! together with its raw response header lines. Error statuses still return
//! their body; transport failures are reported in the result rather than
//! raised, so a single bad link never aborts a run.

mod parse;

pub use parse::status_from_headers;

use std::str;
use std::time::Duration;

/// Status assumed when no status line could be found in the response headers.
pub const DEFAULT_STATUS: u32 = 200;

/// Outcome of a GET: effective status code and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    /// First status code found in the header lines, or [`DEFAULT_STATUS`].
    pub status: u32,
    /// Response body; `None` when the transfer itself failed.
    pub body: Option<Vec<u8>>,
}

impl FetchResponse {
    /// Completed transfer with the given status and body.
    pub fn ok(status: u32, body: Vec<u8>) -> Self {
        Self {
            status,
            body: Some(body),
        }
    }

    /// Transfer that failed before a body was available.
    pub fn failed(status: u32) -> Self {
        Self { status, body: None }
    }
}

/// Something that can GET a link. [`CurlFetcher`] is the real one.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> FetchResponse;
}

/// libcurl-backed fetcher. Redirects are not followed.
#[derive(Debug, Clone, Copy)]
pub struct CurlFetcher {
    connect_timeout: Duration,
}

impl Default for CurlFetcher {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
        }
    }
}

impl CurlFetcher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Fetcher for CurlFetcher {
    fn fetch(&self, url: &str) -> FetchResponse {
        let mut headers: Vec<String> = Vec::new();
        let mut body: Vec<u8> = Vec::new();

        let result = get(url, self.connect_timeout, &mut headers, &mut body);
        let status = status_from_headers(&headers).unwrap_or(DEFAULT_STATUS);
        match result {
            Ok(()) => FetchResponse::ok(status, body),
            Err(e) => {
                tracing::debug!(url, error = %e, "GET failed");
                FetchResponse::failed(status)
            }
        }
    }
}

/// Runs the transfer, appending header lines and body bytes as they arrive.
fn get(
    url: &str,
    connect_timeout: Duration,
    headers: &mut Vec<String>,
    body: &mut Vec<u8>,
) -> Result<(), curl::Error> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(false)?;
    easy.connect_timeout(connect_timeout)?;

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                headers.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_response_constructors() {
        let ok = FetchResponse::ok(404, b"missing".to_vec());
        assert_eq!(ok.status, 404);
        assert_eq!(ok.body.as_deref(), Some(&b"missing"[..]));

        let failed = FetchResponse::failed(DEFAULT_STATUS);
        assert_eq!(failed.status, 200);
        assert!(failed.body.is_none());
    }

    #[test]
    fn curl_fetcher_unsupported_scheme_is_failure() {
        // curl rejects the scheme without touching the network.
        let resp = CurlFetcher::new().fetch("notaprotocol://example.invalid/file.bin");
        assert!(resp.body.is_none());
        assert_eq!(resp.status, DEFAULT_STATUS);
    }
}
