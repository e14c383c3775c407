//! HTTP GET plumbing.
//!
//! The rest of the crate only depends on the [`Fetch`] trait; [`CurlFetcher`]
//! is the libcurl-backed implementation used by the CLI.

mod easy;
#[cfg(test)]
pub(crate) mod mock;

pub use easy::CurlFetcher;

use thiserror::Error;

/// Failure of a single GET.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// Curl reported an error (connection refused, DNS, TLS, etc.).
    #[error("{0}")]
    Curl(#[from] curl::Error),
}

impl FetchError {
    /// True for network-level failures (nothing usable came back from the server).
    pub fn is_connection(&self) -> bool {
        match self {
            FetchError::Curl(e) => {
                e.is_couldnt_connect()
                    || e.is_couldnt_resolve_host()
                    || e.is_couldnt_resolve_proxy()
                    || e.is_operation_timedout()
                    || e.is_read_error()
                    || e.is_recv_error()
                    || e.is_send_error()
                    || e.is_got_nothing()
            }
            FetchError::InvalidUrl(_) => false,
        }
    }
}

/// Blocking GET capability. Implementations send the configured `User-Agent`
/// and return the full response body whatever the HTTP status; only
/// transport failures are errors.
pub trait Fetch {
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<Vec<u8>, FetchError>;

    /// GET and decode the body as UTF-8, replacing invalid sequences.
    fn get_text(&self, url: &str, query: &[(&str, &str)]) -> Result<String, FetchError> {
        let body = self.get(url, query)?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

/// Appends `query` to `url`, percent-encoding the values.
pub fn build_url(url: &str, query: &[(&str, &str)]) -> Result<String, FetchError> {
    let parsed = if query.is_empty() {
        url::Url::parse(url)?
    } else {
        url::Url::parse_with_params(url, query)?
    };
    Ok(parsed.into())
}
