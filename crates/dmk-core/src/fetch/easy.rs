//! libcurl easy-handle fetcher.

use super::{build_url, Fetch, FetchError};
use crate::config::DmkConfig;

/// Blocking fetcher: one easy handle per request, redirects followed,
/// libcurl's default timeouts. Only transport failures are errors; the body
/// of any HTTP status is returned.
#[derive(Debug, Clone)]
pub struct CurlFetcher {
    user_agent: String,
}

impl CurlFetcher {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
        }
    }

    pub fn from_config(cfg: &DmkConfig) -> Self {
        Self::new(cfg.user_agent.clone())
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Fetch for CurlFetcher {
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<Vec<u8>, FetchError> {
        let full_url = build_url(url, query)?;
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(&full_url)?;
        easy.useragent(&self.user_agent)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        // Let libcurl negotiate and decode gzip/deflate.
        easy.accept_encoding("")?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        // Error statuses are not fatal here: the body is handed back as-is and
        // callers decide what it means (a stored file, a parse failure, ...).
        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            tracing::warn!(
                url = %full_url,
                code,
                bytes = body.len(),
                "GET returned non-success status"
            );
        }

        tracing::debug!(url = %full_url, bytes = body.len(), "GET complete");
        Ok(body)
    }
}
