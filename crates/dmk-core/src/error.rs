//! Error taxonomy shared by the resolver, lister, and downloader.

use std::path::PathBuf;

use thiserror::Error;

use crate::fetch::FetchError;
use crate::resolve::UrlKind;

pub type Result<T> = std::result::Result<T, DmkError>;

#[derive(Debug, Error)]
pub enum DmkError {
    /// The URL's final path segment starts with none of `ss`, `ep`, `av`.
    #[error("unrecognized URL kind {segment:?} in {url}")]
    UnrecognizedUrlKind { url: String, segment: String },

    /// The expected identifier pattern is absent from the URL or the fetched markup.
    #[error("no {kind} identifier found for {url}")]
    IdentifierNotFound { kind: UrlKind, url: String },

    /// A file download failed at the transport level before anything was
    /// written. Not retried. HTTP error statuses are not download failures.
    #[error("download failed: {url}")]
    DownloadFailed {
        url: String,
        #[source]
        source: FetchError,
    },

    /// The page list response was not the expected JSON array (including
    /// error pages served with a non-2xx status).
    #[error("malformed page list for aid {aid}")]
    MalformedPageList {
        aid: u64,
        #[source]
        source: serde_json::Error,
    },

    /// A page or list request failed at the transport level.
    #[error("request failed: {url}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },

    /// Creating the output directory or writing a file failed.
    #[error("storage: {}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Config(String),
}
