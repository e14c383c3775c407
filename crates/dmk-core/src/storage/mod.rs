//! Fetch-and-store of single files.
//!
//! An existing destination file is trusted as complete: it is never re-fetched
//! or verified. New files are written whole to a `.part` temp file and renamed
//! into place, so a failed run never leaves a truncated file under the final
//! name.

mod writer;

pub use writer::write_atomically;

use std::path::{Path, PathBuf};

use crate::error::{DmkError, Result};
use crate::fetch::Fetch;

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `1.xml` → `1.xml.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// One file to materialize on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTarget {
    pub url: String,
    pub directory: PathBuf,
    pub file_name: String,
}

impl DownloadTarget {
    pub fn new(
        url: impl Into<String>,
        directory: impl Into<PathBuf>,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            directory: directory.into(),
            file_name: file_name.into(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

/// What `fetch_and_store` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOutcome {
    /// The file was fetched and written.
    Downloaded(PathBuf),
    /// The file already existed; no request was made.
    Skipped(PathBuf),
}

impl StoreOutcome {
    pub fn path(&self) -> &Path {
        match self {
            StoreOutcome::Downloaded(p) | StoreOutcome::Skipped(p) => p,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, StoreOutcome::Skipped(_))
    }
}

/// Fetches `target.url` into `target.directory/target.file_name` unless that
/// path already exists. The body is stored whatever the HTTP status. A
/// transport failure is `DownloadFailed` and nothing is written; there is no
/// retry.
pub fn fetch_and_store(fetcher: &dyn Fetch, target: &DownloadTarget) -> Result<StoreOutcome> {
    let path = target.path();
    if path.exists() {
        tracing::info!("{} already exists, skipping", path.display());
        return Ok(StoreOutcome::Skipped(path));
    }

    let body = fetcher.get(&target.url, &[]).map_err(|source| {
        tracing::warn!(
            url = %target.url,
            connection = source.is_connection(),
            "download failed: {}",
            source
        );
        DmkError::DownloadFailed {
            url: target.url.clone(),
            source,
        }
    })?;

    std::fs::create_dir_all(&target.directory).map_err(|source| DmkError::Storage {
        path: target.directory.clone(),
        source,
    })?;
    write_atomically(&path, &body)?;

    tracing::info!(url = %target.url, bytes = body.len(), "saved {}", path.display());
    Ok(StoreOutcome::Downloaded(path))
}
