//! Comment overlay (`<cid>.xml`) download.

use std::path::Path;

use crate::config::{DmkConfig, CID_PLACEHOLDER};
use crate::error::Result;
use crate::fetch::Fetch;
use crate::storage::{fetch_and_store, DownloadTarget, StoreOutcome};

/// Comment file URL of part `cid`.
pub fn comment_url(cfg: &DmkConfig, cid: u64) -> String {
    cfg.comment_endpoint.replace(CID_PLACEHOLDER, &cid.to_string())
}

/// Default on-disk name of a part's comment file.
pub fn comment_file_name(cid: u64) -> String {
    format!("{cid}.xml")
}

pub fn download_comments(
    fetcher: &dyn Fetch,
    cfg: &DmkConfig,
    cid: u64,
    directory: &Path,
    file_name: &str,
) -> Result<StoreOutcome> {
    let target = DownloadTarget::new(comment_url(cfg, cid), directory, file_name);
    fetch_and_store(fetcher, &target)
}
