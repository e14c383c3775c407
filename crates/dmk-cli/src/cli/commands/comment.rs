//! `dmk comment <cid>` – download one part's comment file.

use anyhow::Result;
use dmk_core::comments::{comment_file_name, download_comments};
use dmk_core::config::DmkConfig;
use dmk_core::fetch::Fetch;
use dmk_core::storage::StoreOutcome;
use std::path::Path;

pub fn run_comment(
    fetcher: &dyn Fetch,
    cfg: &DmkConfig,
    cid: u64,
    output_dir: &Path,
) -> Result<()> {
    match download_comments(fetcher, cfg, cid, output_dir, &comment_file_name(cid))? {
        StoreOutcome::Downloaded(path) => println!("saved {}", path.display()),
        StoreOutcome::Skipped(path) => println!("{} already exists", path.display()),
    }
    Ok(())
}
