//! `dmk fetch [url]` – full resolve, list and download run.

use anyhow::{Context, Result};
use dmk_core::config::DmkConfig;
use dmk_core::fetch::Fetch;
use dmk_core::pipeline;
use std::path::Path;

pub fn run_fetch(
    fetcher: &dyn Fetch,
    cfg: &DmkConfig,
    url: &str,
    output_dir: &Path,
) -> Result<()> {
    let summary = pipeline::run(fetcher, cfg, url, output_dir)
        .with_context(|| format!("fetching comments for {url}"))?;
    for outcome in &summary.outcomes {
        let tag = if outcome.is_skipped() { "exists" } else { "saved" };
        println!("{tag:>6}  {}", outcome.path().display());
    }
    println!(
        "aid {}: {} downloaded, {} already present",
        summary.aid,
        summary.downloaded(),
        summary.skipped()
    );
    Ok(())
}
