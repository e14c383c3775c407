//! `dmk resolve <url>` – print the aid.

use anyhow::Result;
use dmk_core::fetch::Fetch;
use dmk_core::resolve::resolve;

pub fn run_resolve(fetcher: &dyn Fetch, url: &str) -> Result<()> {
    let aid = resolve(fetcher, url)?;
    println!("{aid}");
    Ok(())
}
