//! `dmk pages <url>` – list the parts of a video.

use anyhow::Result;
use dmk_core::config::DmkConfig;
use dmk_core::fetch::Fetch;
use dmk_core::pages::list_parts;
use dmk_core::resolve::resolve;

pub fn run_pages(fetcher: &dyn Fetch, cfg: &DmkConfig, url: &str) -> Result<()> {
    let aid = resolve(fetcher, url)?;
    let parts = list_parts(fetcher, cfg, aid)?;
    if parts.is_empty() {
        println!("aid {aid}: no parts");
        return Ok(());
    }
    println!("{:>4}  {:>12}  NAME", "PAGE", "CID");
    for part in parts {
        println!("{:>4}  {:>12}  {}", part.page, part.cid, part.part_name);
    }
    Ok(())
}
