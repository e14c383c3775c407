//! End-to-end run: resolve the aid, list its parts, fetch every comment file.
//!
//! Strictly sequential; the first error aborts the run and leaves already
//! written files in place.

use std::path::Path;

use crate::comments::{comment_file_name, download_comments};
use crate::config::DmkConfig;
use crate::error::Result;
use crate::fetch::Fetch;
use crate::pages::list_parts;
use crate::resolve::{resolve, VideoId};
use crate::storage::StoreOutcome;

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub aid: VideoId,
    /// One outcome per part, in site order.
    pub outcomes: Vec<StoreOutcome>,
}

impl RunSummary {
    pub fn downloaded(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_skipped()).count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_skipped()).count()
    }
}

pub fn run(
    fetcher: &dyn Fetch,
    cfg: &DmkConfig,
    url: &str,
    output_dir: &Path,
) -> Result<RunSummary> {
    let aid = resolve(fetcher, url)?;
    let parts = list_parts(fetcher, cfg, aid)?;

    let mut outcomes = Vec::with_capacity(parts.len());
    for part in &parts {
        tracing::debug!(
            page = part.page,
            cid = part.cid,
            name = %part.part_name,
            "fetching comments"
        );
        let outcome = download_comments(
            fetcher,
            cfg,
            part.cid,
            output_dir,
            &comment_file_name(part.cid),
        )?;
        outcomes.push(outcome);
    }

    let summary = RunSummary { aid, outcomes };
    tracing::info!(
        %aid,
        downloaded = summary.downloaded(),
        skipped = summary.skipped(),
        "run complete"
    );
    Ok(summary)
}
