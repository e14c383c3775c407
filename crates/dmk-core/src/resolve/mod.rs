//! Video identifier (aid) resolution.
//!
//! A video URL is classified once by the prefix of its last path segment
//! ([`UrlKind`]); each kind then has its own extraction strategy, see
//! [`extract_identifier`].

mod extract;
mod kind;

pub use extract::{direct_aid, episode_aid, extract_identifier, season_aid};
pub use kind::{classify, last_path_segment, UrlKind};

use std::fmt;

use crate::error::Result;
use crate::fetch::Fetch;

/// Canonical numeric identifier of a video (aid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VideoId(pub u64);

impl VideoId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resolves `url` to its aid. Direct (`av…`) URLs need no network call;
/// season and episode URLs fetch the page once.
pub fn resolve(fetcher: &dyn Fetch, url: &str) -> Result<VideoId> {
    let (kind, segment) = classify(url)?;
    tracing::debug!(%url, ?kind, %segment, "classified video URL");
    let aid = extract_identifier(kind, url, fetcher)?;
    tracing::info!(%url, %aid, "resolved aid");
    Ok(aid)
}
