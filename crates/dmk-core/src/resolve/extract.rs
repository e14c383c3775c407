//! Per-kind aid extraction.

use std::sync::LazyLock;

use regex::Regex;

use super::kind::{last_path_segment, UrlKind};
use super::VideoId;
use crate::error::{DmkError, Result};
use crate::fetch::Fetch;

static DIRECT_AID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^av(\d+)").expect("valid direct aid regex"));
static EPISODE_AID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"AV(\d+)").expect("valid episode aid regex"));
static SEASON_AID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""aid":(\d+)"#).expect("valid season aid regex"));

/// Digits after `av` at the start of a path segment.
pub fn direct_aid(segment: &str) -> Option<u64> {
    DIRECT_AID
        .captures(segment)
        .and_then(|c| c[1].parse().ok())
}

/// First `AV<digits>` marker in an episode page.
pub fn episode_aid(markup: &str) -> Option<u64> {
    EPISODE_AID
        .captures(markup)
        .and_then(|c| c[1].parse().ok())
}

/// Second `"aid":<digits>` field in a season page's embedded state.
///
/// For anonymous requests the first occurrence is a placeholder `0`, so it is
/// skipped. This only holds for season pages and has not been verified for
/// logged-in responses; do not reuse it elsewhere.
pub fn season_aid(markup: &str) -> Option<u64> {
    season_aid_fields(markup).nth(1).and_then(|s| s.parse().ok())
}

fn season_aid_fields(markup: &str) -> impl Iterator<Item = &str> {
    SEASON_AID
        .captures_iter(markup)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
}

/// Extracts the aid for `url` using the strategy of `kind`.
pub fn extract_identifier(kind: UrlKind, url: &str, fetcher: &dyn Fetch) -> Result<VideoId> {
    let found = match kind {
        UrlKind::Direct => last_path_segment(url).as_deref().and_then(direct_aid),
        UrlKind::Episode => episode_aid(&fetch_page(fetcher, url)?),
        UrlKind::Season => {
            let markup = fetch_page(fetcher, url)?;
            let aid = season_aid(&markup);
            match aid {
                Some(chosen) => tracing::debug!(
                    %url,
                    skipped = season_aid_fields(&markup).next().unwrap_or_default(),
                    chosen,
                    "season page: skipped first aid field, using the second"
                ),
                None => tracing::warn!(%url, "season page has fewer than two aid fields"),
            }
            aid
        }
    };

    found.map(VideoId).ok_or_else(|| DmkError::IdentifierNotFound {
        kind,
        url: url.to_string(),
    })
}

fn fetch_page(fetcher: &dyn Fetch, url: &str) -> Result<String> {
    fetcher
        .get_text(url, &[])
        .map_err(|source| DmkError::Fetch {
            url: url.to_string(),
            source,
        })
}
