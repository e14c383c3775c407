use std::fmt;

use crate::error::{DmkError, Result};

/// The three URL shapes the resolver understands, keyed by the prefix of the
/// last path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlKind {
    /// `ss<digits>`: a season (bangumi) landing page.
    Season,
    /// `ep<digits>`: a single episode page.
    Episode,
    /// `av<digits>`: the aid is in the URL itself.
    Direct,
}

impl UrlKind {
    pub fn prefix(self) -> &'static str {
        match self {
            UrlKind::Season => "ss",
            UrlKind::Episode => "ep",
            UrlKind::Direct => "av",
        }
    }

    pub fn from_segment(segment: &str) -> Option<Self> {
        [UrlKind::Season, UrlKind::Episode, UrlKind::Direct]
            .into_iter()
            .find(|k| segment.starts_with(k.prefix()))
    }
}

impl fmt::Display for UrlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UrlKind::Season => "season",
            UrlKind::Episode => "episode",
            UrlKind::Direct => "direct",
        })
    }
}

/// Last non-empty path segment of `url`, query and fragment excluded.
///
/// Returns `None` if the URL cannot be parsed or the path is empty/root.
pub fn last_path_segment(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().split('/').filter(|s| !s.is_empty()).last()?;
    Some(segment.to_string())
}

/// Classifies `url` by the prefix of its last path segment.
pub fn classify(url: &str) -> Result<(UrlKind, String)> {
    let segment = last_path_segment(url).unwrap_or_default();
    match UrlKind::from_segment(&segment) {
        Some(kind) => Ok((kind, segment)),
        None => Err(DmkError::UnrecognizedUrlKind {
            url: url.to_string(),
            segment,
        }),
    }
}
