//! Part (page) listing for a video.

use serde::{Deserialize, Serialize};

use crate::config::DmkConfig;
use crate::error::{DmkError, Result};
use crate::fetch::Fetch;
use crate::resolve::VideoId;

/// One part of a video, as reported by the page list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartDescriptor {
    /// 1-based ordinal within the video.
    pub page: u32,
    #[serde(rename = "pagename")]
    pub part_name: String,
    /// Secondary identifier used to fetch this part's comment file.
    pub cid: u64,
}

/// Parses the page list response body.
pub fn parse_page_list(aid: VideoId, body: &[u8]) -> Result<Vec<PartDescriptor>> {
    serde_json::from_slice(body).map_err(|source| DmkError::MalformedPageList {
        aid: aid.get(),
        source,
    })
}

/// Requests the full part list of `aid` in one call; order is preserved.
pub fn list_parts(
    fetcher: &dyn Fetch,
    cfg: &DmkConfig,
    aid: VideoId,
) -> Result<Vec<PartDescriptor>> {
    let aid_param = aid.to_string();
    let body = fetcher
        .get(&cfg.page_list_endpoint, &[("aid", aid_param.as_str())])
        .map_err(|source| DmkError::Fetch {
            url: cfg.page_list_endpoint.clone(),
            source,
        })?;
    let parts = parse_page_list(aid, &body)?;
    tracing::info!(%aid, parts = parts.len(), "listed parts");
    Ok(parts)
}
