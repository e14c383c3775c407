use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::DmkError;

/// Placeholder replaced by the part cid in `comment_endpoint`.
pub const CID_PLACEHOLDER: &str = "{cid}";

/// Global configuration loaded from `~/.config/dmk/config.toml`.
/// Missing keys take their default value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DmkConfig {
    /// `User-Agent` sent with every request.
    pub user_agent: String,
    /// Page list endpoint; called with `?aid=<id>`.
    pub page_list_endpoint: String,
    /// Comment file URL template; `{cid}` is replaced by the part cid.
    pub comment_endpoint: String,
    /// Video URL used by `dmk fetch` when none is given.
    pub default_url: String,
    /// Directory comment files are written to when none is given.
    pub output_dir: PathBuf,
}

impl Default for DmkConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_14_6) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/76.0.3809.87 Safari/537.36"
                .to_string(),
            page_list_endpoint: "https://www.bilibili.com/widget/getPageList".to_string(),
            comment_endpoint: "https://comment.bilibili.com/{cid}.xml".to_string(),
            default_url: "https://www.bilibili.com/video/av83611605".to_string(),
            output_dir: PathBuf::from("comment"),
        }
    }
}

impl DmkConfig {
    /// Rejects values that would make every request fail later on.
    pub fn validate(&self) -> Result<(), DmkError> {
        if self.user_agent.trim().is_empty() {
            return Err(DmkError::Config("user_agent must not be empty".into()));
        }
        if url::Url::parse(&self.page_list_endpoint).is_err() {
            return Err(DmkError::Config(format!(
                "page_list_endpoint is not a valid URL: {}",
                self.page_list_endpoint
            )));
        }
        if !self.comment_endpoint.contains(CID_PLACEHOLDER) {
            return Err(DmkError::Config(format!(
                "comment_endpoint must contain {}: {}",
                CID_PLACEHOLDER, self.comment_endpoint
            )));
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dmk")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DmkConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DmkConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: DmkConfig = toml::from_str(&data)?;
    cfg.validate()?;
    Ok(cfg)
}
