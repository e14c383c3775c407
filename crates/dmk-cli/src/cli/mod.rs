//! CLI for the DMK comment overlay fetcher.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dmk_core::config;
use dmk_core::fetch::CurlFetcher;
use std::path::PathBuf;

use commands::{run_comment, run_fetch, run_pages, run_resolve};

/// Top-level CLI for DMK.
#[derive(Debug, Parser)]
#[command(name = "dmk")]
#[command(
    about = "DMK: download the comment overlay files of every part of a video",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve a video URL, list its parts and download each part's comment file.
    Fetch {
        /// Video URL (`…/av<id>`, `…/ep<id>` or `…/ss<id>`).
        /// Defaults to `default_url` from config.
        url: Option<String>,
        /// Directory to write `<cid>.xml` files to. Defaults to `output_dir` from config.
        #[arg(long, short = 'o', value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },

    /// Print the video identifier (aid) of a URL.
    Resolve {
        /// Video URL.
        url: String,
    },

    /// List the parts (page, cid, name) of a video.
    Pages {
        /// Video URL.
        url: String,
    },

    /// Download the comment file of a single part by its cid.
    Comment {
        /// Part identifier.
        cid: u64,
        /// Directory to write `<cid>.xml` to. Defaults to `output_dir` from config.
        #[arg(long, short = 'o', value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let fetcher = CurlFetcher::from_config(&cfg);

        match cli.command {
            CliCommand::Fetch { url, output_dir } => {
                let url = url.unwrap_or_else(|| cfg.default_url.clone());
                let output_dir = output_dir.unwrap_or_else(|| cfg.output_dir.clone());
                run_fetch(&fetcher, &cfg, &url, &output_dir)?;
            }
            CliCommand::Resolve { url } => run_resolve(&fetcher, &url)?,
            CliCommand::Pages { url } => run_pages(&fetcher, &cfg, &url)?,
            CliCommand::Comment { cid, output_dir } => {
                let output_dir = output_dir.unwrap_or_else(|| cfg.output_dir.clone());
                run_comment(&fetcher, &cfg, cid, &output_dir)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
