use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use wallview_core::config::PreviewConfig;

use super::render::render_to_file;

#[derive(Args)]
pub struct RunArgs {
    /// TOML preview config
    pub config: PathBuf,
}

pub fn run(args: &RunArgs) -> Result<()> {
    let config = PreviewConfig::load(&args.config)
        .with_context(|| format!("Failed to read config {}", args.config.display()))?;
    render_to_file(
        &config.wallpaper,
        &config.output,
        config.wall,
        config.stage,
        config.pan_offset,
    )
}
