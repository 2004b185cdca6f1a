use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use wallview_core::io::image_io::load_wallpaper;
use wallview_core::wall::StageLimits;

use super::{prepare_session, WallArgs};
use crate::summary::{print_layout_summary, print_tiles};

#[derive(Args)]
pub struct LayoutArgs {
    /// Wallpaper image file
    #[arg(short, long)]
    pub image: PathBuf,

    #[command(flatten)]
    pub wall: WallArgs,

    /// Only print the summary, not every tile
    #[arg(long)]
    pub summary_only: bool,
}

pub fn run(args: &LayoutArgs) -> Result<()> {
    let bitmap = load_wallpaper(&args.image)
        .with_context(|| format!("Failed to load {}", args.image.display()))?;

    let visualizer = prepare_session(
        args.wall.wall(),
        StageLimits::default(),
        bitmap.size(),
        args.wall.pan,
    );

    print_layout_summary(&visualizer, Some(args.image.as_path()));
    if !args.summary_only {
        print_tiles(visualizer.layout());
    }
    Ok(())
}
