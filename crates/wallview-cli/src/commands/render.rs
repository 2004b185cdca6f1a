use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use wallview_core::io::image_io::{load_wallpaper, save_preview};
use wallview_core::render::render_preview;
use wallview_core::wall::{StageLimits, WallDimensions};

use super::{prepare_session, WallArgs};
use crate::summary::print_layout_summary;

#[derive(Args)]
pub struct RenderArgs {
    /// Wallpaper image file
    #[arg(short, long)]
    pub image: PathBuf,

    /// Output image (format from extension, PNG if unknown)
    #[arg(short, long, default_value = "preview.png")]
    pub output: PathBuf,

    #[command(flatten)]
    pub wall: WallArgs,
}

pub fn run(args: &RenderArgs) -> Result<()> {
    render_to_file(
        &args.image,
        &args.output,
        args.wall.wall(),
        StageLimits::default(),
        args.wall.pan,
    )
}

/// Load, lay out, composite and save one preview.
pub fn render_to_file(
    image: &Path,
    output: &Path,
    wall: WallDimensions,
    limits: StageLimits,
    pan: f64,
) -> Result<()> {
    let bitmap = load_wallpaper(image)
        .with_context(|| format!("Failed to load {}", image.display()))?;

    let visualizer = prepare_session(wall, limits, bitmap.size(), pan);
    print_layout_summary(&visualizer, Some(image));

    let preview = render_preview(&bitmap, visualizer.layout(), visualizer.stage_size())
        .context("Failed to render preview")?;
    save_preview(&preview, output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("Preview saved to {}", output.display());
    Ok(())
}
