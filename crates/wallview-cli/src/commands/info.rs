use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use wallview_core::io::image_io::load_wallpaper;

#[derive(Args)]
pub struct InfoArgs {
    /// Wallpaper image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let bitmap = load_wallpaper(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", bitmap.width(), bitmap.height());
    println!("Aspect:      {:.4}", bitmap.aspect_ratio());

    let size_kb = bitmap.pixels().as_raw().len() as f64 / 1024.0;
    println!("Decoded:     {:.1} KB", size_kb);

    Ok(())
}
