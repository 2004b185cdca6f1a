use image::RgbaImage;
use rayon::prelude::*;
use tracing::info;

use crate::consts::{BACKGROUND_RGBA, MAX_PREVIEW_PIXELS, PARALLEL_PIXEL_THRESHOLD};
use crate::error::{Result, WallviewError};
use crate::io::image_io::WallpaperBitmap;
use crate::layout::TileLayout;

/// Composite a tile layout into an RGBA image of the given stage size.
///
/// Every tile shows the whole bitmap stretched to its rectangle (nearest
/// neighbour). Pixels outside all tiles get [`BACKGROUND_RGBA`]. Stages larger
/// than [`MAX_PREVIEW_PIXELS`] are rejected.
pub fn render_preview(
    bitmap: &WallpaperBitmap,
    layout: &TileLayout,
    stage: (f64, f64),
) -> Result<RgbaImage> {
    let (stage_w, stage_h) = stage;
    if !(stage_w.is_finite() && stage_h.is_finite() && stage_w >= 1.0 && stage_h >= 1.0) {
        return Err(WallviewError::InvalidStage {
            width: stage_w,
            height: stage_h,
        });
    }
    let width = stage_w.round() as u32;
    let height = stage_h.round() as u32;
    if width as u64 * height as u64 > MAX_PREVIEW_PIXELS {
        return Err(WallviewError::InvalidStage {
            width: stage_w,
            height: stage_h,
        });
    }

    let mut canvas = RgbaImage::new(width, height);
    let row_bytes = width as usize * 4;
    let sampler = TileSampler::new(bitmap, layout);

    let fill_row = |(row, out): (usize, &mut [u8])| sampler.fill_row(row as u32, out);
    let buf: &mut [u8] = &mut canvas;
    if (width as usize) * (height as usize) >= PARALLEL_PIXEL_THRESHOLD {
        buf.par_chunks_mut(row_bytes).enumerate().for_each(fill_row);
    } else {
        buf.chunks_mut(row_bytes).enumerate().for_each(fill_row);
    }

    info!(width, height, tiles = layout.tiles.len(), "Preview rendered");
    Ok(canvas)
}

/// Maps stage pixels back to bitmap pixels.
struct TileSampler<'a> {
    bitmap: &'a WallpaperBitmap,
    layout: &'a TileLayout,
    tile_height: f64,
}

impl<'a> TileSampler<'a> {
    fn new(bitmap: &'a WallpaperBitmap, layout: &'a TileLayout) -> Self {
        let tile_height = layout.tiles.first().map_or(0.0, |t| t.height);
        Self {
            bitmap,
            layout,
            tile_height,
        }
    }

    fn fill_row(&self, row: u32, out: &mut [u8]) {
        let src_y = self.source_row(row);
        for (col, px) in out.chunks_exact_mut(4).enumerate() {
            let rgba = src_y
                .and_then(|sy| self.source_col(col as u32).map(|sx| (sx, sy)))
                .map_or(BACKGROUND_RGBA, |(sx, sy)| self.bitmap.pixels().get_pixel(sx, sy).0);
            px.copy_from_slice(&rgba);
        }
    }

    fn source_row(&self, row: u32) -> Option<u32> {
        let y = row as f64 + 0.5;
        if self.layout.is_empty() || y >= self.tile_height {
            return None;
        }
        let ih = self.bitmap.height();
        Some(((y / self.tile_height * ih as f64) as u32).min(ih - 1))
    }

    fn source_col(&self, col: u32) -> Option<u32> {
        let first = self.layout.tiles.first()?;
        let tile_width = self.layout.tile_width;
        let x = col as f64 + 0.5;

        let index = ((x - first.x) / tile_width).floor();
        if index < 0.0 || index as usize >= self.layout.tiles.len() {
            return None;
        }
        let tile = &self.layout.tiles[index as usize];
        let local = ((x - tile.x) / tile_width).clamp(0.0, 1.0);
        let iw = self.bitmap.width();
        Some(((local * iw as f64) as u32).min(iw - 1))
    }
}
