use tracing::{debug, warn};

use crate::consts::{EDGE_MARGIN_TILES, MAX_TILES};
use crate::wall::{scaled_tile_width, viewport_scale, ImageSize, StageLimits, WallDimensions};

/// One copy of the wallpaper, in stage coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tile {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Tile {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// Result of a single layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct TileLayout {
    pub scale: f64,
    /// Width of every tile after scaling into the stage.
    pub tile_width: f64,
    /// Wall width after scaling into the stage.
    pub visible_width: f64,
    pub repetitions: usize,
    /// Shift that centres tile 0 on the visible wall.
    pub centering_offset: f64,
    pub tiles: Vec<Tile>,
}

impl TileLayout {
    /// Layout of an empty viewport.
    pub fn empty() -> Self {
        Self {
            scale: 1.0,
            tile_width: 0.0,
            visible_width: 0.0,
            repetitions: 0,
            centering_offset: 0.0,
            tiles: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Horizontal span `[left, right)` covered by the tiles.
    pub fn covered_span(&self) -> Option<(f64, f64)> {
        let first = self.tiles.first()?;
        let last = self.tiles.last()?;
        Some((first.x, last.right()))
    }
}

impl Default for TileLayout {
    fn default() -> Self {
        Self::empty()
    }
}

/// Lay out the wallpaper tiles for a wall, an optional image and a pan offset.
///
/// `pan_offset` is in unscaled units; it is multiplied by the stage scale
/// before being applied. The tile sequence starts [`EDGE_MARGIN_TILES`]
/// before the centred tile and has `ceil(visible / tile) + 2 * margin` entries,
/// at most [`MAX_TILES`].
pub fn compute_layout(
    wall: &WallDimensions,
    limits: &StageLimits,
    image: Option<ImageSize>,
    pan_offset: f64,
) -> TileLayout {
    let Some(image) = image else {
        return TileLayout::empty();
    };

    let scale = viewport_scale(wall, limits);
    let tile_width = scaled_tile_width(wall, image, scale);
    let visible_width = wall.width * scale;
    let tile_height = wall.height * scale;

    let span = (visible_width / tile_width).ceil();
    if !wall.is_valid()
        || !(tile_width.is_finite() && tile_width > 0.0)
        || !(tile_height.is_finite() && tile_height > 0.0)
        || !span.is_finite()
        || !pan_offset.is_finite()
    {
        warn!(
            wall_width = wall.width,
            wall_height = wall.height,
            image_width = image.width,
            image_height = image.height,
            "Degenerate layout inputs, rendering empty viewport"
        );
        return TileLayout::empty();
    }

    if span > (MAX_TILES - 2 * EDGE_MARGIN_TILES) as f64 {
        warn!(
            wall_width = wall.width,
            wall_height = wall.height,
            image_width = image.width,
            image_height = image.height,
            span,
            max_tiles = MAX_TILES,
            "Layout needs too many tiles, rendering empty viewport"
        );
        return TileLayout::empty();
    }

    let repetitions = span as usize + 2 * EDGE_MARGIN_TILES;
    let centering_offset = (visible_width - tile_width) / 2.0;
    let shift = pan_offset * scale + centering_offset;

    let first = -(EDGE_MARGIN_TILES as i64);
    let tiles: Vec<Tile> = (first..first + repetitions as i64)
        .map(|i| Tile {
            x: i as f64 * tile_width + shift,
            y: 0.0,
            width: tile_width,
            height: tile_height,
        })
        .collect();

    debug!(
        scale,
        tile_width, visible_width, repetitions, centering_offset, pan_offset, "Layout pass"
    );

    TileLayout {
        scale,
        tile_width,
        visible_width,
        repetitions,
        centering_offset,
        tiles,
    }
}
