use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_WALL_HEIGHT_CM, DEFAULT_WALL_WIDTH_CM, MAX_STAGE_HEIGHT, MAX_STAGE_WIDTH,
};

/// Physical wall size in centimetres.
///
/// Values are stored exactly as entered. Nothing here rejects zero, negative
/// or NaN sizes; the layout treats such walls as degenerate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallDimensions {
    pub width: f64,
    pub height: f64,
}

impl WallDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both sides are finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl Default for WallDimensions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WALL_WIDTH_CM,
            height: DEFAULT_WALL_HEIGHT_CM,
        }
    }
}

/// Pixel size of a decoded wallpaper bitmap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Natural aspect ratio `width / height`.
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

/// Upper bounds of the on-screen stage the wall is shrunk into.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageLimits {
    pub max_width: f64,
    pub max_height: f64,
}

impl Default for StageLimits {
    fn default() -> Self {
        Self {
            max_width: MAX_STAGE_WIDTH,
            max_height: MAX_STAGE_HEIGHT,
        }
    }
}

/// Uniform shrink factor that fits the wall into the stage, never above 1.
pub fn viewport_scale(wall: &WallDimensions, limits: &StageLimits) -> f64 {
    let scale_x = limits.max_width / wall.width;
    let scale_y = limits.max_height / wall.height;
    // f64::min ignores a NaN operand, so propagate it explicitly.
    if scale_x.is_nan() || scale_y.is_nan() {
        return f64::NAN;
    }
    1.0f64.min(scale_x).min(scale_y)
}

/// Stage size `(min(width, max_width), min(height, max_height))`.
pub fn stage_size(wall: &WallDimensions, limits: &StageLimits) -> (f64, f64) {
    (
        wall.width.min(limits.max_width),
        wall.height.min(limits.max_height),
    )
}

/// Width of one tile after the image is stretched to the wall height and
/// the result is scaled into the stage.
pub fn scaled_tile_width(wall: &WallDimensions, image: ImageSize, scale: f64) -> f64 {
    image.width as f64 * (wall.height / image.height as f64) * scale
}

/// Parse a wall dimension typed into a text field.
///
/// Anything that is not a decimal number becomes NaN and is passed through.
pub fn parse_dimension(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}
