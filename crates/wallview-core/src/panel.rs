use std::sync::Arc;

use tracing::{debug, info};

use crate::io::image_io::WallpaperBitmap;
use crate::wall::{parse_dimension, WallDimensions};

/// Identifies one wallpaper selection. Only the newest ticket may publish.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DecodeTicket(u64);

impl DecodeTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// User-editable inputs: wall size and the selected wallpaper.
#[derive(Debug, Default)]
pub struct ConfigPanel {
    wall: WallDimensions,
    wallpaper: Option<Arc<WallpaperBitmap>>,
    issued: u64,
}

impl ConfigPanel {
    pub fn new(wall: WallDimensions) -> Self {
        Self {
            wall,
            wallpaper: None,
            issued: 0,
        }
    }

    pub fn wall(&self) -> WallDimensions {
        self.wall
    }

    pub fn wallpaper(&self) -> Option<&Arc<WallpaperBitmap>> {
        self.wallpaper.as_ref()
    }

    /// Stored verbatim, no validation.
    pub fn set_wall_width(&mut self, width: f64) {
        self.wall.width = width;
    }

    /// Stored verbatim, no validation.
    pub fn set_wall_height(&mut self, height: f64) {
        self.wall.height = height;
    }

    pub fn set_wall_width_text(&mut self, text: &str) {
        self.set_wall_width(parse_dimension(text));
    }

    pub fn set_wall_height_text(&mut self, text: &str) {
        self.set_wall_height(parse_dimension(text));
    }

    /// Start a new wallpaper selection. Any earlier selection still decoding
    /// becomes stale.
    pub fn select_wallpaper_file(&mut self) -> DecodeTicket {
        self.issued += 1;
        debug!(ticket = self.issued, "Wallpaper selection started");
        DecodeTicket(self.issued)
    }

    /// Apply a finished decode. Returns `false` (and drops the bitmap) when
    /// a newer selection or a clear happened in the meantime.
    pub fn complete_selection(&mut self, ticket: DecodeTicket, bitmap: WallpaperBitmap) -> bool {
        if !self.is_current(ticket) {
            debug!(ticket = ticket.0, latest = self.issued, "Stale wallpaper decode dropped");
            return false;
        }
        info!(name = %bitmap.name(), width = bitmap.width(), height = bitmap.height(), "Wallpaper selected");
        self.wallpaper = Some(Arc::new(bitmap));
        true
    }

    /// No file chosen: drop the wallpaper and invalidate pending decodes.
    pub fn clear_wallpaper(&mut self) {
        self.issued += 1;
        self.wallpaper = None;
    }

    pub fn is_current(&self, ticket: DecodeTicket) -> bool {
        ticket.0 == self.issued
    }
}
