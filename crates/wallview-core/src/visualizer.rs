use crate::layout::{compute_layout, TileLayout};
use crate::pan::{PanSession, PanState};
use crate::wall::{
    scaled_tile_width, stage_size, viewport_scale, ImageSize, StageLimits, WallDimensions,
};

/// One tiling preview session.
///
/// Holds every input of the layout together with the pan gesture state and
/// the most recent [`TileLayout`]. Each input change that affects geometry
/// triggers exactly one relayout; unchanged inputs leave the layout alone.
#[derive(Clone, Debug)]
pub struct Visualizer {
    limits: StageLimits,
    wall: WallDimensions,
    image: Option<ImageSize>,
    pan: PanSession,
    layout: TileLayout,
    relayouts: u64,
}

impl Visualizer {
    pub fn new(limits: StageLimits, wall: WallDimensions) -> Self {
        let mut visualizer = Self {
            limits,
            wall,
            image: None,
            pan: PanSession::new(),
            layout: TileLayout::empty(),
            relayouts: 0,
        };
        visualizer.relayout();
        visualizer
    }

    pub fn limits(&self) -> &StageLimits {
        &self.limits
    }

    pub fn wall(&self) -> &WallDimensions {
        &self.wall
    }

    pub fn image(&self) -> Option<ImageSize> {
        self.image
    }

    pub fn layout(&self) -> &TileLayout {
        &self.layout
    }

    pub fn pan_offset(&self) -> f64 {
        self.pan.offset()
    }

    pub fn pan_state(&self) -> PanState {
        self.pan.state()
    }

    /// Number of layout passes run so far.
    pub fn relayout_count(&self) -> u64 {
        self.relayouts
    }

    /// Stage scale of the current wall.
    pub fn scale(&self) -> f64 {
        viewport_scale(&self.wall, &self.limits)
    }

    /// Stage size in device-independent units.
    pub fn stage_size(&self) -> (f64, f64) {
        stage_size(&self.wall, &self.limits)
    }

    /// Maximum pan travel in either direction: one scaled tile width.
    pub fn pan_bound(&self) -> Option<f64> {
        self.image
            .map(|image| scaled_tile_width(&self.wall, image, self.scale()))
    }

    /// Returns `true` if the wall changed and a relayout ran. The pan offset
    /// is kept, clamped to the bound of the new wall.
    pub fn set_wall(&mut self, wall: WallDimensions) -> bool {
        // Bitwise compare so NaN -> NaN is not seen as a change every frame.
        if wall.width.to_bits() == self.wall.width.to_bits()
            && wall.height.to_bits() == self.wall.height.to_bits()
        {
            return false;
        }
        self.wall = wall;
        if let Some(bound) = self.pan_bound() {
            self.pan.clamp_to(bound);
        }
        self.relayout();
        true
    }

    /// Publish a new wallpaper (or clear it). Every publish resets the pan
    /// to its rest position, since the bound depends on the image.
    pub fn set_wallpaper(&mut self, image: Option<ImageSize>) {
        self.image = image;
        self.pan.reset();
        self.relayout();
    }

    pub fn pointer_down(&mut self, x: f64) {
        self.pan.pointer_down(x);
    }

    /// Returns `true` if the move was accepted and the layout recomputed.
    pub fn pointer_move(&mut self, x: f64) -> bool {
        let Some(bound) = self.pan_bound() else {
            return false;
        };
        if self.pan.pointer_move(x, bound) {
            self.relayout();
            true
        } else {
            false
        }
    }

    pub fn pointer_up(&mut self) {
        self.pan.pointer_up();
    }

    pub fn pointer_leave(&mut self) {
        self.pan.pointer_leave();
    }

    fn relayout(&mut self) {
        self.layout = compute_layout(&self.wall, &self.limits, self.image, self.pan.offset());
        self.relayouts += 1;
    }
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new(StageLimits::default(), WallDimensions::default())
    }
}
