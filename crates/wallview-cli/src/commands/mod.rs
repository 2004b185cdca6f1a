pub mod config;
pub mod info;
pub mod layout;
pub mod render;
pub mod run;

use clap::Args;
use wallview_core::consts::{DEFAULT_WALL_HEIGHT_CM, DEFAULT_WALL_WIDTH_CM};
use wallview_core::visualizer::Visualizer;
use wallview_core::wall::{ImageSize, StageLimits, WallDimensions};

/// Wall and pan options shared by `layout` and `render`.
#[derive(Args)]
pub struct WallArgs {
    /// Wall width in centimetres
    #[arg(long, default_value_t = DEFAULT_WALL_WIDTH_CM)]
    pub width: f64,

    /// Wall height in centimetres
    #[arg(long, default_value_t = DEFAULT_WALL_HEIGHT_CM)]
    pub height: f64,

    /// Horizontal pan, applied as one drag from the rest position
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub pan: f64,
}

impl WallArgs {
    pub fn wall(&self) -> WallDimensions {
        WallDimensions::new(self.width, self.height)
    }
}

/// Build a visualizer session and replay the requested pan as a drag gesture.
///
/// A rejected pan leaves the pattern at rest, exactly as an out-of-bound
/// drag would.
pub fn prepare_session(
    wall: WallDimensions,
    limits: StageLimits,
    image: ImageSize,
    pan: f64,
) -> Visualizer {
    let mut visualizer = Visualizer::new(limits, wall);
    visualizer.set_wallpaper(Some(image));

    let accepted = if pan == 0.0 {
        true
    } else {
        visualizer.pointer_down(0.0);
        let accepted = visualizer.pointer_move(pan);
        visualizer.pointer_up();
        accepted
    };

    if !accepted {
        tracing::warn!(
            pan,
            bound = visualizer.pan_bound().unwrap_or(f64::NAN),
            "Pan exceeds one tile width, keeping rest position"
        );
    }
    visualizer
}
