/// Maximum on-screen stage width, in device-independent units.
pub const MAX_STAGE_WIDTH: f64 = 1000.0;

/// Maximum on-screen stage height, in device-independent units.
pub const MAX_STAGE_HEIGHT: f64 = 800.0;

/// Extra tiles laid out before the first visible index and after the last,
/// so a pan of up to one tile never exposes an edge.
pub const EDGE_MARGIN_TILES: usize = 2;

/// Default wall width in centimetres.
pub const DEFAULT_WALL_WIDTH_CM: f64 = 800.0;

/// Default wall height in centimetres.
pub const DEFAULT_WALL_HEIGHT_CM: f64 = 600.0;

/// Minimum pixel count (w*h) of a rendered preview to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Fill colour for stage pixels not covered by any tile (RGBA).
pub const BACKGROUND_RGBA: [u8; 4] = [30, 30, 30, 255];

/// Upper bound on the tiles of one layout pass. Walls that would need more
/// are treated as degenerate and render an empty viewport.
pub const MAX_TILES: usize = 4096;

/// Upper bound on the pixel count of a rendered preview.
pub const MAX_PREVIEW_PIXELS: u64 = 64 * 1024 * 1024;
