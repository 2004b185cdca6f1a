use approx::assert_relative_eq;

use wallview_core::consts::{EDGE_MARGIN_TILES, MAX_TILES};
use wallview_core::layout::compute_layout;
use wallview_core::panel::ConfigPanel;
use wallview_core::wall::{stage_size, viewport_scale, ImageSize, StageLimits, WallDimensions};

fn limits() -> StageLimits {
    StageLimits::default()
}

// ---------------------------------------------------------------------------
// Scale
// ---------------------------------------------------------------------------

#[test]
fn test_scale_is_one_for_small_wall() {
    let wall = WallDimensions::new(800.0, 600.0);
    assert_relative_eq!(viewport_scale(&wall, &limits()), 1.0);
}

#[test]
fn test_scale_shrinks_to_tighter_axis() {
    let wall = WallDimensions::new(2000.0, 1500.0);
    assert_relative_eq!(viewport_scale(&wall, &limits()), 0.5);
}

#[test]
fn test_scale_height_bound() {
    let wall = WallDimensions::new(500.0, 1600.0);
    assert_relative_eq!(viewport_scale(&wall, &limits()), 0.5);
}

#[test]
fn test_scale_in_unit_interval() {
    for &(w, h) in &[(1.0, 1.0), (999.0, 799.0), (1000.0, 800.0), (12_345.0, 67.0), (3.0, 90_000.0)] {
        let s = viewport_scale(&WallDimensions::new(w, h), &limits());
        assert!(s > 0.0 && s <= 1.0, "scale {s} for {w}x{h}");
    }
}

#[test]
fn test_scale_nan_propagates() {
    let wall = WallDimensions::new(f64::NAN, 600.0);
    assert!(viewport_scale(&wall, &limits()).is_nan());
}

#[test]
fn test_stage_size_caps() {
    assert_eq!(stage_size(&WallDimensions::new(800.0, 600.0), &limits()), (800.0, 600.0));
    assert_eq!(stage_size(&WallDimensions::new(2000.0, 1500.0), &limits()), (1000.0, 800.0));
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

#[test]
fn test_no_image_gives_empty_layout() {
    let layout = compute_layout(&WallDimensions::new(800.0, 600.0), &limits(), None, 0.0);
    assert!(layout.is_empty());
    assert_eq!(layout.repetitions, 0);
}

#[test]
fn test_two_to_one_bitmap() {
    let wall = WallDimensions::new(800.0, 600.0);
    let layout = compute_layout(&wall, &limits(), Some(ImageSize::new(200, 100)), 0.0);

    assert_relative_eq!(layout.scale, 1.0);
    assert_relative_eq!(layout.tile_width, 1200.0);
    assert_relative_eq!(layout.visible_width, 800.0);
    assert_eq!(layout.repetitions, 5);
    assert_eq!(layout.tiles.len(), 5);
    assert_relative_eq!(layout.centering_offset, -200.0);

    // i = -2..3
    let xs: Vec<f64> = layout.tiles.iter().map(|t| t.x).collect();
    let expected = [-2600.0, -1400.0, -200.0, 1000.0, 2200.0];
    for (x, e) in xs.iter().zip(expected) {
        assert_relative_eq!(*x, e);
    }
    for tile in &layout.tiles {
        assert_relative_eq!(tile.y, 0.0);
        assert_relative_eq!(tile.width, 1200.0);
        assert_relative_eq!(tile.height, 600.0);
    }
}

#[test]
fn test_tile_count_formula() {
    let cases = [
        (800.0, 600.0, 100, 200),
        (2000.0, 1500.0, 640, 480),
        (350.0, 260.0, 32, 32),
        (5000.0, 250.0, 10, 300),
    ];
    for (w, h, iw, ih) in cases {
        let wall = WallDimensions::new(w, h);
        let image = ImageSize::new(iw, ih);
        let layout = compute_layout(&wall, &limits(), Some(image), 0.0);
        let scale = viewport_scale(&wall, &limits());
        let tile = iw as f64 * (h / ih as f64) * scale;
        let expected = (w * scale / tile).ceil() as usize + 4;
        assert_eq!(layout.tiles.len(), expected, "{w}x{h} with {iw}x{ih}");
        assert!(layout.tiles.len() >= 1);
    }
}

#[test]
fn test_tiles_are_contiguous() {
    let wall = WallDimensions::new(1234.0, 567.0);
    let layout = compute_layout(&wall, &limits(), Some(ImageSize::new(77, 130)), 13.0);
    for pair in layout.tiles.windows(2) {
        assert_relative_eq!(pair[0].right(), pair[1].x, epsilon = 1e-9);
    }
}

#[test]
fn test_tiles_cover_visible_width_across_pan_range() {
    let wall = WallDimensions::new(2400.0, 900.0);
    let image = ImageSize::new(500, 300);
    let rest = compute_layout(&wall, &limits(), Some(image), 0.0);
    let bound = rest.tile_width;

    let steps = 20;
    for k in 0..=steps {
        let pan = -bound + 2.0 * bound * k as f64 / steps as f64;
        let layout = compute_layout(&wall, &limits(), Some(image), pan);
        let (left, right) = layout.covered_span().unwrap();
        assert!(left <= 0.0, "gap on the left at pan {pan}: {left}");
        assert!(right >= layout.visible_width, "gap on the right at pan {pan}: {right}");
    }
}

#[test]
fn test_pan_shifts_tiles_by_scaled_offset() {
    let wall = WallDimensions::new(2000.0, 1500.0);
    let image = ImageSize::new(100, 100);
    let rest = compute_layout(&wall, &limits(), Some(image), 0.0);
    let panned = compute_layout(&wall, &limits(), Some(image), 50.0);
    for (a, b) in rest.tiles.iter().zip(&panned.tiles) {
        assert_relative_eq!(b.x - a.x, 25.0, epsilon = 1e-9);
    }
}

#[test]
fn test_layout_is_idempotent() {
    let wall = WallDimensions::new(1800.0, 950.0);
    let image = Some(ImageSize::new(512, 384));
    let a = compute_layout(&wall, &limits(), image, -42.5);
    let b = compute_layout(&wall, &limits(), image, -42.5);
    assert_eq!(a, b);
}

#[test]
fn test_centering_places_tile_zero_in_middle() {
    let wall = WallDimensions::new(900.0, 300.0);
    let layout = compute_layout(&wall, &limits(), Some(ImageSize::new(100, 100)), 0.0);
    // tile index 0 is third in the list
    let tile = layout.tiles[2];
    assert_relative_eq!(tile.x + tile.width / 2.0, layout.visible_width / 2.0);
}

// ---------------------------------------------------------------------------
// Degenerate inputs
// ---------------------------------------------------------------------------

#[test]
fn test_nan_wall_gives_empty_layout() {
    let wall = WallDimensions::new(f64::NAN, 600.0);
    let layout = compute_layout(&wall, &limits(), Some(ImageSize::new(10, 10)), 0.0);
    assert!(layout.is_empty());
}

#[test]
fn test_zero_height_image_gives_empty_layout() {
    let wall = WallDimensions::new(800.0, 600.0);
    let layout = compute_layout(&wall, &limits(), Some(ImageSize::new(10, 0)), 0.0);
    assert!(layout.is_empty());
}

#[test]
fn test_negative_wall_gives_empty_layout() {
    let wall = WallDimensions::new(800.0, -600.0);
    let layout = compute_layout(&wall, &limits(), Some(ImageSize::new(10, 10)), 0.0);
    assert!(layout.is_empty());
}

#[test]
fn test_huge_wall_width_gives_empty_layout() {
    let mut panel = ConfigPanel::new(WallDimensions::new(800.0, 600.0));
    panel.set_wall_width_text("1e300");
    let layout = compute_layout(&panel.wall(), &limits(), Some(ImageSize::new(100, 100)), 0.0);
    assert!(layout.is_empty());
}

#[test]
fn test_tile_count_over_cap_gives_empty_layout() {
    // 1x1000 image on a 1e9 x 1 wall would need about 1e12 tiles.
    let wall = WallDimensions::new(1e9, 1.0);
    let layout = compute_layout(&wall, &limits(), Some(ImageSize::new(1, 1000)), 0.0);
    assert!(layout.is_empty());
}

#[test]
fn test_tile_count_just_under_cap() {
    // Square image, 1000 x 0.25 wall: 4000 visible tiles plus margins.
    let wall = WallDimensions::new(1000.0, 0.25);
    let layout = compute_layout(&wall, &limits(), Some(ImageSize::new(1, 1)), 0.0);
    assert_eq!(layout.tiles.len(), 4000 + 2 * EDGE_MARGIN_TILES);
    assert!(layout.tiles.len() <= MAX_TILES);

    let wall = WallDimensions::new(1000.0, 0.2);
    assert!(compute_layout(&wall, &limits(), Some(ImageSize::new(1, 1)), 0.0).is_empty());
}
