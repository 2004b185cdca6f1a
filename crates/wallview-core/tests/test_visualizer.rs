use approx::assert_relative_eq;

use wallview_core::pan::PanState;
use wallview_core::visualizer::Visualizer;
use wallview_core::wall::{ImageSize, StageLimits, WallDimensions};

fn visualizer(w: f64, h: f64) -> Visualizer {
    Visualizer::new(StageLimits::default(), WallDimensions::new(w, h))
}

#[test]
fn test_empty_viewport_without_wallpaper() {
    let vis = visualizer(800.0, 600.0);
    assert!(vis.layout().is_empty());
    assert!(vis.pan_bound().is_none());
    assert_eq!(vis.stage_size(), (800.0, 600.0));
}

#[test]
fn test_publishing_wallpaper_lays_out_tiles() {
    let mut vis = visualizer(800.0, 600.0);
    vis.set_wallpaper(Some(ImageSize::new(200, 100)));
    assert_eq!(vis.layout().tiles.len(), 5);
    assert_relative_eq!(vis.pan_bound().unwrap(), 1200.0);
}

#[test]
fn test_drag_fifty_right_shifts_tiles() {
    // 100x200 on a 600 cm high wall: one tile is 300 wide.
    let mut vis = visualizer(800.0, 600.0);
    vis.set_wallpaper(Some(ImageSize::new(100, 200)));
    assert_relative_eq!(vis.pan_bound().unwrap(), 300.0);
    let rest: Vec<f64> = vis.layout().tiles.iter().map(|t| t.x).collect();

    vis.pointer_down(400.0);
    assert!(vis.pointer_move(450.0));
    assert_relative_eq!(vis.pan_offset(), 50.0);
    for (tile, x0) in vis.layout().tiles.iter().zip(rest) {
        assert_relative_eq!(tile.x - x0, 50.0 * vis.scale());
    }
}

#[test]
fn test_drag_past_bound_is_rejected() {
    let mut vis = visualizer(800.0, 600.0);
    vis.set_wallpaper(Some(ImageSize::new(100, 200)));
    vis.pointer_down(0.0);
    assert!(vis.pointer_move(280.0));
    let before = vis.layout().clone();
    let passes = vis.relayout_count();

    assert!(!vis.pointer_move(330.0));
    assert_relative_eq!(vis.pan_offset(), 280.0);
    assert_eq!(vis.pan_state(), PanState::Dragging { anchor_x: 280.0 });
    assert_eq!(vis.layout(), &before);
    assert_eq!(vis.relayout_count(), passes);
}

#[test]
fn test_pan_uses_current_scale_for_bound() {
    // scale 0.5: tile = 400 * (1500 / 400) * 0.5 = 750
    let mut vis = visualizer(2000.0, 1500.0);
    vis.set_wallpaper(Some(ImageSize::new(400, 400)));
    assert_relative_eq!(vis.pan_bound().unwrap(), 750.0);
    vis.pointer_down(0.0);
    assert!(vis.pointer_move(-750.0));
    assert!(!vis.pointer_move(-751.0));
}

#[test]
fn test_moves_ignored_without_wallpaper() {
    let mut vis = visualizer(800.0, 600.0);
    vis.pointer_down(0.0);
    assert!(!vis.pointer_move(10.0));
    assert_eq!(vis.pan_offset(), 0.0);
}

#[test]
fn test_each_change_relayouts_once() {
    let mut vis = visualizer(800.0, 600.0);
    let start = vis.relayout_count();

    assert!(vis.set_wall(WallDimensions::new(900.0, 600.0)));
    assert_eq!(vis.relayout_count(), start + 1);

    assert!(!vis.set_wall(WallDimensions::new(900.0, 600.0)));
    assert_eq!(vis.relayout_count(), start + 1);

    vis.set_wallpaper(Some(ImageSize::new(10, 10)));
    assert_eq!(vis.relayout_count(), start + 2);

    vis.pointer_down(0.0);
    vis.pointer_move(5.0);
    assert_eq!(vis.relayout_count(), start + 3);
}

#[test]
fn test_nan_wall_is_stable_and_empty() {
    let mut vis = visualizer(800.0, 600.0);
    vis.set_wallpaper(Some(ImageSize::new(10, 10)));
    assert!(vis.set_wall(WallDimensions::new(f64::NAN, 600.0)));
    assert!(!vis.set_wall(WallDimensions::new(f64::NAN, 600.0)));
    assert!(vis.layout().is_empty());
}

#[test]
fn test_new_wallpaper_resets_pan() {
    let mut vis = visualizer(800.0, 600.0);
    vis.set_wallpaper(Some(ImageSize::new(100, 200)));
    vis.pointer_down(0.0);
    vis.pointer_move(100.0);
    assert_relative_eq!(vis.pan_offset(), 100.0);

    vis.set_wallpaper(Some(ImageSize::new(300, 200)));
    assert_eq!(vis.pan_offset(), 0.0);
    assert_eq!(vis.pan_state(), PanState::Idle);
}

#[test]
fn test_clearing_wallpaper_empties_viewport() {
    let mut vis = visualizer(800.0, 600.0);
    vis.set_wallpaper(Some(ImageSize::new(100, 200)));
    vis.set_wallpaper(None);
    assert!(vis.layout().is_empty());
}

#[test]
fn test_shrinking_wall_clamps_pan_to_new_bound() {
    let mut vis = visualizer(800.0, 600.0);
    vis.set_wallpaper(Some(ImageSize::new(100, 200)));
    vis.pointer_down(0.0);
    assert!(vis.pointer_move(280.0));
    let passes = vis.relayout_count();

    // Half the height halves the tile, so the bound drops to 150.
    assert!(vis.set_wall(WallDimensions::new(800.0, 300.0)));
    assert_relative_eq!(vis.pan_bound().unwrap(), 150.0);
    assert_relative_eq!(vis.pan_offset(), 150.0);
    assert_eq!(vis.relayout_count(), passes + 1);

    // Growing the wall again keeps the clamped offset.
    assert!(vis.set_wall(WallDimensions::new(800.0, 600.0)));
    assert_relative_eq!(vis.pan_offset(), 150.0);
}

#[test]
fn test_invalid_wall_leaves_pan_alone() {
    let mut vis = visualizer(800.0, 600.0);
    vis.set_wallpaper(Some(ImageSize::new(100, 200)));
    vis.pointer_down(0.0);
    assert!(vis.pointer_move(-120.0));
    assert!(vis.set_wall(WallDimensions::new(800.0, f64::NAN)));
    assert_relative_eq!(vis.pan_offset(), -120.0);
    assert!(vis.layout().is_empty());
}
