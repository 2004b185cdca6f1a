use wallview_core::pan::PanState;

use crate::app::WallviewApp;

const STAGE_MARGIN: f32 = 12.0;

pub fn show(ctx: &egui::Context, app: &mut WallviewApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        let stage_rect = compute_stage_rect(rect, app.visualizer.stage_size());
        let response = ui.allocate_rect(stage_rect, egui::Sense::drag());

        handle_pointer(ctx, ui, &response, app);

        let painter = ui.painter_at(stage_rect);
        painter.rect_filled(stage_rect, 0.0, egui::Color32::from_gray(45));

        match app.viewport.texture.as_ref().map(|t| t.id()) {
            Some(texture_id) if !app.visualizer.layout().is_empty() => {
                draw_tiles(&painter, texture_id, stage_rect, app);
            }
            Some(_) => show_message(&painter, stage_rect, "Wall dimensions are not valid"),
            None => show_message(&painter, stage_rect, "Open a wallpaper to preview it"),
        }

        ui.painter().rect_stroke(
            stage_rect,
            0.0,
            egui::Stroke::new(1.0, egui::Color32::from_gray(90)),
            egui::epaint::StrokeKind::Outside,
        );
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

/// Stage anchored at the top-left of the panel. Negative or NaN sizes
/// collapse to an empty rect.
fn compute_stage_rect(panel_rect: egui::Rect, (width, height): (f64, f64)) -> egui::Rect {
    let w = if width.is_finite() { width.max(0.0) as f32 } else { 0.0 };
    let h = if height.is_finite() { height.max(0.0) as f32 } else { 0.0 };
    egui::Rect::from_min_size(
        panel_rect.min + egui::vec2(STAGE_MARGIN, STAGE_MARGIN),
        egui::vec2(w, h),
    )
}

/// Translate egui pointer input into the visualizer's pan gesture.
fn handle_pointer(
    ctx: &egui::Context,
    ui: &egui::Ui,
    response: &egui::Response,
    app: &mut WallviewApp,
) {
    let visualizer = &mut app.visualizer;

    if response.drag_started_by(egui::PointerButton::Primary) {
        let press = ui
            .input(|i| i.pointer.press_origin())
            .or_else(|| response.interact_pointer_pos());
        if let Some(pos) = press {
            visualizer.pointer_down(pos.x as f64);
        }
    }

    if visualizer.pan_state() != PanState::Idle {
        if response.drag_stopped() {
            visualizer.pointer_up();
        } else if !ui.rect_contains_pointer(response.rect) {
            visualizer.pointer_leave();
        } else if response.dragged() && response.drag_delta().x != 0.0 {
            if let Some(pos) = ui.input(|i| i.pointer.hover_pos()) {
                visualizer.pointer_move(pos.x as f64);
            }
        }
    }

    if visualizer.pan_state() != PanState::Idle {
        ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
    } else if response.hovered() && visualizer.image().is_some() {
        ctx.set_cursor_icon(egui::CursorIcon::Grab);
    }
}

fn draw_tiles(
    painter: &egui::Painter,
    texture_id: egui::TextureId,
    stage_rect: egui::Rect,
    app: &WallviewApp,
) {
    let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
    for tile in &app.visualizer.layout().tiles {
        let tile_rect = egui::Rect::from_min_size(
            stage_rect.min + egui::vec2(tile.x as f32, tile.y as f32),
            egui::vec2(tile.width as f32, tile.height as f32),
        );
        if tile_rect.intersects(stage_rect) {
            painter.image(texture_id, tile_rect, uv, egui::Color32::WHITE);
        }
    }
}

fn show_message(painter: &egui::Painter, stage_rect: egui::Rect, text: &str) {
    painter.text(
        stage_rect.center(),
        egui::Align2::CENTER_CENTER,
        text,
        egui::FontId::proportional(18.0),
        egui::Color32::from_gray(100),
    );
}
