use crate::app::WallviewApp;

pub fn show(ctx: &egui::Context, app: &mut WallviewApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area — fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for 4 empty lines to prevent layout jump.
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            let wall = app.visualizer.wall();
            ui.label(format!("Wall: {} x {} cm", wall.width, wall.height));
            ui.separator();
            ui.label(format!("Scale: {:.0}%", app.visualizer.scale() * 100.0));
            ui.separator();
            ui.label(format!("Tiles: {}", app.visualizer.layout().tiles.len()));
            ui.separator();
            ui.label(format!("Pan: {:.1}", app.visualizer.pan_offset()));
            if app.ui_state.is_busy() {
                ui.separator();
                ui.spinner();
            }
        });

        ui.add_space(2.0);
    });
}
