use crate::app::WallviewApp;
use crate::panels::section_header;

const LEFT_PANEL_WIDTH: f32 = 240.0;
const FIELD_WIDTH: f32 = 90.0;

pub fn show(ctx: &egui::Context, app: &mut WallviewApp) {
    egui::SidePanel::left("controls")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(LEFT_PANEL_WIDTH - 20.0);

                wall_section(ui, app);
                ui.separator();
                wallpaper_section(ctx, ui, app);
            });
        });
}

fn wall_section(ui: &mut egui::Ui, app: &mut WallviewApp) {
    let status = (!app.panel.wall().is_valid()).then_some("invalid");
    section_header(ui, "Wall", status);
    ui.add_space(4.0);

    egui::Grid::new("wall_grid")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            ui.label("Width (cm):");
            if dimension_field(ui, &mut app.ui_state.width_text) {
                app.panel.set_wall_width_text(&app.ui_state.width_text);
            }
            ui.end_row();

            ui.label("Height (cm):");
            if dimension_field(ui, &mut app.ui_state.height_text) {
                app.panel.set_wall_height_text(&app.ui_state.height_text);
            }
            ui.end_row();
        });
}

/// Single-line numeric text field. Returns `true` on every edit.
fn dimension_field(ui: &mut egui::Ui, text: &mut String) -> bool {
    ui.add(egui::TextEdit::singleline(text).desired_width(FIELD_WIDTH))
        .changed()
}

fn wallpaper_section(ctx: &egui::Context, ui: &mut egui::Ui, app: &mut WallviewApp) {
    let status = app.ui_state.pending_selection.map(|_| "loading...");
    section_header(ui, "Wallpaper", status);
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        if ui.button("Open...").clicked() {
            app.open_wallpaper(ctx);
        }
        if ui
            .add_enabled(app.panel.wallpaper().is_some(), egui::Button::new("Clear"))
            .clicked()
        {
            app.clear_wallpaper();
            app.ui_state.add_log("Wallpaper cleared".into());
        }
    });

    match app.panel.wallpaper() {
        Some(bitmap) => {
            ui.label(bitmap.name());
            ui.small(format!("{}x{} px", bitmap.width(), bitmap.height()));
            ui.small(format!("Aspect {:.3}", bitmap.aspect_ratio()));
        }
        None => {
            ui.small("No wallpaper selected");
        }
    }
}
