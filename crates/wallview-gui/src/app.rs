use std::sync::mpsc;

use wallview_core::io::image_io::WALLPAPER_EXTENSIONS;
use wallview_core::panel::ConfigPanel;
use wallview_core::visualizer::Visualizer;
use wallview_core::wall::StageLimits;

use crate::convert::bitmap_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{UIState, ViewportState};
use crate::worker;

pub struct WallviewApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub panel: ConfigPanel,
    pub visualizer: Visualizer,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub show_about: bool,
}

impl WallviewApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx.clone(), ctx.clone());
        let panel = ConfigPanel::default();
        let visualizer = Visualizer::new(StageLimits::default(), panel.wall());

        Self {
            cmd_tx,
            result_tx,
            result_rx,
            panel,
            visualizer,
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
            show_about: false,
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::WallpaperDecoded { ticket, bitmap } => {
                    self.ui_state.finish_selection(ticket);
                    if self.panel.complete_selection(ticket, bitmap) {
                        self.publish_wallpaper(ctx);
                    }
                }
                WorkerResult::SelectionCancelled { ticket } => {
                    if self.panel.is_current(ticket) {
                        self.ui_state.finish_selection(ticket);
                        self.clear_wallpaper();
                    }
                }
                WorkerResult::DecodeFailed { ticket, message } => {
                    self.ui_state.finish_selection(ticket);
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::PreviewExported { path } => {
                    self.ui_state.exporting = false;
                    self.ui_state.add_log(format!("Saved: {}", path.display()));
                }
                WorkerResult::ExportCancelled => {
                    self.ui_state.exporting = false;
                }
                WorkerResult::Error { message } => {
                    self.ui_state.exporting = false;
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    /// Hand the panel's current wallpaper to the texture cache and visualizer.
    fn publish_wallpaper(&mut self, ctx: &egui::Context) {
        let Some(bitmap) = self.panel.wallpaper() else {
            self.clear_wallpaper();
            return;
        };
        let texture = ctx.load_texture(
            "wallpaper",
            bitmap_to_color_image(bitmap),
            egui::TextureOptions::LINEAR,
        );
        self.viewport.texture = Some(texture);
        self.visualizer.set_wallpaper(Some(bitmap.size()));
        self.ui_state.add_log(format!(
            "Wallpaper: {} ({}x{})",
            bitmap.name(),
            bitmap.width(),
            bitmap.height()
        ));
    }

    pub fn clear_wallpaper(&mut self) {
        self.panel.clear_wallpaper();
        self.viewport.clear();
        self.visualizer.set_wallpaper(None);
    }

    /// Show the file picker on a helper thread and queue the decode.
    pub fn open_wallpaper(&mut self, ctx: &egui::Context) {
        let ticket = self.panel.select_wallpaper_file();
        self.ui_state.pending_selection = Some(ticket);

        let cmd_tx = self.cmd_tx.clone();
        let result_tx = self.result_tx.clone();
        let ctx = ctx.clone();
        std::thread::spawn(move || {
            match rfd::FileDialog::new()
                .add_filter("Images", WALLPAPER_EXTENSIONS)
                .pick_file()
            {
                Some(path) => {
                    let _ = cmd_tx.send(WorkerCommand::DecodeWallpaper { path, ticket });
                }
                None => {
                    let _ = result_tx.send(WorkerResult::SelectionCancelled { ticket });
                    ctx.request_repaint();
                }
            }
        });
    }

    /// Ask for a target file and export the current layout as an image.
    pub fn export_preview(&mut self) {
        let Some(bitmap) = self.panel.wallpaper().cloned() else {
            self.ui_state.add_log("Nothing to export: no wallpaper selected".into());
            return;
        };
        let layout = self.visualizer.layout().clone();
        let stage = self.visualizer.stage_size();
        self.ui_state.exporting = true;

        let cmd_tx = self.cmd_tx.clone();
        let result_tx = self.result_tx.clone();
        std::thread::spawn(move || {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("PNG", &["png"])
                .add_filter("JPEG", &["jpg", "jpeg"])
                .set_file_name("wall_preview.png")
                .save_file()
            {
                let _ = cmd_tx.send(WorkerCommand::ExportPreview {
                    path,
                    bitmap,
                    layout,
                    stage,
                });
            } else {
                let _ = result_tx.send(WorkerResult::ExportCancelled);
            }
        });
    }
}

impl eframe::App for WallviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);

        // Wall edits reach the visualizer on the same frame they were typed.
        self.visualizer.set_wall(self.panel.wall());

        panels::viewport::show(ctx, self);

        if self.show_about {
            egui::Window::new("About Wallview")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Wallview");
                        ui.label("Wallpaper Tiling Preview");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
