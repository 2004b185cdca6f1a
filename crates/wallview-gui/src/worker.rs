use std::path::Path;
use std::sync::mpsc;
use std::time::Instant;

use wallview_core::io::image_io::{load_wallpaper, save_preview, WallpaperBitmap};
use wallview_core::layout::TileLayout;
use wallview_core::panel::DecodeTicket;
use wallview_core::render::render_preview;

use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("wallview-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_log(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Log { message: msg.into() });
}

fn send_error(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Error { message: msg.into() });
}

/// Commands run strictly in arrival order, so decodes also finish in the
/// order they were requested.
fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::DecodeWallpaper { path, ticket } => {
                handle_decode(&path, ticket, &tx, &ctx);
            }
            WorkerCommand::ExportPreview {
                path,
                bitmap,
                layout,
                stage,
            } => {
                handle_export(&path, &bitmap, &layout, stage, &tx, &ctx);
            }
        }
    }
}

fn handle_decode(
    path: &Path,
    ticket: DecodeTicket,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let start = Instant::now();
    match load_wallpaper(path) {
        Ok(bitmap) => {
            send_log(
                tx,
                ctx,
                format!(
                    "Decoded {} ({}x{}) in {}ms",
                    bitmap.name(),
                    bitmap.width(),
                    bitmap.height(),
                    start.elapsed().as_millis()
                ),
            );
            send(tx, ctx, WorkerResult::WallpaperDecoded { ticket, bitmap });
        }
        Err(e) => send(
            tx,
            ctx,
            WorkerResult::DecodeFailed {
                ticket,
                message: format!("Failed to open {}: {e}", path.display()),
            },
        ),
    }
}

fn handle_export(
    path: &Path,
    bitmap: &WallpaperBitmap,
    layout: &TileLayout,
    stage: (f64, f64),
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let result = render_preview(bitmap, layout, stage).and_then(|img| save_preview(&img, path));
    match result {
        Ok(()) => send(
            tx,
            ctx,
            WorkerResult::PreviewExported {
                path: path.to_path_buf(),
            },
        ),
        Err(e) => send_error(tx, ctx, format!("Export failed: {e}")),
    }
}
