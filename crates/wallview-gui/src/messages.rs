use std::path::PathBuf;
use std::sync::Arc;

use wallview_core::io::image_io::WallpaperBitmap;
use wallview_core::layout::TileLayout;
use wallview_core::panel::DecodeTicket;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Decode a wallpaper file chosen in the picker.
    DecodeWallpaper { path: PathBuf, ticket: DecodeTicket },

    /// Composite the current layout and write it to disk.
    ExportPreview {
        path: PathBuf,
        bitmap: Arc<WallpaperBitmap>,
        layout: TileLayout,
        stage: (f64, f64),
    },
}

/// Results sent from worker (or dialog) threads back to UI thread.
pub enum WorkerResult {
    WallpaperDecoded {
        ticket: DecodeTicket,
        bitmap: WallpaperBitmap,
    },
    /// The picker was closed without choosing a file.
    SelectionCancelled {
        ticket: DecodeTicket,
    },
    /// Decoding the file chosen for `ticket` failed.
    DecodeFailed {
        ticket: DecodeTicket,
        message: String,
    },
    PreviewExported {
        path: PathBuf,
    },
    ExportCancelled,
    Error {
        message: String,
    },
    Log {
        message: String,
    },
}
