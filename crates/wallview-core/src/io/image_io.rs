use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};
use tracing::info;

use crate::error::{Result, WallviewError};
use crate::wall::ImageSize;

/// A decoded wallpaper image.
#[derive(Clone, Debug)]
pub struct WallpaperBitmap {
    pixels: RgbaImage,
    /// File the bitmap was decoded from, if any.
    pub source: Option<PathBuf>,
}

impl WallpaperBitmap {
    /// Wrap already decoded pixels. Empty images are rejected.
    pub fn new(pixels: RgbaImage, source: Option<PathBuf>) -> Result<Self> {
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(WallviewError::InvalidDimensions { width, height });
        }
        Ok(Self { pixels, source })
    }

    /// Pixel data, straight (unpremultiplied) RGBA. Never empty.
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn size(&self) -> ImageSize {
        let (width, height) = self.pixels.dimensions();
        ImageSize::new(width, height)
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.size().aspect_ratio()
    }

    /// Display name: the source file name, or a placeholder.
    pub fn name(&self) -> String {
        self.source
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "(unnamed)".to_string())
    }
}

/// Decode a wallpaper from a file, guessing the format from its contents.
pub fn load_wallpaper(path: &Path) -> Result<WallpaperBitmap> {
    let img = image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?;
    let bitmap = WallpaperBitmap::new(img.to_rgba8(), Some(path.to_path_buf()))?;
    info!(
        path = %path.display(),
        width = bitmap.width(),
        height = bitmap.height(),
        "Wallpaper decoded"
    );
    Ok(bitmap)
}

/// Decode a wallpaper from an in-memory encoded image.
pub fn decode_wallpaper(bytes: &[u8]) -> Result<WallpaperBitmap> {
    let img = image::load_from_memory(bytes)?;
    WallpaperBitmap::new(img.to_rgba8(), None)
}

/// Save a rendered preview, choosing the format from the file extension.
/// Unknown extensions fall back to PNG.
pub fn save_preview(preview: &RgbaImage, path: &Path) -> Result<()> {
    let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Png);
    match format {
        ImageFormat::Jpeg => {
            // JPEG has no alpha channel.
            let rgb = image::DynamicImage::ImageRgba8(preview.clone()).to_rgb8();
            rgb.save_with_format(path, format)?;
        }
        _ => preview.save_with_format(path, format)?,
    }
    info!(path = %path.display(), "Preview saved");
    Ok(())
}

/// File extensions offered in the wallpaper picker.
pub const WALLPAPER_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff",
];
