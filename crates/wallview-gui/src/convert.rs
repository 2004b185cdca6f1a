use wallview_core::io::image_io::WallpaperBitmap;

/// Convert a decoded wallpaper to an egui ColorImage.
pub fn bitmap_to_color_image(bitmap: &WallpaperBitmap) -> egui::ColorImage {
    let size = [bitmap.width() as usize, bitmap.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, bitmap.pixels().as_raw())
}
