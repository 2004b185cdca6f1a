#![allow(dead_code)]

use image::{Rgba, RgbaImage};

use wallview_core::io::image_io::WallpaperBitmap;

pub const RED: [u8; 4] = [255, 0, 0, 255];
pub const BLUE: [u8; 4] = [0, 0, 255, 255];

/// Solid-colour bitmap of the given size.
pub fn solid_bitmap(width: u32, height: u32, rgba: [u8; 4]) -> WallpaperBitmap {
    let pixels = RgbaImage::from_pixel(width, height, Rgba(rgba));
    WallpaperBitmap::new(pixels, None).unwrap()
}

/// Bitmap whose left half is red and right half is blue.
pub fn split_bitmap(width: u32, height: u32) -> WallpaperBitmap {
    let pixels = RgbaImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgba(RED)
        } else {
            Rgba(BLUE)
        }
    });
    WallpaperBitmap::new(pixels, None).unwrap()
}
