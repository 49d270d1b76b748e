use std::path::Path;

use image::{DynamicImage, GrayImage, ImageBuffer, RgbImage, RgbaImage};
use tracing::info;

use crate::core::image::{Image, ImageView, get_h_w_c, to_rgba};
use crate::error::{Error, Result};

fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Converts a decoded image into normalized `f32` samples.
/// Gray stays single-channel, gray+alpha is promoted to RGBA.
pub fn from_dynamic(img: &DynamicImage) -> Result<Image> {
    let (w, h) = (img.width() as usize, img.height() as usize);
    let color = img.color();
    let (data, channels) = match (color.has_color(), color.has_alpha()) {
        (false, false) => {
            let luma = img.to_luma16();
            let data: Vec<f32> = luma.into_raw().into_iter().map(|v| v as f32 / 65535.0).collect();
            (data, 1)
        }
        (true, false) => (img.to_rgb32f().into_raw(), 3),
        (_, true) => (img.to_rgba32f().into_raw(), 4),
    };
    Image::from_shape_vec((h, w, channels), data).map_err(Error::external)
}

/// Quantizes a normalized image to 8 bits per channel.
pub fn to_dynamic(image: &ImageView<'_>) -> Result<DynamicImage> {
    let (h, w, c) = get_h_w_c(image);
    let (w32, h32) = (w as u32, h as u32);
    let dynamic = match c {
        1 => {
            let raw: Vec<u8> = image.iter().map(|&v| to_u8(v)).collect();
            let buf: Option<GrayImage> = ImageBuffer::from_raw(w32, h32, raw);
            buf.map(DynamicImage::ImageLuma8)
        }
        3 => {
            let raw: Vec<u8> = image.iter().map(|&v| to_u8(v)).collect();
            let buf: Option<RgbImage> = ImageBuffer::from_raw(w32, h32, raw);
            buf.map(DynamicImage::ImageRgb8)
        }
        2 | 4 => {
            let rgba = to_rgba(image);
            let raw: Vec<u8> = rgba.iter().map(|&v| to_u8(v)).collect();
            let buf: Option<RgbaImage> = ImageBuffer::from_raw(w32, h32, raw);
            buf.map(DynamicImage::ImageRgba8)
        }
        n => return Err(Error::UnsupportedChannels { channels: n }),
    };
    dynamic.ok_or_else(|| Error::External(format!("buffer does not fit {}x{}x{}", w, h, c)))
}

/// Decodes an image file into a normalized raster.
pub fn load_image(path: &Path) -> Result<Image> {
    let decoded = image::open(path)?;
    let img = from_dynamic(&decoded)?;
    let (h, w, c) = img.dim();
    info!("Loaded {:?}: {}x{}x{}", path, w, h, c);
    Ok(img)
}

/// Encodes a normalized raster; the format follows the file extension.
pub fn save_image(image: &ImageView<'_>, path: &Path) -> Result<()> {
    to_dynamic(image)?.save(path)?;
    let (h, w, c) = get_h_w_c(image);
    info!("Saved {:?}: {}x{}x{}", path, w, h, c);
    Ok(())
}
