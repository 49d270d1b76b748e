use ndarray::{Array2, Axis, s};
use tracing::{debug, info};

use crate::core::image::{CowImage, ImageView, copy_window, get_h_w_c};
use crate::core::processing::section::outer_bounds;
use crate::error::{Error, Result};

/// Largest usable threshold. A threshold of exactly 1.0 can never be exceeded
/// by a normalized sample, which would make every image empty.
pub const MAX_THRESHOLD: f32 = 0.99999;

/// Converts a percentage threshold to a normalized one, capped below 1.0.
pub fn normalize_threshold(threshold_percent: f32) -> f32 {
    (threshold_percent / 100.0).min(MAX_THRESHOLD)
}

/// Trims fully transparent margins, keeping every row and column that has at
/// least one alpha value above `threshold_percent`.
///
/// Images without an alpha channel are returned unchanged.
pub fn crop_to_alpha_content<'a>(image: ImageView<'a>, threshold_percent: f32) -> Result<CowImage<'a>> {
    let (h, w, c) = get_h_w_c(&image);
    if c < 4 {
        debug!("Alpha crop skipped: image has {} channels", c);
        return Ok(CowImage::from(image));
    }

    let threshold = normalize_threshold(threshold_percent);
    let is_content: Array2<bool> = image.slice(s![.., .., 3]).map(|&a| a > threshold);
    let rows = is_content.map_axis(Axis(1), |row| row.iter().any(|&v| v));
    let cols = is_content.map_axis(Axis(0), |col| col.iter().any(|&v| v));

    let (rows, cols) = match (outer_bounds(rows.view()), outer_bounds(cols.view())) {
        (Some(rows), Some(cols)) => (rows, cols),
        _ => return Err(Error::empty("Crop results in empty image.")),
    };

    info!(
        "Alpha crop (threshold {:.5}): {}x{} -> rows {}..{}, cols {}..{}",
        threshold, w, h, rows.start, rows.end, cols.start, cols.end
    );
    Ok(CowImage::from(copy_window(
        &image, rows.start, rows.end, cols.start, cols.end,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::image::Image;

    #[test]
    fn rgb_is_returned_unchanged() {
        let img = Image::zeros((4, 4, 3));
        let out = crop_to_alpha_content(img.view(), 50.0).unwrap();
        assert!(out.is_view());
        assert_eq!(out.as_ptr(), img.as_ptr());
    }

    #[test]
    fn transparent_margins_are_trimmed() {
        let mut img = Image::zeros((6, 8, 4));
        img[[1, 2, 3]] = 1.0;
        img[[3, 5, 3]] = 0.6;
        let out = crop_to_alpha_content(img.view(), 50.0).unwrap();
        assert!(out.is_owned());
        assert_eq!(out.dim(), (3, 4, 4));
        assert_eq!(out[[0, 0, 3]], 1.0);
        assert_eq!(out[[2, 3, 3]], 0.6);
    }

    #[test]
    fn threshold_is_strict() {
        let img = Image::from_elem((3, 3, 4), 0.5);
        let err = crop_to_alpha_content(img.view(), 50.0);
        assert!(matches!(err, Err(Error::EmptyResult { .. })));
    }

    #[test]
    fn full_threshold_still_keeps_opaque_pixels() {
        let mut img = Image::zeros((3, 3, 4));
        img[[1, 1, 3]] = 1.0;
        let out = crop_to_alpha_content(img.view(), 100.0).unwrap();
        assert_eq!(out.dim(), (1, 1, 4));
    }
}
