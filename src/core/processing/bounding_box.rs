use ndarray::Axis;
use tracing::debug;

use crate::core::image::{ImageView, get_h_w_c};
use crate::core::processing::crop_alpha::normalize_threshold;
use crate::core::processing::section::outer_bounds;
use crate::error::{Error, Result};

/// Box `(x, y, width, height)` around every pixel with at least one channel
/// above `threshold_percent`. The threshold is capped just below 100%.
pub fn get_bounding_box(
    image: &ImageView<'_>,
    threshold_percent: f32,
) -> Result<(usize, usize, usize, usize)> {
    let (h, w, _) = get_h_w_c(image);
    let threshold = normalize_threshold(threshold_percent);

    let is_content = image.map_axis(Axis(2), |pixel| pixel.iter().any(|&v| v > threshold));
    let rows = is_content.map_axis(Axis(1), |row| row.iter().any(|&v| v));
    let cols = is_content.map_axis(Axis(0), |col| col.iter().any(|&v| v));

    match (outer_bounds(rows.view()), outer_bounds(cols.view())) {
        (Some(rows), Some(cols)) => {
            let bbox = (cols.start, rows.start, cols.length(), rows.length());
            debug!("Bounding box of {}x{} at {:.5}: {:?}", w, h, threshold, bbox);
            Ok(bbox)
        }
        _ => Err(Error::empty("Resulting bounding box is empty.")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::image::Image;

    #[test]
    fn box_covers_bright_pixels() {
        let mut img = Image::zeros((10, 12, 3));
        img[[2, 3, 0]] = 0.9;
        img[[6, 8, 2]] = 0.7;
        assert_eq!(get_bounding_box(&img.view(), 50.0).unwrap(), (3, 2, 6, 5));
    }

    #[test]
    fn single_pixel_box() {
        let mut img = Image::zeros((4, 4, 1));
        img[[3, 0, 0]] = 1.0;
        assert_eq!(get_bounding_box(&img.view(), 0.0).unwrap(), (0, 3, 1, 1));
    }

    #[test]
    fn nothing_above_threshold_is_empty() {
        let img = Image::from_elem((4, 4, 3), 0.2);
        assert!(matches!(
            get_bounding_box(&img.view(), 20.0),
            Err(Error::EmptyResult { .. })
        ));
    }
}
