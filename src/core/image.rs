//! In-memory raster representation shared by every processing step.
//!
//! An image is a row-major `(height, width, channels)` array of normalized
//! `f32` samples. Grayscale images carry a trailing channel axis of length 1.
use ndarray::{Array3, ArrayView3, CowArray, Ix3, s};

/// Owned raster, `(height, width, channels)`.
pub type Image = Array3<f32>;

/// Borrowed raster, `(height, width, channels)`.
pub type ImageView<'a> = ArrayView3<'a, f32>;

/// Either the caller's own buffer (identity shortcuts) or a freshly owned one.
pub type CowImage<'a> = CowArray<'a, f32, Ix3>;

/// Returns `(height, width, channels)`.
pub fn get_h_w_c(image: &ImageView<'_>) -> (usize, usize, usize) {
    image.dim()
}

/// Returns `(width, height, channels)`.
pub fn get_dimensions(image: &ImageView<'_>) -> (usize, usize, usize) {
    let (h, w, c) = get_h_w_c(image);
    (w, h, c)
}

/// Copy of `image` with an alpha channel. Gray is replicated into RGB and the
/// added alpha is opaque; 4-channel input is copied as is.
pub fn to_rgba(image: &ImageView<'_>) -> Image {
    let (h, w, c) = get_h_w_c(image);
    match c {
        4 => image.to_owned(),
        1 => Array3::from_shape_fn((h, w, 4), |(y, x, ch)| {
            if ch == 3 { 1.0 } else { image[[y, x, 0]] }
        }),
        2 => Array3::from_shape_fn((h, w, 4), |(y, x, ch)| {
            if ch == 3 {
                image[[y, x, 1]]
            } else {
                image[[y, x, 0]]
            }
        }),
        _ => Array3::from_shape_fn((h, w, 4), |(y, x, ch)| {
            if ch == 3 { 1.0 } else { image[[y, x, ch]] }
        }),
    }
}

/// Owned copy of rows `top..bottom` and columns `left..right`.
pub(crate) fn copy_window(
    image: &ImageView<'_>,
    top: usize,
    bottom: usize,
    left: usize,
    right: usize,
) -> Image {
    image.slice(s![top..bottom, left..right, ..]).to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_are_reported_width_first() {
        let img = Image::zeros((3, 5, 4));
        assert_eq!(get_h_w_c(&img.view()), (3, 5, 4));
        assert_eq!(get_dimensions(&img.view()), (5, 3, 4));
    }

    #[test]
    fn gray_promotes_to_opaque_rgba() {
        let img = Image::from_elem((2, 2, 1), 0.25);
        let rgba = to_rgba(&img.view());
        assert_eq!(rgba.dim(), (2, 2, 4));
        assert_eq!(rgba[[1, 1, 0]], 0.25);
        assert_eq!(rgba[[1, 1, 2]], 0.25);
        assert_eq!(rgba[[1, 1, 3]], 1.0);
    }
}
