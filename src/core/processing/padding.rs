use ndarray::Array3;
use tracing::{debug, info};

use crate::core::geometry::Padding;
use crate::core::image::{Image, ImageView, copy_window, get_h_w_c, to_rgba};
use crate::types::{BorderMode, BorderType, Color};

/// How an out-of-range source index is folded back into `0..len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IndexMapping {
    /// No folding: out-of-range pixels take the fill color.
    Constant,
    Clamp,
    /// Mirror without repeating the edge pixel (`dcb|abcd|cba`).
    Reflect101,
    Wrap,
}

impl From<BorderType> for IndexMapping {
    fn from(border_type: BorderType) -> Self {
        match border_type {
            BorderType::ReflectMirror => IndexMapping::Reflect101,
            BorderType::Wrap => IndexMapping::Wrap,
            BorderType::Replicate => IndexMapping::Clamp,
            BorderType::Black
            | BorderType::White
            | BorderType::Transparent
            | BorderType::CustomColor => IndexMapping::Constant,
        }
    }
}

fn map_index(i: isize, len: usize, mapping: IndexMapping) -> Option<usize> {
    if len == 0 {
        return None;
    }
    if i >= 0 && (i as usize) < len {
        return Some(i as usize);
    }
    match mapping {
        IndexMapping::Constant => None,
        IndexMapping::Clamp => Some(if i < 0 { 0 } else { len - 1 }),
        IndexMapping::Reflect101 => {
            if len == 1 {
                return Some(0);
            }
            let period = (2 * len - 2) as isize;
            let r = i.rem_euclid(period) as usize;
            Some(if r < len { r } else { period as usize - r })
        }
        IndexMapping::Wrap => Some(i.rem_euclid(len as isize) as usize),
    }
}

fn fill_values(border_type: BorderType, color: Color, channels: usize) -> Vec<f32> {
    match border_type {
        BorderType::Black => Color::BLACK.for_channels(channels),
        BorderType::White => Color::WHITE.for_channels(channels),
        BorderType::Transparent => Color::TRANSPARENT.for_channels(channels),
        BorderType::CustomColor => color.for_channels(channels),
        // Unused: folding modes always find a source pixel.
        BorderType::ReflectMirror | BorderType::Wrap | BorderType::Replicate => {
            vec![0.0; channels]
        }
    }
}

/// Surrounds `image` with `padding`, producing border pixels per `border_type`.
/// `color` is only consulted for `BorderType::CustomColor`.
///
/// `BorderType::Transparent` promotes the result to four channels.
pub fn create_border(
    image: &ImageView<'_>,
    border_type: BorderType,
    color: Color,
    padding: Padding,
) -> Image {
    let promoted;
    let src = if border_type == BorderType::Transparent && image.dim().2 != 4 {
        promoted = to_rgba(image);
        promoted.view()
    } else {
        image.view()
    };

    let (h, w, c) = get_h_w_c(&src);
    let mapping = IndexMapping::from(border_type);
    let fill = fill_values(border_type, color, c);
    let out_h = h + padding.vertical();
    let out_w = w + padding.horizontal();

    debug!(
        "Creating {} border {:?} around {}x{}x{} -> {}x{}",
        border_type, padding, w, h, c, out_w, out_h
    );

    Array3::from_shape_fn((out_h, out_w, c), |(y, x, ch)| {
        let sy = map_index(y as isize - padding.top as isize, h, mapping);
        let sx = map_index(x as isize - padding.left as isize, w, mapping);
        match (sy, sx) {
            (Some(sy), Some(sx)) => src[[sy, sx, ch]],
            _ => fill[ch],
        }
    })
}

/// Pads an image using one of the three border sizing modes.
///
/// In `Offsets` mode the image is placed at `(left, top)` on a
/// `width x height` canvas. When the canvas is smaller than the placed
/// image the result is truncated to exactly `height x width`.
pub fn pad(
    image: &ImageView<'_>,
    border_type: BorderType,
    color: Color,
    mode: BorderMode,
) -> Image {
    match mode {
        BorderMode::Border(amount) => create_border(image, border_type, color, Padding::all(amount)),
        BorderMode::Edges {
            top,
            right,
            bottom,
            left,
        } => create_border(
            image,
            border_type,
            color,
            Padding::new(top, right, bottom, left),
        ),
        BorderMode::Offsets {
            left,
            top,
            width,
            height,
        } => {
            let (h, w, _) = get_h_w_c(image);
            let r = width as isize - left as isize - w as isize;
            let b = height as isize - top as isize - h as isize;
            let padded = create_border(
                image,
                border_type,
                color,
                Padding::new(top, r.max(0) as usize, b.max(0) as usize, left),
            );
            if r < 0 || b < 0 {
                info!(
                    "Offsets canvas {}x{} is smaller than the placed image, truncating",
                    width, height
                );
                copy_window(&padded.view(), 0, height, 0, width)
            } else {
                padded
            }
        }
    }
}
