//! Border trimming: infer the border color, mark every pixel that differs from
//! it by more than a tolerance, and cut the image down to the marked content.
use ndarray::{Array1, Array2, ArrayView2, Axis, s};
use tracing::{debug, info};

use crate::core::geometry::{Padding, Region};
use crate::core::image::{Image, ImageView, get_h_w_c};
use crate::core::processing::section::find_inner_section;
use crate::error::Result;
use crate::types::SelectMode;

fn median(values: &mut [f32]) -> f32 {
    values.sort_by(|a, b| a.total_cmp(b));
    let n = values.len();
    if n == 0 {
        return 0.0;
    }
    if n % 2 == 1 {
        values[n / 2]
    } else {
        (values[n / 2 - 1] + values[n / 2]) / 2.0
    }
}

/// Per-channel median of the outermost 1px ring (top row, bottom row, left
/// column, right column; corners are counted once per strip they belong to).
pub fn get_border_color(image: &ImageView<'_>) -> Array1<f32> {
    let (h, w, c) = get_h_w_c(image);
    let mut color = Array1::zeros(c);
    if h == 0 || w == 0 {
        return color;
    }

    let mut samples = Vec::with_capacity(2 * (h + w));
    for ch in 0..c {
        samples.clear();
        samples.extend(image.slice(s![0, .., ch]).iter().copied());
        samples.extend(image.slice(s![h - 1, .., ch]).iter().copied());
        samples.extend(image.slice(s![.., 0, ch]).iter().copied());
        samples.extend(image.slice(s![.., w - 1, ch]).iter().copied());
        color[ch] = median(&mut samples);
    }
    color
}

/// Marks pixels whose mean absolute channel difference from `border_color`
/// exceeds `tolerance`.
pub fn content_mask(image: &ImageView<'_>, border_color: &Array1<f32>, tolerance: f32) -> Array2<bool> {
    let c = image.dim().2;
    image.map_axis(Axis(2), |pixel| {
        let diff: f32 = pixel
            .iter()
            .zip(border_color.iter())
            .map(|(v, b)| (v - b).abs())
            .sum::<f32>()
            / c.max(1) as f32;
        diff > tolerance
    })
}

fn any_per_column(mask: &ArrayView2<'_, bool>) -> Array1<bool> {
    mask.map_axis(Axis(0), |col| col.iter().any(|&v| v))
}

fn any_per_row(mask: &ArrayView2<'_, bool>) -> Array1<bool> {
    mask.map_axis(Axis(1), |row| row.iter().any(|&v| v))
}

/// Tight content region of a `(height, width)` content mask.
///
/// Columns are narrowed first, then rows within those columns. Unless every
/// section is kept, a final column pass with `AllSections` over the chosen
/// rows trims border columns the first pass could not see.
pub fn get_crop_region(is_content: ArrayView2<'_, bool>, select: SelectMode) -> Region {
    let section_w = find_inner_section(any_per_column(&is_content).view(), select);
    let is_content = is_content.slice_move(s![.., section_w.start..section_w.end]);

    let section_h = find_inner_section(any_per_row(&is_content).view(), select);
    let is_content = is_content.slice_move(s![section_h.start..section_h.end, ..]);

    let crop = Region::new(
        section_w.start as isize,
        section_h.start as isize,
        section_w.length() as isize,
        section_h.length() as isize,
    );

    if select == SelectMode::AllSections {
        return crop;
    }

    let inner_w = find_inner_section(any_per_column(&is_content).view(), SelectMode::AllSections);
    Region::new(
        crop.x + inner_w.start as isize,
        crop.y,
        inner_w.length() as isize,
        crop.height,
    )
}

/// Crops away the uniform border around the image content.
///
/// `tolerance` is a percentage of the normalized value range; `padding`
/// pixels of the original image are kept around the detected content. An image
/// without any detected content is returned whole.
pub fn crop_border(
    image: &ImageView<'_>,
    tolerance: f32,
    select: SelectMode,
    padding: usize,
) -> Result<Image> {
    let (h, w, _) = get_h_w_c(image);
    if h == 0 || w == 0 {
        return Ok(image.to_owned());
    }
    let tolerance = tolerance / 100.0;

    let border_color = get_border_color(image);
    debug!("Border color: {:?}", border_color.as_slice());

    let is_content = content_mask(image, &border_color, tolerance);
    let region = get_crop_region(is_content.view(), select)
        .add_padding(Padding::all(padding))
        .intersect(Region::of_image(image));

    info!(
        "Border crop ({}, tolerance {:.3}, padding {}): {}x{} -> {:?}",
        select, tolerance, padding, w, h, region
    );
    region.read_from(image)
}
