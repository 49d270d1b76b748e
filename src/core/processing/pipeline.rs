use tracing::{debug, info};

use crate::core::image::{Image, ImageView, get_h_w_c};
use crate::core::params::{Operation, ProcessingParams};
use crate::core::processing::crop::crop;
use crate::core::processing::crop_alpha::crop_to_alpha_content;
use crate::core::processing::crop_border::crop_border;
use crate::core::processing::padding::pad;
use crate::core::processing::resize::{FastResampler, Resample, resize_to_side_with, resize_with};
use crate::error::Result;

/// Applies a single operation, always returning an owned image.
pub fn apply_operation<R: Resample>(
    resampler: &mut R,
    image: &ImageView<'_>,
    operation: &Operation,
) -> Result<Image> {
    match *operation {
        Operation::Pad {
            border_type,
            color,
            mode,
        } => Ok(pad(image, border_type, color, mode)),
        Operation::Crop { mode } => Ok(crop(image.view(), mode)?.into_owned()),
        Operation::CropBorder {
            tolerance,
            select,
            padding,
        } => crop_border(image, tolerance, select, padding),
        Operation::CropToAlphaContent { threshold } => {
            Ok(crop_to_alpha_content(image.view(), threshold)?.into_owned())
        }
        Operation::Resize {
            mode,
            filter,
            separate_alpha,
        } => resize_with(resampler, image, mode, filter, separate_alpha),
        Operation::ResizeToSide {
            target,
            side,
            condition,
            filter,
        } => resize_to_side_with(resampler, image, target, side, condition, filter),
    }
}

/// Runs every configured operation in order with the given resampler.
pub fn process_image_with<R: Resample>(
    resampler: &mut R,
    image: &ImageView<'_>,
    params: &ProcessingParams,
) -> Result<Image> {
    let (h, w, c) = get_h_w_c(image);
    info!(
        "Processing {}x{}x{} image through {} operations",
        w,
        h,
        c,
        params.operations.len()
    );

    let mut current = image.to_owned();
    for (i, operation) in params.operations.iter().enumerate() {
        current = apply_operation(resampler, &current.view(), operation)?;
        let (h, w, c) = current.dim();
        debug!("Step {} {} -> {}x{}x{}", i + 1, operation, w, h, c);
    }
    Ok(current)
}

/// Runs every configured operation in order.
pub fn process_image(image: &ImageView<'_>, params: &ProcessingParams) -> Result<Image> {
    process_image_with(&mut FastResampler::new(), image, params)
}
