use tracing::debug;

use crate::core::image::{CowImage, ImageView, copy_window, get_h_w_c};
use crate::error::{Error, Result};
use crate::types::CropMode;

fn ensure_height(remaining_ok: bool) -> Result<()> {
    if remaining_ok {
        Ok(())
    } else {
        Err(Error::geometry(
            "Cropped area would result in an image with no height",
        ))
    }
}

fn ensure_width(remaining_ok: bool) -> Result<()> {
    if remaining_ok {
        Ok(())
    } else {
        Err(Error::geometry(
            "Cropped area would result in an image with no width",
        ))
    }
}

/// Removes a border, per-side margins or everything outside an offset box.
///
/// Zero-sized `Border`/`Edges` requests hand back the input view unchanged.
/// Every other result is an owned copy.
///
/// `Offsets` only checks that the box origin lies inside the image; a box
/// that runs past the right or bottom edge is cut at that edge, so the result
/// may be smaller than `height x width`.
pub fn crop<'a>(image: ImageView<'a>, mode: CropMode) -> Result<CowImage<'a>> {
    let (h, w, _) = get_h_w_c(&image);

    let (top, bottom, left, right) = match mode {
        CropMode::Border(amount) => {
            if amount == 0 {
                return Ok(CowImage::from(image));
            }
            let both = amount.checked_mul(2);
            ensure_height(both.is_some_and(|v| v < h))?;
            ensure_width(both.is_some_and(|v| v < w))?;
            (amount, h - amount, amount, w - amount)
        }
        CropMode::Edges {
            top,
            right,
            bottom,
            left,
        } => {
            if top == 0 && right == 0 && bottom == 0 && left == 0 {
                return Ok(CowImage::from(image));
            }
            ensure_height(top.checked_add(bottom).is_some_and(|v| v < h))?;
            ensure_width(left.checked_add(right).is_some_and(|v| v < w))?;
            (top, h - bottom, left, w - right)
        }
        CropMode::Offsets {
            left,
            top,
            width,
            height,
        } => {
            ensure_height(top < h)?;
            ensure_width(left < w)?;
            (
                top,
                top.saturating_add(height).min(h),
                left,
                left.saturating_add(width).min(w),
            )
        }
    };

    debug!(
        "Crop {} on {}x{}: rows {}..{}, cols {}..{}",
        mode, w, h, top, bottom, left, right
    );
    Ok(CowImage::from(copy_window(&image, top, bottom, left, right)))
}
