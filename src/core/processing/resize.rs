use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images};
use tracing::{info, warn};

use crate::core::image::{Image, ImageView, get_h_w_c};
use crate::error::{Error, Result};
use crate::types::{ResizeCondition, ResizeFilter, ResizeMode, SideSelection};

/// Rounds to the nearest integer with `.5` going up. Negative input clamps to 0.
pub fn round_half_up(value: f64) -> usize {
    (value + 0.5).floor().max(0.0) as usize
}

/// Target `(width, height)` for a percentage scale, at least 1x1.
pub fn percent_dimensions(width: usize, height: usize, scale_percent: f64) -> (usize, usize) {
    let factor = scale_percent / 100.0;
    (
        round_half_up(width as f64 * factor).max(1),
        round_half_up(height as f64 * factor).max(1),
    )
}

/// True when `condition` forbids resizing reference side `b` to `target`.
fn condition_skips(condition: ResizeCondition, target: usize, b: usize) -> bool {
    match condition {
        ResizeCondition::Both => false,
        ResizeCondition::Downscale => target > b,
        ResizeCondition::Upscale => target < b,
    }
}

/// Target `(width, height)` that brings the selected side to `target` while
/// keeping the aspect ratio. Returns the input size when `condition` rules
/// the resize out.
pub fn resize_to_side_dimensions(
    width: usize,
    height: usize,
    target: usize,
    side: SideSelection,
    condition: ResizeCondition,
) -> (usize, usize) {
    let b = match side {
        SideSelection::Width => width,
        SideSelection::Height => height,
        SideSelection::ShorterSide => width.min(height),
        SideSelection::LongerSide => width.max(height),
    };

    if condition_skips(condition, target, b) {
        info!(
            "Keeping {}x{}: {} target {} conflicts with {} side {}",
            width, height, condition, target, side, b
        );
        return (width, height);
    }
    if b == 0 {
        warn!("Cannot scale a zero-sized {} side, keeping {}x{}", side, width, height);
        return (width, height);
    }

    let scale = target as f64 / b as f64;
    let scaled = |v: usize| round_half_up(scale * v as f64).max(1);
    match side {
        SideSelection::Width => (target, scaled(height)),
        SideSelection::Height => (scaled(width), target),
        SideSelection::ShorterSide | SideSelection::LongerSide => (scaled(width), scaled(height)),
    }
}

/// Pixel resampling primitive. Implementations own the interpolation kernel;
/// the geometry code only decides the target size.
pub trait Resample {
    fn resample(
        &mut self,
        image: &ImageView<'_>,
        size: (usize, usize),
        filter: ResizeFilter,
        separate_alpha: bool,
    ) -> Result<Image>;
}

/// `fast_image_resize`-backed resampler for 1, 2, 3 and 4 channel `f32` images.
pub struct FastResampler {
    resizer: Resizer,
}

impl FastResampler {
    pub fn new() -> Self {
        Self {
            resizer: Resizer::new(),
        }
    }
}

impl Default for FastResampler {
    fn default() -> Self {
        Self::new()
    }
}

fn pixel_type(channels: usize) -> Result<PixelType> {
    match channels {
        1 => Ok(PixelType::F32),
        2 => Ok(PixelType::F32x2),
        3 => Ok(PixelType::F32x3),
        4 => Ok(PixelType::F32x4),
        n => Err(Error::UnsupportedChannels { channels: n }),
    }
}

fn resize_alg(filter: ResizeFilter) -> ResizeAlg {
    match filter {
        ResizeFilter::Nearest => ResizeAlg::Nearest,
        ResizeFilter::Box => ResizeAlg::Convolution(FilterType::Box),
        ResizeFilter::Linear => ResizeAlg::Convolution(FilterType::Bilinear),
        ResizeFilter::Hamming => ResizeAlg::Convolution(FilterType::Hamming),
        ResizeFilter::CatmullRom => ResizeAlg::Convolution(FilterType::CatmullRom),
        ResizeFilter::Mitchell => ResizeAlg::Convolution(FilterType::Mitchell),
        ResizeFilter::Lanczos => ResizeAlg::Convolution(FilterType::Lanczos3),
    }
}

impl Resample for FastResampler {
    fn resample(
        &mut self,
        image: &ImageView<'_>,
        size: (usize, usize),
        filter: ResizeFilter,
        separate_alpha: bool,
    ) -> Result<Image> {
        let (h, w, c) = get_h_w_c(image);
        let (target_w, target_h) = size;
        if w == 0 || h == 0 || target_w == 0 || target_h == 0 {
            return Err(Error::InvalidArgument {
                arg: "size",
                value: format!("{}x{} -> {}x{}", w, h, target_w, target_h),
            });
        }
        let pixel_type = pixel_type(c)?;

        // Convert f32 samples into little-endian bytes for fast_image_resize
        let mut src_bytes = Vec::with_capacity(image.len() * 4);
        for v in image.iter() {
            src_bytes.extend_from_slice(&v.to_le_bytes());
        }

        let src_image = images::Image::from_vec_u8(w as u32, h as u32, src_bytes, pixel_type)
            .map_err(|e| Error::Resample(e.to_string()))?;
        let mut dst_image = images::Image::new(target_w as u32, target_h as u32, pixel_type);
        let options = ResizeOptions::new()
            .resize_alg(resize_alg(filter))
            .use_alpha(!separate_alpha);
        self.resizer
            .resize(&src_image, &mut dst_image, &options)
            .map_err(|e| Error::Resample(e.to_string()))?;

        let dst_bytes = dst_image.into_vec();
        let mut out = Vec::with_capacity(dst_bytes.len() / 4);
        for chunk in dst_bytes.chunks_exact(4) {
            out.push(f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
        }
        Image::from_shape_vec((target_h, target_w, c), out).map_err(Error::external)
    }
}

/// Resizes by percentage or to absolute dimensions with `resampler`.
pub fn resize_with<R: Resample>(
    resampler: &mut R,
    image: &ImageView<'_>,
    mode: ResizeMode,
    filter: ResizeFilter,
    separate_alpha: bool,
) -> Result<Image> {
    let (h, w, _) = get_h_w_c(image);
    let (new_w, new_h) = match mode {
        ResizeMode::Percentage(scale) => percent_dimensions(w, h, scale),
        ResizeMode::Absolute { width, height } => (width, height),
    };
    info!("Resize ({}): {}x{} -> {}x{}", filter, w, h, new_w, new_h);
    resampler.resample(image, (new_w, new_h), filter, separate_alpha)
}

/// Resizes by percentage or to absolute dimensions.
pub fn resize(
    image: &ImageView<'_>,
    mode: ResizeMode,
    filter: ResizeFilter,
    separate_alpha: bool,
) -> Result<Image> {
    resize_with(&mut FastResampler::new(), image, mode, filter, separate_alpha)
}

/// Resizes so the selected side matches `target`, subject to `condition`.
/// When the size does not change the input is copied without resampling.
pub fn resize_to_side_with<R: Resample>(
    resampler: &mut R,
    image: &ImageView<'_>,
    target: usize,
    side: SideSelection,
    condition: ResizeCondition,
    filter: ResizeFilter,
) -> Result<Image> {
    let (h, w, _) = get_h_w_c(image);
    let (new_w, new_h) = resize_to_side_dimensions(w, h, target, side, condition);
    if (new_w, new_h) == (w, h) {
        return Ok(image.to_owned());
    }
    info!(
        "Resize to {} {} ({}): {}x{} -> {}x{}",
        side, target, filter, w, h, new_w, new_h
    );
    resampler.resample(image, (new_w, new_h), filter, false)
}

pub fn resize_to_side(
    image: &ImageView<'_>,
    target: usize,
    side: SideSelection,
    condition: ResizeCondition,
    filter: ResizeFilter,
) -> Result<Image> {
    resize_to_side_with(&mut FastResampler::new(), image, target, side, condition, filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records the requested size and returns a constant image of that size.
    struct Recorder {
        calls: Vec<(usize, usize, ResizeFilter, bool)>,
    }

    impl Resample for Recorder {
        fn resample(
            &mut self,
            image: &ImageView<'_>,
            size: (usize, usize),
            filter: ResizeFilter,
            separate_alpha: bool,
        ) -> Result<Image> {
            self.calls.push((size.0, size.1, filter, separate_alpha));
            Ok(Image::zeros((size.1, size.0, image.dim().2)))
        }
    }

    #[test]
    fn round_half_up_rounds_ties_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.49), 2);
        assert_eq!(round_half_up(0.5), 1);
        assert_eq!(round_half_up(-1.0), 0);
    }

    #[test]
    fn percent_has_one_pixel_floor() {
        assert_eq!(percent_dimensions(100, 50, 50.0), (50, 25));
        assert_eq!(percent_dimensions(5, 3, 50.0), (3, 2));
        assert_eq!(percent_dimensions(10, 10, 1.0), (1, 1));
    }

    #[test]
    fn side_conditions() {
        use ResizeCondition::*;
        use SideSelection::*;
        assert_eq!(resize_to_side_dimensions(50, 50, 100, Width, Downscale), (50, 50));
        assert_eq!(resize_to_side_dimensions(50, 50, 100, Width, Upscale), (100, 100));
        assert_eq!(resize_to_side_dimensions(200, 100, 100, Width, Upscale), (200, 100));
        assert_eq!(resize_to_side_dimensions(200, 100, 100, Width, Both), (100, 50));
        assert_eq!(resize_to_side_dimensions(200, 100, 50, Height, Downscale), (100, 50));
        assert_eq!(resize_to_side_dimensions(300, 200, 100, ShorterSide, Both), (150, 100));
        assert_eq!(resize_to_side_dimensions(300, 200, 150, LongerSide, Both), (150, 100));
        assert_eq!(resize_to_side_dimensions(3, 1, 1, LongerSide, Both), (1, 1));
    }

    #[test]
    fn resize_delegates_computed_size() {
        let img = Image::zeros((10, 20, 3));
        let mut rec = Recorder { calls: Vec::new() };
        let out = resize_with(
            &mut rec,
            &img.view(),
            ResizeMode::Percentage(25.0),
            ResizeFilter::Lanczos,
            true,
        )
        .unwrap();
        assert_eq!(out.dim(), (3, 5, 3));
        assert_eq!(rec.calls, vec![(5, 3, ResizeFilter::Lanczos, true)]);
    }

    #[test]
    fn skipped_side_resize_does_not_resample() {
        let img = Image::zeros((50, 50, 1));
        let mut rec = Recorder { calls: Vec::new() };
        let out = resize_to_side_with(
            &mut rec,
            &img.view(),
            100,
            SideSelection::Width,
            ResizeCondition::Downscale,
            ResizeFilter::Linear,
        )
        .unwrap();
        assert_eq!(out.dim(), (50, 50, 1));
        assert!(rec.calls.is_empty());
    }

    #[test]
    fn fast_resampler_produces_target_size() {
        let img = Image::from_elem((8, 6, 3), 0.5);
        let out = resize(
            &img.view(),
            ResizeMode::Absolute {
                width: 3,
                height: 4,
            },
            ResizeFilter::Nearest,
            false,
        )
        .unwrap();
        assert_eq!(out.dim(), (4, 3, 3));
        assert!(out.iter().all(|&v| (v - 0.5).abs() < 1e-6));
    }

    #[test]
    fn fast_resampler_rejects_zero_size() {
        let img = Image::zeros((4, 4, 1));
        let err = FastResampler::new().resample(&img.view(), (0, 2), ResizeFilter::Box, false);
        assert!(matches!(err, Err(Error::InvalidArgument { .. })));
    }
}
