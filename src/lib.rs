#![doc = r##"
rasterdim — a deterministic raster-geometry engine.

This crate pads, crops, content-trims, bounds and resizes in-memory images
before and after an external upscaling model runs on them. Every processing
function is pure and synchronous: it takes a borrowed `(height, width,
channels)` raster of normalized `f32` samples and returns a new one (or the
caller's own buffer for documented identity cases). There is no shared state,
so independent images may be processed from any number of threads.

Add dependency
--------------
```toml
[dependencies]
rasterdim = "0.1"
```

Crop, pad and trim
------------------
```rust
use rasterdim::{
    crop, crop_border, pad, BorderMode, BorderType, Color, CropMode, Image, SelectMode,
};

fn main() -> rasterdim::Result<()> {
    // 10x10 gray image with a 2px white frame
    let img = Image::from_shape_fn((10, 10, 1), |(y, x, _)| {
        if y < 2 || x < 2 || y >= 8 || x >= 8 { 1.0 } else { 0.0 }
    });

    let trimmed = crop_border(&img.view(), 10.0, SelectMode::AllSections, 0)?;
    assert_eq!(trimmed.dim(), (6, 6, 1));

    let framed = pad(&trimmed.view(), BorderType::Replicate, Color::BLACK, BorderMode::Border(4));
    assert_eq!(framed.dim(), (14, 14, 1));

    let inner = crop(framed.view(), CropMode::Border(4))?;
    assert_eq!(inner.dim(), (6, 6, 1));
    Ok(())
}
```

Resize to a side
----------------
```rust
use rasterdim::{resize_to_side, Image, ResizeCondition, ResizeFilter, SideSelection};

fn main() -> rasterdim::Result<()> {
    let img = Image::zeros((300, 400, 3));
    let out = resize_to_side(
        &img.view(),
        200,
        SideSelection::LongerSide,
        ResizeCondition::Downscale,
        ResizeFilter::Lanczos,
    )?;
    assert_eq!(out.dim(), (150, 200, 3));
    Ok(())
}
```

Pipelines from config
---------------------
```rust
use rasterdim::{process_image, Image, ProcessingParams};

fn main() -> rasterdim::Result<()> {
    let params = ProcessingParams::from_json_str(r#"{
        "operations": [
            {"op": "crop_border", "tolerance": 5.0, "select": "largest_section"},
            {"op": "resize", "mode": {"percentage": 50.0}, "filter": "linear"}
        ]
    }"#)?;
    let out = process_image(&Image::zeros((8, 8, 3)).view(), &params)?;
    assert_eq!(out.dim(), (4, 4, 3));
    Ok(())
}
```

Error handling
--------------
All fallible functions return `rasterdim::Result<T>`. A request that would
collapse an axis fails with `Error::InvalidGeometry`; a threshold query that
finds nothing fails with `Error::EmptyResult`.

Feature flags
-------------
- `io` (default): image file decoding/encoding and the `rasterdim` CLI.
- `full`: everything.

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — geometry values and processing steps.
- [`types`] — sizing modes and resize policies.
- [`error`] — crate-level `Error` and `Result`.
"##]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod types;

// File adapter (only available with io feature)
#[cfg(feature = "io")]
pub mod io;

// Curated public API surface
// Types
pub use core::geometry::{Padding, Region, Section};
pub use core::image::{CowImage, Image, ImageView, get_dimensions};
pub use core::params::{Operation, ProcessingParams};
pub use error::{Error, Result};
pub use types::{
    BorderMode, BorderType, Color, CropMode, ResizeCondition, ResizeFilter, ResizeMode,
    SelectMode, SideSelection,
};

// Processing steps
pub use core::processing::bounding_box::get_bounding_box;
pub use core::processing::crop::crop;
pub use core::processing::crop_alpha::crop_to_alpha_content;
pub use core::processing::crop_border::{crop_border, get_border_color};
pub use core::processing::padding::{create_border, pad};
pub use core::processing::resize::{
    FastResampler, Resample, percent_dimensions, resize, resize_to_side,
    resize_to_side_dimensions, round_half_up,
};
pub use core::processing::section::find_inner_section;

// High-level API re-exports
pub use api::{BatchReport, process_image};
#[cfg(feature = "io")]
pub use api::{process_directory_to_path, process_file_to_path};
