//! High-level, ergonomic library API: run a configured pipeline over an
//! in-memory raster, or (with the `io` feature) over files and directories.
//! Prefer these entrypoints over the low-level processing modules when
//! embedding rasterdim into a job pipeline.
#[cfg(feature = "io")]
use std::fs;
#[cfg(feature = "io")]
use std::path::Path;

#[cfg(feature = "io")]
use tracing::{info, warn};

use crate::core::image::{Image, ImageView};
use crate::core::params::ProcessingParams;
use crate::core::processing::pipeline;
use crate::error::Result;
#[cfg(feature = "io")]
use crate::io::codec::{load_image, save_image};

/// Runs `params` over an in-memory image (no disk I/O).
pub fn process_image(image: &ImageView<'_>, params: &ProcessingParams) -> Result<Image> {
    pipeline::process_image(image, params)
}

/// Outcome of a directory run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Loads `input`, runs `params` and writes the result to `output`.
#[cfg(feature = "io")]
pub fn process_file_to_path(input: &Path, output: &Path, params: &ProcessingParams) -> Result<()> {
    let img = load_image(input)?;
    let processed = pipeline::process_image(&img.view(), params)?;
    save_image(&processed.view(), output)
}

/// Processes every file directly inside `input_dir` into `output_dir`,
/// keeping file names. Subdirectories are skipped. With `continue_on_error`
/// a failing image is counted and the run goes on; otherwise the first
/// failure is returned.
#[cfg(feature = "io")]
pub fn process_directory_to_path(
    input_dir: &Path,
    output_dir: &Path,
    params: &ProcessingParams,
    continue_on_error: bool,
) -> Result<BatchReport> {
    fs::create_dir_all(output_dir)?;
    let mut report = BatchReport::default();

    for entry in fs::read_dir(input_dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().filter(|_| path.is_file()) else {
            info!("Skipping non-file: {:?}", path);
            report.skipped += 1;
            continue;
        };
        let output_path = output_dir.join(name);

        info!("Processing: {:?} -> {:?}", path, output_path);
        match process_file_to_path(&path, &output_path, params) {
            Ok(()) => report.processed += 1,
            Err(e) if continue_on_error => {
                warn!("Error processing {:?}: {}", path, e);
                report.errors += 1;
            }
            Err(e) => return Err(e),
        }
    }

    info!(
        "Batch complete: processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    Ok(report)
}
