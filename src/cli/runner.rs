use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use rasterdim::io::load_image;
use rasterdim::{
    ProcessingParams, get_bounding_box, get_dimensions, process_directory_to_path,
    process_file_to_path,
};

use super::args::CliArgs;
use super::errors::AppError;

fn load_params(path: Option<&Path>) -> Result<ProcessingParams, AppError> {
    match path {
        None => Ok(ProcessingParams::default()),
        Some(path) => Ok(ProcessingParams::from_json_file(path)?),
    }
}

fn inspect(input: &Path, args: &CliArgs) -> Result<(), AppError> {
    let img = load_image(input)?;
    if args.dimensions {
        let (w, h, c) = get_dimensions(&img.view());
        println!("{} {} {}", w, h, c);
    }
    if let Some(threshold) = args.bbox {
        let (x, y, w, h) = get_bounding_box(&img.view(), threshold)?;
        println!("{} {} {} {}", x, y, w, h);
    }
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .init();
    }

    let params = load_params(args.params.as_deref())?;

    if let Some(input_dir) = args.input_dir.as_deref() {
        let output_dir = args.output_dir.as_deref().ok_or(AppError::MissingArgument {
            arg: "--output-dir".to_string(),
        })?;

        info!("Starting batch processing from directory: {:?}", input_dir);
        let report =
            process_directory_to_path(input_dir, output_dir, &params, args.continue_on_error)
                .map_err(AppError::from)?;
        info!(
            "Processed: {}, skipped: {}, errors: {}",
            report.processed, report.skipped, report.errors
        );
        return Ok(());
    }

    let input = args.input.as_deref().ok_or(AppError::MissingArgument {
        arg: "--input".to_string(),
    })?;

    if args.dimensions || args.bbox.is_some() {
        inspect(input, &args)?;
        return Ok(());
    }

    let output = args.output.as_deref().ok_or(AppError::MissingArgument {
        arg: "--output".to_string(),
    })?;
    process_file_to_path(input, output, &params).map_err(AppError::from)?;
    info!("Successfully processed: {:?} -> {:?}", input, output);

    Ok(())
}
