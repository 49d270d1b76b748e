use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rasterdim", version, about = "rasterdim CLI")]
pub struct CliArgs {
    /// Input image (single file mode)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Input directory containing images (batch mode)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Output filename; the extension selects the encoder (single file mode)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output directory for batch processing (batch mode)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// JSON file with the operations to apply. Without it the image is
    /// downscaled so its longer side is at most 2420 pixels.
    #[arg(short, long)]
    pub params: Option<PathBuf>,

    /// Print the bounding box of pixels above this brightness percentage
    /// instead of writing an output image
    #[arg(long)]
    pub bbox: Option<f32>,

    /// Print width, height and channel count instead of writing an output image
    #[arg(long, default_value_t = false)]
    pub dimensions: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Batch mode: continue with the remaining images when one fails
    #[arg(long, default_value_t = false)]
    pub continue_on_error: bool,
}
