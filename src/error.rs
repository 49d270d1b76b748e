//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Geometry and threshold failures get their own variants so callers can tell a
//! malformed request apart from an image with no qualifying content.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A crop/pad/region request would collapse an axis or leave the image.
    #[error("Invalid geometry: {reason}")]
    InvalidGeometry { reason: String },

    /// A threshold-based crop or bounding-box query found no qualifying pixel.
    #[error("Empty result: {reason}")]
    EmptyResult { reason: String },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Unsupported channel count: {channels}")]
    UnsupportedChannels { channels: usize },

    #[error("Resample error: {0}")]
    Resample(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[cfg(feature = "io")]
    #[error("Image codec error: {0}")]
    Codec(#[from] image::ImageError),

    #[error("External error: {0}")]
    External(String),
}

impl Error {
    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::External(e.to_string())
    }

    pub(crate) fn geometry(reason: impl Into<String>) -> Self {
        Error::InvalidGeometry {
            reason: reason.into(),
        }
    }

    pub(crate) fn empty(reason: impl Into<String>) -> Self {
        Error::EmptyResult {
            reason: reason.into(),
        }
    }
}
