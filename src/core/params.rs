use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{
    BorderMode, BorderType, Color, CropMode, ResizeCondition, ResizeFilter, ResizeMode, SelectMode,
    SideSelection,
};

/// Long side the upscaler's input is brought down to before inference.
pub const DEFAULT_MAX_SIDE: usize = 2420;

/// One geometry step of a processing pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Pad {
        border_type: BorderType,
        #[serde(default)]
        color: Color,
        mode: BorderMode,
    },
    Crop {
        mode: CropMode,
    },
    /// Trim the uniform border around the content; `tolerance` in percent.
    CropBorder {
        tolerance: f32,
        select: SelectMode,
        #[serde(default)]
        padding: usize,
    },
    /// Trim transparent margins; `threshold` in percent.
    CropToAlphaContent {
        threshold: f32,
    },
    Resize {
        mode: ResizeMode,
        filter: ResizeFilter,
        #[serde(default)]
        separate_alpha: bool,
    },
    ResizeToSide {
        target: usize,
        side: SideSelection,
        condition: ResizeCondition,
        filter: ResizeFilter,
    },
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Pad {
                border_type, mode, ..
            } => write!(f, "Pad({}, {})", border_type, mode),
            Operation::Crop { mode } => write!(f, "Crop({})", mode),
            Operation::CropBorder {
                tolerance,
                select,
                padding,
            } => write!(f, "CropBorder({}%, {}, {})", tolerance, select, padding),
            Operation::CropToAlphaContent { threshold } => {
                write!(f, "CropToAlphaContent({}%)", threshold)
            }
            Operation::Resize { mode, filter, .. } => write!(f, "Resize({:?}, {})", mode, filter),
            Operation::ResizeToSide {
                target,
                side,
                condition,
                filter,
            } => write!(
                f,
                "ResizeToSide({}, {}, {}, {})",
                target, side, condition, filter
            ),
        }
    }
}

/// Processing parameters suitable for config files and job presets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingParams {
    /// Applied in order
    pub operations: Vec<Operation>,
}

impl ProcessingParams {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON params file such as the one passed to the CLI's `--params`.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for ProcessingParams {
    fn default() -> Self {
        Self {
            operations: vec![Operation::ResizeToSide {
                target: DEFAULT_MAX_SIDE,
                side: SideSelection::LongerSide,
                condition: ResizeCondition::Downscale,
                filter: ResizeFilter::Lanczos,
            }],
        }
    }
}
