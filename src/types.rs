//! Shared types and enums used across rasterdim.
//! Includes the sizing modes (`BorderMode`, `CropMode`), section selection
//! (`SelectMode`), resize policies (`SideSelection`, `ResizeCondition`,
//! `ResizeFilter`) and border fill kinds (`BorderType`).
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How a border is sized when padding an image.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderMode {
    /// Uniform margin on all four sides.
    Border(usize),
    Edges {
        top: usize,
        right: usize,
        bottom: usize,
        left: usize,
    },
    /// Place the image at `(left, top)` inside a `width x height` canvas.
    Offsets {
        left: usize,
        top: usize,
        width: usize,
        height: usize,
    },
}

/// How a crop is sized. Mirrors `BorderMode`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropMode {
    Border(usize),
    Edges {
        top: usize,
        right: usize,
        bottom: usize,
        left: usize,
    },
    Offsets {
        left: usize,
        top: usize,
        width: usize,
        height: usize,
    },
}

impl std::fmt::Display for BorderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BorderMode::Border(amount) => write!(f, "Border({})", amount),
            BorderMode::Edges {
                top,
                right,
                bottom,
                left,
            } => write!(f, "Edges({}, {}, {}, {})", top, right, bottom, left),
            BorderMode::Offsets {
                left,
                top,
                width,
                height,
            } => write!(f, "Offsets({}, {}, {}x{})", left, top, width, height),
        }
    }
}

impl std::fmt::Display for CropMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CropMode::Border(amount) => write!(f, "Border({})", amount),
            CropMode::Edges {
                top,
                right,
                bottom,
                left,
            } => write!(f, "Edges({}, {}, {}, {})", top, right, bottom, left),
            CropMode::Offsets {
                left,
                top,
                width,
                height,
            } => write!(f, "Offsets({}, {}, {}x{})", left, top, width, height),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectMode {
    AllSections,
    CenterSection,
    LargestSection,
}

impl std::fmt::Display for SelectMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectMode::AllSections => write!(f, "AllSections"),
            SelectMode::CenterSection => write!(f, "CenterSection"),
            SelectMode::LargestSection => write!(f, "LargestSection"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SideSelection {
    Width,
    Height,
    ShorterSide,
    LongerSide,
}

impl std::fmt::Display for SideSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SideSelection::Width => write!(f, "Width"),
            SideSelection::Height => write!(f, "Height"),
            SideSelection::ShorterSide => write!(f, "ShorterSide"),
            SideSelection::LongerSide => write!(f, "LongerSide"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeCondition {
    Both,
    Upscale,
    Downscale,
}

impl std::fmt::Display for ResizeCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResizeCondition::Both => write!(f, "Both"),
            ResizeCondition::Upscale => write!(f, "Upscale"),
            ResizeCondition::Downscale => write!(f, "Downscale"),
        }
    }
}

/// Resampling kernel handed to the resample primitive untouched.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeFilter {
    Nearest,
    Box,
    Linear,
    Hamming,
    CatmullRom,
    Mitchell,
    Lanczos,
}

impl std::fmt::Display for ResizeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResizeFilter::Nearest => write!(f, "Nearest"),
            ResizeFilter::Box => write!(f, "Box"),
            ResizeFilter::Linear => write!(f, "Linear"),
            ResizeFilter::Hamming => write!(f, "Hamming"),
            ResizeFilter::CatmullRom => write!(f, "CatmullRom"),
            ResizeFilter::Mitchell => write!(f, "Mitchell"),
            ResizeFilter::Lanczos => write!(f, "Lanczos"),
        }
    }
}

/// Percentage or absolute target size for a plain resize.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeMode {
    Percentage(f64),
    Absolute { width: usize, height: usize },
}

/// How border pixels are produced when padding.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderType {
    ReflectMirror,
    Wrap,
    Replicate,
    Black,
    White,
    Transparent,
    CustomColor,
}

impl std::fmt::Display for BorderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BorderType::ReflectMirror => write!(f, "ReflectMirror"),
            BorderType::Wrap => write!(f, "Wrap"),
            BorderType::Replicate => write!(f, "Replicate"),
            BorderType::Black => write!(f, "Black"),
            BorderType::White => write!(f, "White"),
            BorderType::Transparent => write!(f, "Transparent"),
            BorderType::CustomColor => write!(f, "CustomColor"),
        }
    }
}

/// Normalized RGBA color used by `BorderType::CustomColor`.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Per-channel fill values for an image with `channels` channels.
    /// Single-channel images get the Rec.601 luma of the color.
    pub fn for_channels(&self, channels: usize) -> Vec<f32> {
        let luma = 0.299 * self.r + 0.587 * self.g + 0.114 * self.b;
        match channels {
            1 => vec![luma],
            2 => vec![luma, self.a],
            3 => vec![self.r, self.g, self.b],
            4 => vec![self.r, self.g, self.b, self.a],
            n => {
                let mut values = vec![self.r, self.g, self.b, self.a];
                values.resize(n, self.a);
                values
            }
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl std::str::FromStr for Color {
    type Err = String;

    /// Parses `r,g,b` or `r,g,b,a` with normalized components.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split(',')
            .map(|p| p.trim().parse::<f32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("invalid color component in '{}': {}", s, e))?;
        match parts.as_slice() {
            [r, g, b] => Ok(Color::rgba(*r, *g, *b, 1.0)),
            [r, g, b, a] => Ok(Color::rgba(*r, *g, *b, *a)),
            _ => Err(format!("expected 3 or 4 components, got '{}'", s)),
        }
    }
}
