use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::{
    core::Rgba8,
    error::{CropError, CropResult},
};

/// Shared tolerance for deciding that two ratios are the same ratio.
pub const RATIO_TOLERANCE: f64 = 1e-3;

/// Largest denominator tried when rendering a ratio as a fraction.
pub const MAX_DENOMINATOR: u32 = 100;

/// Largest accepted encoded source image, in bytes (50 MiB).
pub const MAX_SOURCE_BYTES: u64 = 50 * 1024 * 1024;

/// Hard ceiling on either side of a rendered canvas.
pub const MAX_CANVAS_DIM: u32 = 16_384;

/// Crate-wide tunables. Every field has a documented default, and JSON files may override any
/// subset of them.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CropConfig {
    /// Ratio equality tolerance (default [`RATIO_TOLERANCE`]).
    pub ratio_tolerance: f64,
    /// Fraction search bound (default [`MAX_DENOMINATOR`]).
    pub max_denominator: u32,
    /// Maximum encoded source size (default [`MAX_SOURCE_BYTES`]).
    pub max_source_bytes: u64,
    /// Contact sheet layout and styling.
    pub sheet: SheetConfig,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            ratio_tolerance: RATIO_TOLERANCE,
            max_denominator: MAX_DENOMINATOR,
            max_source_bytes: MAX_SOURCE_BYTES,
            sheet: SheetConfig::default(),
        }
    }
}

impl CropConfig {
    /// Load a JSON config file; missing fields take their defaults.
    pub fn from_path(path: impl AsRef<Path>) -> CropResult<Self> {
        let path = path.as_ref();
        let f = std::fs::File::open(path)
            .with_context(|| format!("open config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_reader(std::io::BufReader::new(f))
            .with_context(|| format!("parse config '{}'", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values the crop and layout math cannot work with.
    pub fn validate(&self) -> CropResult<()> {
        if !self.ratio_tolerance.is_finite() || self.ratio_tolerance <= 0.0 {
            return Err(CropError::validation("ratio_tolerance must be > 0"));
        }
        if self.max_denominator == 0 {
            return Err(CropError::validation("max_denominator must be >= 1"));
        }
        if self.max_source_bytes == 0 {
            return Err(CropError::validation("max_source_bytes must be > 0"));
        }
        self.sheet.validate()
    }
}

/// Geometry and styling of a contact sheet.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SheetConfig {
    /// Horizontal gap before each panel and after the last one (default 40).
    pub padding: f64,
    /// Label band above the panels (default 80).
    pub top_padding: f64,
    /// Margin below the tallest panel (default 40).
    pub bottom_padding: f64,
    /// Panels taller than this are scaled down to it; shorter ones are never enlarged
    /// (default 800).
    pub max_display_height: f64,
    /// Canvas size limit on either axis (default and ceiling [`MAX_CANVAS_DIM`]).
    pub max_canvas_dim: u32,
    pub background: Rgba8,
    pub label_color: Rgba8,
    pub dimension_color: Rgba8,
    pub backdrop: Rgba8,
    pub border_color: Rgba8,
    pub border_width: f64,
    /// Label font size in px (default 20, bold).
    pub label_font_size: f64,
    /// Dimension line font size in px (default 16).
    pub dimension_font_size: f64,
    /// Label baseline measured from the top of the canvas (default 35).
    pub label_baseline: f64,
    /// Dimension line baseline measured from the top of the canvas (default 60).
    pub dimension_baseline: f64,
    /// CSS-style font family list used for both text lines.
    pub font_family: String,
    /// Extra font file registered next to the system fonts.
    pub font_path: Option<PathBuf>,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            padding: 40.0,
            top_padding: 80.0,
            bottom_padding: 40.0,
            max_display_height: 800.0,
            max_canvas_dim: MAX_CANVAS_DIM,
            background: Rgba8::opaque(0xf7, 0xfa, 0xfc),
            label_color: Rgba8::opaque(0x2d, 0x37, 0x48),
            dimension_color: Rgba8::opaque(0x71, 0x80, 0x96),
            backdrop: Rgba8::opaque(0xff, 0xff, 0xff),
            border_color: Rgba8::opaque(0xe2, 0xe8, 0xf0),
            border_width: 2.0,
            label_font_size: 20.0,
            dimension_font_size: 16.0,
            label_baseline: 35.0,
            dimension_baseline: 60.0,
            font_family: "system-ui, sans-serif".to_string(),
            font_path: None,
        }
    }
}

impl SheetConfig {
    /// Reject negative spacing, a non-positive display cap and oversized canvas limits.
    pub fn validate(&self) -> CropResult<()> {
        for (name, v) in [
            ("padding", self.padding),
            ("top_padding", self.top_padding),
            ("bottom_padding", self.bottom_padding),
            ("border_width", self.border_width),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(CropError::validation(format!("{name} must be >= 0")));
            }
        }
        for (name, v) in [
            ("max_display_height", self.max_display_height),
            ("label_font_size", self.label_font_size),
            ("dimension_font_size", self.dimension_font_size),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(CropError::validation(format!("{name} must be > 0")));
            }
        }
        if self.max_canvas_dim == 0 || self.max_canvas_dim > MAX_CANVAS_DIM {
            return Err(CropError::validation(format!(
                "max_canvas_dim must be within 1..={MAX_CANVAS_DIM}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
