use crate::foundation::error::{CropError, CropResult};

pub use kurbo::Rect;

/// User-chosen point of interest, as percentages of the image width and height.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FocalPoint {
    /// Horizontal position in `[0, 100]`.
    pub x: f64,
    /// Vertical position in `[0, 100]`.
    pub y: f64,
}

impl Default for FocalPoint {
    fn default() -> Self {
        Self::CENTER
    }
}

impl FocalPoint {
    /// The image center, `{50, 50}`.
    pub const CENTER: Self = Self { x: 50.0, y: 50.0 };

    /// Create a validated focal point with both coordinates in `[0, 100]`.
    pub fn new(x: f64, y: f64) -> CropResult<Self> {
        let p = Self { x, y };
        p.validate()?;
        Ok(p)
    }

    /// Check that both coordinates are finite percentages.
    pub fn validate(&self) -> CropResult<()> {
        for (axis, v) in [("x", self.x), ("y", self.y)] {
            if !v.is_finite() || !(0.0..=100.0).contains(&v) {
                return Err(CropError::validation(format!(
                    "focal point {axis} must be within [0, 100], got {v}"
                )));
            }
        }
        Ok(())
    }
}

/// Pixel dimensions of a decoded source image.
///
/// Stored as `f64` so values prior to rounding stay representable.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RasterDimensions {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl RasterDimensions {
    /// Create validated dimensions (both sides finite and `> 0`).
    pub fn new(width: f64, height: f64) -> CropResult<Self> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(CropError::validation(format!(
                "raster dimensions must be positive, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Dimensions of a decoded pixel grid.
    pub fn from_pixels(width: u32, height: u32) -> CropResult<Self> {
        Self::new(f64::from(width), f64::from(height))
    }

    /// Width divided by height.
    pub fn aspect(self) -> f64 {
        self.width / self.height
    }
}

/// Axis-aligned crop in source pixel space. Never rounded until a renderer needs pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CropRect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width in source pixels.
    pub width: f64,
    /// Height in source pixels.
    pub height: f64,
}

impl CropRect {
    /// Width divided by height.
    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }

    /// Round to whole pixels, clamped so the region stays inside `bounds`.
    ///
    /// Size is rounded first; the origin is then rounded and pulled back if the rounded
    /// size would overhang the far edge.
    pub fn to_pixel_region(&self, bounds_width: u32, bounds_height: u32) -> PixelRegion {
        fn axis(origin: f64, len: f64, bound: u32) -> (u32, u32) {
            let bound = bound.max(1);
            let len = (len.round().max(1.0) as u32).min(bound);
            let origin = (origin.round().max(0.0) as u32).min(bound - len);
            (origin, len)
        }

        let (x, width) = axis(self.x, self.width, bounds_width);
        let (y, height) = axis(self.y, self.height, bounds_height);
        PixelRegion {
            x,
            y,
            width,
            height,
        }
    }
}

/// Integer pixel rectangle inside a raster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PixelRegion {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    /// Opaque color from its channels.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// `#rrggbb` rendering, alpha dropped.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
