use crate::{
    foundation::{
        core::{CropRect, FocalPoint, RasterDimensions},
        error::{CropError, CropResult},
    },
    ratio::math::Ratio,
};

/// Largest `target_ratio` rectangle inside the image, slid along the one cropped axis toward
/// the focal point.
///
/// Exactly one axis is cropped. A strictly wider image keeps its full height and slides
/// horizontally by `focal.x`; anything else, including an exact aspect match, keeps its full
/// width and slides vertically by `focal.y`. The result is not rounded.
pub fn compute_crop(
    original_width: f64,
    original_height: f64,
    target_ratio: f64,
    focal: FocalPoint,
) -> CropResult<CropRect> {
    RasterDimensions::new(original_width, original_height)?;
    if !target_ratio.is_finite() || target_ratio <= 0.0 {
        return Err(CropError::validation(format!(
            "target ratio must be positive, got {target_ratio}"
        )));
    }
    focal.validate()?;

    let image_ratio = original_width / original_height;
    let crop = if image_ratio > target_ratio {
        let width = original_height * target_ratio;
        CropRect {
            x: (focal.x / 100.0) * (original_width - width).max(0.0),
            y: 0.0,
            width,
            height: original_height,
        }
    } else {
        // On an exact aspect match the division can overshoot by an ulp.
        let height = original_width / target_ratio;
        CropRect {
            x: 0.0,
            y: (focal.y / 100.0) * (original_height - height).max(0.0),
            width: original_width,
            height,
        }
    };
    Ok(crop)
}

/// [`compute_crop`] over typed inputs.
pub fn crop_for(
    source: RasterDimensions,
    ratio: &Ratio,
    focal: FocalPoint,
) -> CropResult<CropRect> {
    compute_crop(source.width, source.height, ratio.value(), focal)
}

#[cfg(test)]
#[path = "../../tests/unit/crop/calculator.rs"]
mod tests;
