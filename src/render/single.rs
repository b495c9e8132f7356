use crate::{
    foundation::{core::CropRect, error::CropResult},
    raster::source::{Raster, RasterSource},
};

/// Cut `crop` out of `source` at native resolution.
///
/// The crop is rounded to whole pixels here and nowhere earlier; the output is exactly
/// `round(width) x round(height)`.
#[tracing::instrument(skip(source))]
pub fn render_crop(source: &dyn RasterSource, crop: &CropRect) -> CropResult<Raster> {
    let (w, h) = source.pixel_size();
    let region = crop.to_pixel_region(w, h);
    source.sample_region(region)
}

#[cfg(test)]
#[path = "../../tests/unit/render/single.rs"]
mod tests;
