use std::{path::Path, sync::Arc};

use crate::{
    foundation::{
        config::MAX_SOURCE_BYTES,
        core::PixelRegion,
        error::{CropError, CropResult},
    },
    raster::source::{Raster, RasterSource},
};

/// Encoded formats accepted as crop sources.
pub const ACCEPTED_FORMATS: &[image::ImageFormat] = &[
    image::ImageFormat::Jpeg,
    image::ImageFormat::Png,
    image::ImageFormat::WebP,
];

/// A fully decoded source image held as straight-alpha RGBA8.
///
/// Cheap to clone; the pixels are shared.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    pixels: Arc<image::RgbaImage>,
}

impl DecodedImage {
    /// Wrap already-decoded pixels.
    pub fn from_rgba(pixels: image::RgbaImage) -> CropResult<Self> {
        if pixels.width() == 0 || pixels.height() == 0 {
            return Err(CropError::decode("decoded image has no pixels"));
        }
        Ok(Self {
            pixels: Arc::new(pixels),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

impl RasterSource for DecodedImage {
    fn pixel_size(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    fn sample_region(&self, region: PixelRegion) -> CropResult<Raster> {
        let (w, h) = self.pixels.dimensions();
        let fits_x = region.x.checked_add(region.width).is_some_and(|r| r <= w);
        let fits_y = region.y.checked_add(region.height).is_some_and(|b| b <= h);
        if region.width == 0 || region.height == 0 || !fits_x || !fits_y {
            return Err(CropError::source_unavailable(format!(
                "region {region:?} is outside the {w}x{h} source"
            )));
        }

        let view = image::imageops::crop_imm(
            self.pixels.as_ref(),
            region.x,
            region.y,
            region.width,
            region.height,
        );
        let cropped = view.to_image();
        Raster::from_parts(region.width, region.height, cropped.into_raw(), false)
    }
}

/// Decode encoded bytes with the default size limit.
pub fn decode_image(bytes: &[u8]) -> CropResult<DecodedImage> {
    decode_image_limited(bytes, MAX_SOURCE_BYTES)
}

/// Decode encoded bytes, rejecting inputs over `max_bytes` and formats other than JPEG, PNG and
/// WebP.
pub fn decode_image_limited(bytes: &[u8], max_bytes: u64) -> CropResult<DecodedImage> {
    if bytes.len() as u64 > max_bytes {
        return Err(CropError::decode(format!(
            "source is {} bytes, limit is {max_bytes}",
            bytes.len()
        )));
    }

    let format = image::guess_format(bytes)
        .map_err(|e| CropError::decode(format!("unrecognized image format: {e}")))?;
    if !ACCEPTED_FORMATS.contains(&format) {
        return Err(CropError::decode(format!(
            "unsupported image format {format:?}, expected JPEG, PNG or WebP"
        )));
    }

    let dyn_img = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| CropError::decode(format!("decode image from memory: {e}")))?;
    let img = DecodedImage::from_rgba(dyn_img.to_rgba8())?;
    tracing::debug!(
        width = img.width(),
        height = img.height(),
        ?format,
        "decoded source image"
    );
    Ok(img)
}

/// Decode on the blocking pool so async callers are never stalled by large images.
pub async fn decode_image_async(bytes: Vec<u8>, max_bytes: u64) -> CropResult<DecodedImage> {
    tokio::task::spawn_blocking(move || decode_image_limited(&bytes, max_bytes))
        .await
        .map_err(|e| CropError::decode(format!("decode task did not complete: {e}")))?
}

/// Read and decode an image file.
#[tracing::instrument]
pub async fn load_image(path: &Path, max_bytes: u64) -> CropResult<DecodedImage> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        CropError::source_unavailable(format!("read image '{}': {e}", path.display()))
    })?;
    decode_image_async(bytes, max_bytes).await
}

#[cfg(test)]
#[path = "../../tests/unit/raster/decode.rs"]
mod tests;
