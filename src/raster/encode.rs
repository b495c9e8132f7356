use std::io::Cursor;

use crate::{
    foundation::error::{CropError, CropResult},
    raster::source::Raster,
};

/// Serialize a raster as PNG bytes, un-premultiplying first when needed.
pub fn encode_png(raster: &Raster) -> CropResult<Vec<u8>> {
    let straight = raster.clone().into_straight();
    let img = image::RgbaImage::from_raw(straight.width, straight.height, straight.data)
        .ok_or_else(|| {
            CropError::encode_failure(format!(
                "raster buffer does not match {}x{}",
                raster.width, raster.height
            ))
        })?;

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| CropError::encode_failure(format!("write png: {e}")))?;
    Ok(buf)
}

/// [`encode_png`] on the blocking pool.
pub async fn encode_png_async(raster: Raster) -> CropResult<Vec<u8>> {
    tokio::task::spawn_blocking(move || encode_png(&raster))
        .await
        .map_err(|e| CropError::encode_failure(format!("encode task did not complete: {e}")))?
}

#[cfg(test)]
#[path = "../../tests/unit/raster/encode.rs"]
mod tests;
