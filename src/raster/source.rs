use crate::foundation::{
    core::{PixelRegion, RasterDimensions},
    error::{CropError, CropResult},
};

/// RGBA8 pixel buffer, row-major and tightly packed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    /// Whether color channels are already multiplied by alpha.
    pub premultiplied: bool,
}

impl Raster {
    /// Wrap an existing buffer, checking its length against the dimensions.
    pub fn from_parts(
        width: u32,
        height: u32,
        data: Vec<u8>,
        premultiplied: bool,
    ) -> CropResult<Self> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(CropError::validation(format!(
                "raster byte length {} does not match {width}x{height} rgba8 ({expected})",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
            premultiplied,
        })
    }

    /// RGBA bytes of the pixel at `(x, y)`, if in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Same pixels with premultiplied alpha.
    pub fn into_premultiplied(mut self) -> Self {
        if !self.premultiplied {
            premultiply_rgba8_in_place(&mut self.data);
            self.premultiplied = true;
        }
        self
    }

    /// Same pixels with straight alpha.
    pub fn into_straight(mut self) -> Self {
        if self.premultiplied {
            unpremultiply_rgba8_in_place(&mut self.data);
            self.premultiplied = false;
        }
        self
    }
}

/// A decoded image the crop renderers can read from.
///
/// Implementations must be shareable across threads: contact sheet panels are sampled
/// concurrently.
pub trait RasterSource: Send + Sync {
    /// Decoded size in whole pixels.
    fn pixel_size(&self) -> (u32, u32);

    /// Copy the pixels inside `region`, unscaled, into a new raster.
    fn sample_region(&self, region: PixelRegion) -> CropResult<Raster>;

    /// [`RasterSource::pixel_size`] as crop-math dimensions.
    fn dimensions(&self) -> CropResult<RasterDimensions> {
        let (w, h) = self.pixel_size();
        RasterDimensions::from_pixels(w, h)
            .map_err(|_| CropError::source_unavailable(format!("source has empty size {w}x{h}")))
    }
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

pub(crate) fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((*c as u16 * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/source.rs"]
mod tests;
