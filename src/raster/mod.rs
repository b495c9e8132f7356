//! Raster buffers, the source-image seam, and the decode/encode boundaries.

/// Decoding encoded bytes into a sampleable source image.
pub mod decode;
/// PNG serialization of finished rasters.
pub mod encode;
/// The [`Raster`](source::Raster) buffer and the [`RasterSource`](source::RasterSource) trait.
pub mod source;
