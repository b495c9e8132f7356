//! ratiocrop crops images to target aspect ratios around a focal point and composes labeled
//! contact sheets comparing several ratios side by side.
//!
//! - Parse and manage ratios with [`parse_ratio`] and [`RatioCatalog`]
//! - Compute crop rectangles with [`compute_crop`]
//! - Lay out and render sheets with [`layout_sheet`] and [`SheetRenderer`]
//! - Export PNG artifacts with [`export_crop`] / [`export_sheet`] into an [`ArtifactSink`]
#![forbid(unsafe_code)]

mod foundation;

pub mod crop;
pub mod export;
pub mod layout;
pub mod raster;
pub mod ratio;
pub mod render;

pub use crate::foundation::config::{
    CropConfig, MAX_CANVAS_DIM, MAX_DENOMINATOR, MAX_SOURCE_BYTES, RATIO_TOLERANCE, SheetConfig,
};
pub use crate::foundation::core::{
    CropRect, FocalPoint, PixelRegion, RasterDimensions, Rect, Rgba8,
};
pub use crate::foundation::error::{CropError, CropResult};

pub use crate::crop::calculator::{compute_crop, crop_for};
pub use crate::export::naming::{export_filename, sheet_filename};
pub use crate::export::pipeline::{export_crop, export_sheet};
pub use crate::export::sink::{ArtifactSink, DirectorySink, ExportArtifact, InMemorySink};
pub use crate::layout::sheet::{PanelPlacement, SheetLayout, SheetRequest, layout_sheet};
pub use crate::raster::decode::{
    ACCEPTED_FORMATS, DecodedImage, decode_image, decode_image_async, decode_image_limited,
    load_image,
};
pub use crate::raster::encode::{encode_png, encode_png_async};
pub use crate::raster::source::{Raster, RasterSource};
pub use crate::ratio::catalog::{PRESET_RATIOS, RatioCatalog};
pub use crate::ratio::math::{Ratio, format_ratio, format_ratio_with, parse_ratio, ratios_equal};
pub use crate::render::labels::LabelRasterizer;
pub use crate::render::sheet::SheetRenderer;
pub use crate::render::single::render_crop;
