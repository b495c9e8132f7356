//! CPU rendering of single crops and labeled contact sheets.

/// Label band text rasterization.
pub mod labels;
/// Contact sheet compositing.
pub mod sheet;
/// Native-resolution crop extraction.
pub mod single;
