/// Focal-point crop rectangle computation.
pub mod calculator;
