/// Preset and custom ratio selection state.
pub mod catalog;
/// Ratio parsing, comparison and fraction formatting.
pub mod math;
