/// Contact sheet panel placement.
pub mod sheet;
