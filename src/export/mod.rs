//! Export orchestration: filenames, async render + encode, and artifact sinks.

/// Filename derivation for exported crops and sheets.
pub mod naming;
/// Async crop and sheet exports.
pub mod pipeline;
/// Artifact sink trait and built-in sinks.
pub mod sink;
