//! Input/output operations and error handling

/// Command-line interface and pipeline runner
pub mod cli;
/// Runtime constants and defaults
pub mod configuration;
/// Error types for all pipeline operations
pub mod error;
/// Progress reporting for interactive runs
pub mod progress;
/// Binary section format reader and writer
pub mod section;
