//! Raster-to-map conversion by section stitching
//!
//! The pipeline quantizes a terrain image into a grid of discrete terrain
//! labels, derives the corner pattern required at every grid intersection,
//! resolves each pattern to a concrete map section from a user-supplied
//! library (exactly, or by nearest match when the library is incomplete),
//! and composes the chosen sections into one output map.

#![forbid(unsafe_code)]

/// Dense and sparse 2D containers used throughout the pipeline
pub mod grid;
/// Input/output operations, CLI, and error handling
pub mod io;
/// Section assets, classification rules, and the exact/fuzzy stores
pub mod library;
/// Quantization, section-type decision, and map composition
pub mod terrain;

pub use io::error::{Error, Result};
