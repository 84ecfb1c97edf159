//! Terrain quantization and section-type decision
//!
//! This module turns a source image into a grid of terrain labels, derives
//! the corner pattern every grid intersection requires, resolves each pattern
//! to a concrete library section, and composes the result into one map.

/// Terrain creation orchestrator
pub mod creator;
/// Section-type labeling and realization over a terrain grid
pub mod decider;
/// Terrain labels, corner patterns, and symmetry canonicalization
pub mod labels;
/// Image-to-terrain-grid quantization
pub mod quantizer;
/// Section grid composition into one output section
pub mod renderer;

pub use creator::TerrainCreator;
pub use labels::{SectionType, Symmetry, Terrain};
pub use quantizer::MapQuantizer;
