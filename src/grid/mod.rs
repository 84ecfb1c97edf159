//! Generic 2D containers
//!
//! Both containers expose the same logical shape: a fixed `width x height`
//! rectangle addressed either by `(x, y)` coordinates or by the equivalent
//! row-major linear index `y * width + x`. The dense variant stores every
//! cell; the sparse variant stores only cells holding a non-default value.

/// Dense row-major grid backed by a flat vector
pub mod dense;
/// Sparse grid storing only non-default cells
pub mod sparse;

pub use dense::Grid;
pub use sparse::SparseGrid;
