//! Dense 2D grid with bounds-checked coordinate and linear-index access

use crate::grid::SparseGrid;
use crate::io::error::{Error, Result};

/// Fixed-size dense 2D container backed by a flat row-major vector
///
/// `(x, y)` and linear-index accessors are two views of the same storage,
/// related by `index = y * width + x`. Every accessor validates its argument
/// and reports an out-of-range error instead of panicking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone + Default> Grid<T> {
    /// Create a grid with every cell set to the default value
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![T::default(); width * height],
        }
    }
}

impl<T> Grid<T> {
    /// Build a grid from row-major cell contents
    ///
    /// # Errors
    ///
    /// Returns an error if `cells.len() != width * height`.
    pub fn from_cells(width: usize, height: usize, cells: Vec<T>) -> Result<Self> {
        if cells.len() != width * height {
            return Err(Error::GridShape {
                width,
                height,
                len: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Grid width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Read the cell at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinates are out of range.
    pub fn get(&self, x: usize, y: usize) -> Result<&T> {
        let index = self.to_index(x, y)?;
        self.cells.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.cells.len(),
        })
    }

    /// Write the cell at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinates are out of range; the grid is
    /// unchanged in that case.
    pub fn set(&mut self, x: usize, y: usize, value: T) -> Result<()> {
        let index = self.to_index(x, y)?;
        let len = self.cells.len();
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        *cell = value;
        Ok(())
    }

    /// Read the cell at a row-major linear index
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range.
    pub fn get_index(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        self.cells.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.cells.len(),
        })
    }

    /// Write the cell at a row-major linear index
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range; the grid is unchanged
    /// in that case.
    pub fn set_index(&mut self, index: usize, value: T) -> Result<()> {
        self.check_index(index)?;
        let len = self.cells.len();
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        *cell = value;
        Ok(())
    }

    /// Iterate over all cells in row-major order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.cells.iter()
    }

    fn to_index(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(Error::CoordinatesOutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.width * self.height {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.width * self.height,
            });
        }
        Ok(())
    }
}

impl<T: Clone + Default + PartialEq> From<&SparseGrid<T>> for Grid<T> {
    /// Densify: duplicate contents cell by cell, defaults included
    fn from(source: &SparseGrid<T>) -> Self {
        // Sparse iteration yields exactly width * height cells in row-major
        // order, so this is infallible by construction
        Self {
            width: source.width(),
            height: source.height(),
            cells: source.iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
