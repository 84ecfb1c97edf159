//! Sparse 2D grid keyed by row-major linear index

use crate::io::error::{Error, Result};
use std::collections::HashMap;

/// Sparse counterpart of [`Grid`]
///
/// Only cells holding a non-default value occupy storage; writing the default
/// value to a cell removes its entry, so memory stays proportional to the
/// count of non-default cells rather than `width * height`. Reads of absent
/// cells yield the default value.
#[derive(Debug, Clone)]
pub struct SparseGrid<T> {
    width: usize,
    height: usize,
    values: HashMap<usize, T>,
}

impl<T: Clone + Default + PartialEq> SparseGrid<T> {
    /// Create an empty sparse grid of the given logical shape
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            values: HashMap::new(),
        }
    }

    /// Grid width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of cells currently holding a non-default value
    pub fn stored_len(&self) -> usize {
        self.values.len()
    }

    /// Read the cell at `(x, y)`, yielding the default value when absent
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinates are out of range.
    pub fn get(&self, x: usize, y: usize) -> Result<T> {
        let index = self.to_index(x, y)?;
        Ok(self.values.get(&index).cloned().unwrap_or_default())
    }

    /// Write the cell at `(x, y)`
    ///
    /// Writing the default value removes the cell's entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinates are out of range; the grid is
    /// unchanged in that case.
    pub fn set(&mut self, x: usize, y: usize, value: T) -> Result<()> {
        let index = self.to_index(x, y)?;
        if value == T::default() {
            self.values.remove(&index);
        } else {
            self.values.insert(index, value);
        }
        Ok(())
    }

    /// Read the cell at a row-major linear index
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range.
    pub fn get_index(&self, index: usize) -> Result<T> {
        self.check_index(index)?;
        Ok(self.values.get(&index).cloned().unwrap_or_default())
    }

    /// Write the cell at a row-major linear index
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range; the grid is unchanged
    /// in that case.
    pub fn set_index(&mut self, index: usize, value: T) -> Result<()> {
        self.check_index(index)?;
        if value == T::default() {
            self.values.remove(&index);
        } else {
            self.values.insert(index, value);
        }
        Ok(())
    }

    /// Whether the cell at `(x, y)` holds a stored (non-default) value
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinates are out of range.
    pub fn has_value(&self, x: usize, y: usize) -> Result<bool> {
        let index = self.to_index(x, y)?;
        Ok(self.values.contains_key(&index))
    }

    /// Non-consuming probe: the stored value at `(x, y)`, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinates are out of range.
    pub fn try_get(&self, x: usize, y: usize) -> Result<Option<&T>> {
        let index = self.to_index(x, y)?;
        Ok(self.values.get(&index))
    }

    /// Remove the stored value at `(x, y)`, reporting whether one existed
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinates are out of range.
    pub fn remove(&mut self, x: usize, y: usize) -> Result<bool> {
        let index = self.to_index(x, y)?;
        Ok(self.values.remove(&index).is_some())
    }

    /// Iterate over every cell in row-major order, defaults included
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.width * self.height).map(|index| self.values.get(&index).cloned().unwrap_or_default())
    }

    /// Iterate over stored entries as `((x, y), value)` pairs
    ///
    /// Order is unspecified; only non-default cells appear.
    pub fn coordinate_entries(&self) -> impl Iterator<Item = ((usize, usize), &T)> + '_ {
        self.values
            .iter()
            .map(|(&index, value)| ((index % self.width, index / self.width), value))
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
