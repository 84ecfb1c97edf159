//! Immutable section assets

use crate::grid::Grid;

/// A fixed-size pre-authored tile asset placed at one grid intersection
///
/// Carries its tile geometry as a dense grid of tile ids plus the name it was
/// loaded under. Sections are immutable after construction; the stores hand
/// out shared references rather than copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    tiles: Grid<u16>,
}

impl Section {
    /// Build a section from its tile geometry
    pub fn new(name: impl Into<String>, tiles: Grid<u16>) -> Self {
        Self {
            name: name.into(),
            tiles,
        }
    }

    /// Name the section was loaded under (library-relative path)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Section width in tiles
    pub const fn width(&self) -> usize {
        self.tiles.width()
    }

    /// Section height in tiles
    pub const fn height(&self) -> usize {
        self.tiles.height()
    }

    /// Tile geometry, row-major
    pub const fn tiles(&self) -> &Grid<u16> {
        &self.tiles
    }
}
