//! Composition of a section grid into one output section

use crate::grid::Grid;
use crate::io::error::{Error, Result};
use crate::library::section::Section;
use crate::terrain::decider::SectionGrid;

/// Name carried by the composed output section
const COMPOSED_NAME: &str = "terrain";

/// Stitches chosen sections into one composed map section
///
/// All chosen sections must share the same tile dimensions; each one is
/// copied into its region of the output, left to right and top to bottom.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionGridRenderer;

impl SectionGridRenderer {
    /// Create a renderer
    pub const fn new() -> Self {
        Self
    }

    /// Compose the section grid into one output section
    ///
    /// # Errors
    ///
    /// Returns an error if any section's tile dimensions differ from the
    /// first section's.
    pub fn render(&self, sections: &SectionGrid) -> Result<Section> {
        let first = sections.get(0, 0)?;
        let (section_width, section_height) = (first.width(), first.height());

        for section in sections {
            if section.width() != section_width || section.height() != section_height {
                return Err(Error::SectionSizeMismatch {
                    name: section.name().to_string(),
                    expected: (section_width, section_height),
                    actual: (section.width(), section.height()),
                });
            }
        }

        let mut tiles = Grid::<u16>::new(
            sections.width() * section_width,
            sections.height() * section_height,
        );

        for grid_y in 0..sections.height() {
            for grid_x in 0..sections.width() {
                let section = sections.get(grid_x, grid_y)?;
                for tile_y in 0..section_height {
                    for tile_x in 0..section_width {
                        let tile = *section.tiles().get(tile_x, tile_y)?;
                        tiles.set(
                            grid_x * section_width + tile_x,
                            grid_y * section_height + tile_y,
                            tile,
                        )?;
                    }
                }
            }
        }

        Ok(Section::new(COMPOSED_NAME, tiles))
    }
}
