//! Section-type decision: labeling intersections and realizing sections
//!
//! The labeler turns a terrain grid into the grid of corner patterns the map
//! requires; the realizer resolves each pattern against the wired store.
//! Terrain labels sit on intersections, so the pattern at `(x, y)` reads the
//! 2x2 label block anchored there, with the `Void` sentinel standing in for
//! labels beyond the bottom and right map borders. Horizontally or
//! vertically adjacent sections therefore share their boundary labels
//! literally, which is what makes stitched edges agree.

use crate::grid::Grid;
use crate::io::error::Result;
use crate::library::database::SectionChooser;
use crate::library::section::Section;
use crate::terrain::labels::{SectionType, Symmetry, Terrain};
use std::rc::Rc;

/// Grid of chosen sections, one per intersection
pub type SectionGrid = Grid<Rc<Section>>;

/// Derives the required corner pattern for every intersection
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionTypeLabeler {
    symmetry: Symmetry,
}

impl SectionTypeLabeler {
    /// Create a labeler with the given symmetry policy
    pub const fn new(symmetry: Symmetry) -> Self {
        Self { symmetry }
    }

    /// Produce the pattern grid for a terrain grid
    ///
    /// # Errors
    ///
    /// Returns an error only on internal grid access failure.
    pub fn label(&self, terrain: &Grid<Terrain>) -> Result<Grid<SectionType>> {
        let width = terrain.width();
        let height = terrain.height();
        let mut patterns = Vec::with_capacity(width * height);

        for y in 0..height {
            for x in 0..width {
                let pattern = SectionType::new(
                    label_at(terrain, x, y)?,
                    label_at(terrain, x + 1, y)?,
                    label_at(terrain, x, y + 1)?,
                    label_at(terrain, x + 1, y + 1)?,
                );
                patterns.push(self.symmetry.apply(pattern));
            }
        }

        Grid::from_cells(width, height, patterns)
    }
}

fn label_at(terrain: &Grid<Terrain>, x: usize, y: usize) -> Result<Terrain> {
    if x >= terrain.width() || y >= terrain.height() {
        return Ok(Terrain::Void);
    }
    terrain.get(x, y).copied()
}

/// Resolves required patterns to concrete sections via the wired store
#[derive(Debug)]
pub struct SectionTypeRealizer<C: SectionChooser> {
    chooser: C,
}

impl<C: SectionChooser> SectionTypeRealizer<C> {
    /// Create a realizer over a section store
    pub const fn new(chooser: C) -> Self {
        Self { chooser }
    }

    /// Resolve every pattern in the grid
    ///
    /// # Errors
    ///
    /// Propagates the store's resolution failure: with the exact store, any
    /// unregistered pattern; with the fuzzy store, only an empty library.
    pub fn realize(&mut self, patterns: &Grid<SectionType>) -> Result<SectionGrid> {
        let mut sections = Vec::with_capacity(patterns.width() * patterns.height());
        for pattern in patterns {
            sections.push(self.chooser.choose_section_of_type(*pattern)?);
        }
        Grid::from_cells(patterns.width(), patterns.height(), sections)
    }
}

/// Labeler and realizer composed: terrain grid in, section grid out
#[derive(Debug)]
pub struct SectionDecider<C: SectionChooser> {
    labeler: SectionTypeLabeler,
    realizer: SectionTypeRealizer<C>,
}

impl<C: SectionChooser> SectionDecider<C> {
    /// Compose a labeler and realizer
    pub const fn new(labeler: SectionTypeLabeler, realizer: SectionTypeRealizer<C>) -> Self {
        Self { labeler, realizer }
    }

    /// Decide the section for every intersection of the terrain grid
    ///
    /// # Errors
    ///
    /// Propagates labeling and resolution failures unchanged.
    pub fn decide(&mut self, terrain: &Grid<Terrain>) -> Result<SectionGrid> {
        let patterns = self.labeler.label(terrain)?;
        self.realizer.realize(&patterns)
    }
}
