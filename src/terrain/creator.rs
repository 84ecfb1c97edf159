//! Terrain creation orchestrator

use crate::io::error::Result;
use crate::library::database::SectionChooser;
use crate::library::section::Section;
use crate::terrain::decider::{SectionDecider, SectionTypeLabeler, SectionTypeRealizer};
use crate::terrain::labels::Symmetry;
use crate::terrain::quantizer::MapQuantizer;
use crate::terrain::renderer::SectionGridRenderer;
use image::DynamicImage;

/// Composes quantize -> decide -> render into one terrain-creation call
///
/// The exact and fuzzy pipeline variants differ only in the store wired in
/// as `C`; the orchestration is identical, holds no state beyond its three
/// collaborators, and propagates any stage failure unchanged.
#[derive(Debug)]
pub struct TerrainCreator<C: SectionChooser> {
    quantizer: MapQuantizer,
    decider: SectionDecider<C>,
    renderer: SectionGridRenderer,
}

impl<C: SectionChooser> TerrainCreator<C> {
    /// Wire the three pipeline stages together
    pub const fn new(
        quantizer: MapQuantizer,
        decider: SectionDecider<C>,
        renderer: SectionGridRenderer,
    ) -> Self {
        Self {
            quantizer,
            decider,
            renderer,
        }
    }

    /// Build a creator around a section store
    ///
    /// `width` and `height` are intersection counts (map cells plus one).
    ///
    /// # Errors
    ///
    /// Returns an error if the grid dimensions are invalid.
    pub fn with_chooser(
        chooser: C,
        width: usize,
        height: usize,
        symmetry: Symmetry,
    ) -> Result<Self> {
        Ok(Self::new(
            MapQuantizer::new(width, height)?,
            SectionDecider::new(
                SectionTypeLabeler::new(symmetry),
                SectionTypeRealizer::new(chooser),
            ),
            SectionGridRenderer::new(),
        ))
    }

    /// Convert one image into one composed map section
    ///
    /// # Errors
    ///
    /// Propagates quantization, decision, and rendering failures unchanged;
    /// there are no retries.
    pub fn create_terrain_from(&mut self, image: &DynamicImage) -> Result<Section> {
        let terrain = self.quantizer.quantize(image)?;
        let sections = self.decider.decide(&terrain)?;
        self.renderer.render(&sections)
    }
}
