//! Fuzzy section store with nearest-pattern retrieval
//!
//! Trades strict edge correctness for completeness: every intersection still
//! resolves to some section even when the library lacks the exact pattern,
//! which is what lets sparse or incomplete libraries produce usable maps.

use crate::io::error::{Error, Result};
use crate::library::database::{SectionChooser, SectionRegistry};
use crate::library::section::Section;
use crate::terrain::labels::SectionType;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::BTreeMap;
use std::rc::Rc;

/// Distance between two corner patterns
///
/// Pluggable so the notion of "closest" can evolve independently of the
/// store; lower is closer, zero means the patterns are interchangeable.
pub trait TypeMetric {
    /// Distance from the requested pattern to a registered one
    fn distance(&self, requested: &SectionType, registered: &SectionType) -> u32;
}

/// Count of mismatching corner labels (Hamming distance over corners)
#[derive(Debug, Clone, Copy, Default)]
pub struct CornerHamming;

impl TypeMetric for CornerHamming {
    fn distance(&self, requested: &SectionType, registered: &SectionType) -> u32 {
        requested
            .corners()
            .iter()
            .zip(registered.corners().iter())
            .filter(|(a, b)| a != b)
            .count() as u32
    }
}

/// Store answering "closest registered pattern" queries
///
/// Exact candidates are preferred; otherwise the nearest registered pattern
/// under the metric is used, with ties among equally-close patterns broken
/// uniformly at random. Fails only when nothing is registered at all.
#[derive(Debug)]
pub struct IndexedSectionSelector<M = CornerHamming> {
    store: BTreeMap<SectionType, Vec<Rc<Section>>>,
    metric: M,
    rng: StdRng,
}

impl IndexedSectionSelector<CornerHamming> {
    /// Create an empty selector with the default corner metric
    pub fn new(seed: u64) -> Self {
        Self::with_metric(CornerHamming, seed)
    }
}

impl<M: TypeMetric> IndexedSectionSelector<M> {
    /// Create an empty selector with a custom metric
    pub fn with_metric(metric: M, seed: u64) -> Self {
        Self {
            store: BTreeMap::new(),
            metric,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Total number of registered sections
    pub fn section_count(&self) -> usize {
        self.store.values().map(Vec::len).sum()
    }

    /// All registered patterns at minimum distance from the request
    ///
    /// Returns the tied patterns in store order together with their common
    /// distance, or `None` when the store is empty. Distance zero means an
    /// exact candidate exists.
    pub fn nearest_types(&self, requested: &SectionType) -> Option<(Vec<SectionType>, u32)> {
        let mut best_distance = u32::MAX;
        let mut candidates = Vec::new();
        for registered in self.store.keys() {
            let distance = self.metric.distance(requested, registered);
            if distance < best_distance {
                best_distance = distance;
                candidates.clear();
            }
            if distance == best_distance {
                candidates.push(*registered);
            }
        }
        if candidates.is_empty() {
            return None;
        }
        Some((candidates, best_distance))
    }
}

impl<M: TypeMetric> SectionRegistry for IndexedSectionSelector<M> {
    fn register_section(&mut self, section: Section, section_type: SectionType) {
        self.store
            .entry(section_type)
            .or_default()
            .push(Rc::new(section));
    }
}

impl<M: TypeMetric> SectionChooser for IndexedSectionSelector<M> {
    fn choose_section_of_type(&mut self, section_type: SectionType) -> Result<Rc<Section>> {
        let resolved = if self.store.contains_key(&section_type) {
            section_type
        } else {
            let (candidates, _) = self
                .nearest_types(&section_type)
                .ok_or(Error::EmptyLibrary)?;
            let pick = self.rng.random_range(0..candidates.len());
            candidates.get(pick).copied().ok_or(Error::EmptyLibrary)?
        };

        let list = self
            .store
            .get(&resolved)
            .filter(|list| !list.is_empty())
            .ok_or(Error::EmptyLibrary)?;
        let choice = self.rng.random_range(0..list.len());
        list.get(choice).map(Rc::clone).ok_or(Error::EmptyLibrary)
    }
}
