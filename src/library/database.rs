//! Exact section store with uniform-random tie-break

use crate::io::error::{Error, Result};
use crate::library::section::Section;
use crate::terrain::labels::SectionType;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::BTreeMap;
use std::rc::Rc;

/// Sink for sections discovered during library loading
pub trait SectionRegistry {
    /// Register one section under the pattern it satisfies
    fn register_section(&mut self, section: Section, section_type: SectionType);
}

/// Resolves a required pattern to a concrete section
pub trait SectionChooser {
    /// Choose a section satisfying the requested pattern
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot satisfy the request; see the
    /// implementations for their exact guarantees.
    fn choose_section_of_type(&mut self, section_type: SectionType) -> Result<Rc<Section>>;
}

impl SectionChooser for Box<dyn SectionChooser> {
    fn choose_section_of_type(&mut self, section_type: SectionType) -> Result<Rc<Section>> {
        (**self).choose_section_of_type(section_type)
    }
}

/// Exact store: pattern lookups must match a registered pattern
///
/// Selection among a pattern's candidates is uniformly random from an
/// injected seedable source, so runs with the same seed are reproducible.
/// A pattern with zero candidates is an error; this store makes the "exact
/// library" guarantee and never falls back.
#[derive(Debug)]
pub struct SectionDatabase {
    store: BTreeMap<SectionType, Vec<Rc<Section>>>,
    rng: StdRng,
}

impl SectionDatabase {
    /// Create an empty store with a deterministic random source
    pub fn new(seed: u64) -> Self {
        Self {
            store: BTreeMap::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Number of distinct registered patterns
    pub fn type_count(&self) -> usize {
        self.store.len()
    }

    /// Total number of registered sections
    pub fn section_count(&self) -> usize {
        self.store.values().map(Vec::len).sum()
    }
}

impl SectionRegistry for SectionDatabase {
    fn register_section(&mut self, section: Section, section_type: SectionType) {
        self.store
            .entry(section_type)
            .or_default()
            .push(Rc::new(section));
    }
}

impl SectionChooser for SectionDatabase {
    fn choose_section_of_type(&mut self, section_type: SectionType) -> Result<Rc<Section>> {
        let candidates = self
            .store
            .get(&section_type)
            .filter(|list| !list.is_empty())
            .ok_or(Error::NoSectionsOfType { section_type })?;
        let choice = self.rng.random_range(0..candidates.len());
        candidates
            .get(choice)
            .map(Rc::clone)
            .ok_or(Error::NoSectionsOfType { section_type })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::terrain::labels::Terrain;

    fn section(name: &str) -> Section {
        Section::new(name, Grid::<u16>::new(2, 2))
    }

    #[test]
    fn chosen_section_was_registered_under_that_type() {
        let grass = SectionType::uniform(Terrain::Grass);
        let sea = SectionType::uniform(Terrain::Sea);

        let mut db = SectionDatabase::new(1);
        db.register_section(section("grass-a"), grass);
        db.register_section(section("grass-b"), grass);
        db.register_section(section("sea-a"), sea);

        for _ in 0..20 {
            let chosen = db.choose_section_of_type(grass).unwrap();
            assert!(chosen.name().starts_with("grass"));
        }
    }

    #[test]
    fn unregistered_type_is_an_error() {
        let mut db = SectionDatabase::new(1);
        db.register_section(section("sea-a"), SectionType::uniform(Terrain::Sea));

        let missing = SectionType::uniform(Terrain::Rock);
        assert!(matches!(
            db.choose_section_of_type(missing),
            Err(Error::NoSectionsOfType { section_type }) if section_type == missing
        ));
    }

    #[test]
    fn identical_seeds_choose_identically() {
        let grass = SectionType::uniform(Terrain::Grass);
        let build = || {
            let mut db = SectionDatabase::new(7);
            for name in ["a", "b", "c", "d"] {
                db.register_section(section(name), grass);
            }
            db
        };

        let mut first = build();
        let mut second = build();
        for _ in 0..10 {
            assert_eq!(
                first.choose_section_of_type(grass).unwrap().name(),
                second.choose_section_of_type(grass).unwrap().name()
            );
        }
    }
}
