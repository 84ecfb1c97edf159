//! Library traversal and store population
//!
//! Walks a library root, opening archive containers transparently, and
//! registers every asset the classification rules cover. Loading is
//! fail-fast: one unreadable container or corrupt asset aborts the load,
//! since a creator holding a partial library is not ready to run. Assets
//! with no matching rule are skipped on purpose; libraries routinely carry
//! unrelated files.

use crate::io::configuration::ARCHIVE_EXTENSIONS;
use crate::io::error::Result;
use crate::io::section::{BinarySectionReader, SectionReader};
use crate::library::config::{SectionConfig, TypeRules};
use crate::library::database::{SectionDatabase, SectionRegistry};
use crate::library::selector::IndexedSectionSelector;
use crate::library::source::{AssetSource, DirAssetSource, ZipAssetSource};
use std::path::Path;

/// Populates a section store from a library root
pub struct SectionLibraryLoader<R: SectionReader> {
    reader: R,
}

impl<R: SectionReader> SectionLibraryLoader<R> {
    /// Create a loader decoding assets with the given reader
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Register every classified asset under `root` into the store
    ///
    /// Archive containers found in the tree are enumerated as virtual
    /// subtrees; their internal entry names are matched against the rules
    /// scoped to the container. Returns the number of sections registered.
    ///
    /// # Errors
    ///
    /// Returns an error if the tree cannot be walked, a container cannot be
    /// opened, or any matched asset fails to decode.
    pub fn populate<D: SectionRegistry>(
        &self,
        store: &mut D,
        root: &Path,
        rules: &TypeRules,
    ) -> Result<usize> {
        let mut source = DirAssetSource::new(root);
        let mut registered = 0;
        for entry in source.entries()? {
            if has_archive_extension(&entry) {
                let mut container = ZipAssetSource::open_path(&root.join(&entry))?;
                registered += self.register_matches(store, &mut container, rules)?;
            } else if let Some(section_type) = rules.classify(&entry) {
                let mut data = source.open(&entry)?;
                let section = self.reader.read(&entry, data.as_mut())?;
                store.register_section(section, section_type);
                registered += 1;
            }
        }
        Ok(registered)
    }

    // Container-agnostic half of the traversal: everything after entry
    // enumeration works the same for directories and archives.
    fn register_matches<D: SectionRegistry>(
        &self,
        store: &mut D,
        source: &mut dyn AssetSource,
        rules: &TypeRules,
    ) -> Result<usize> {
        let mut registered = 0;
        for entry in source.entries()? {
            if let Some(section_type) = rules.classify(&entry) {
                let mut data = source.open(&entry)?;
                let section = self.reader.read(&entry, data.as_mut())?;
                store.register_section(section, section_type);
                registered += 1;
            }
        }
        Ok(registered)
    }
}

/// Build an exact store from a library root and config
///
/// # Errors
///
/// Returns an error if the library cannot be loaded; no partial store is
/// ever returned.
pub fn create_database_from(root: &Path, config: &SectionConfig, seed: u64) -> Result<SectionDatabase> {
    let mut database = SectionDatabase::new(seed);
    let loader = SectionLibraryLoader::new(BinarySectionReader::new());
    loader.populate(&mut database, root, &TypeRules::from_config(config))?;
    Ok(database)
}

/// Build a fuzzy store from a library root and config
///
/// # Errors
///
/// Returns an error if the library cannot be loaded; no partial store is
/// ever returned.
pub fn create_fuzzy_database_from(
    root: &Path,
    config: &SectionConfig,
    seed: u64,
) -> Result<IndexedSectionSelector> {
    let mut selector = IndexedSectionSelector::new(seed);
    let loader = SectionLibraryLoader::new(BinarySectionReader::new());
    loader.populate(&mut selector, root, &TypeRules::from_config(config))?;
    Ok(selector)
}

fn has_archive_extension(entry: &str) -> bool {
    Path::new(entry)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ARCHIVE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}
