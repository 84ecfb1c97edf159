//! Classification config and the path-to-type rule table
//!
//! The config file declares, per corner pattern, the library-relative asset
//! paths classified as that pattern. Parsing happens once here; the loader
//! only ever sees the resulting pure [`TypeRules`] classifier.

use crate::io::error::{Error, Result};
use crate::terrain::labels::SectionType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One pattern and the asset paths classified as it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionMapping {
    /// The corner pattern these assets satisfy
    #[serde(rename = "type")]
    pub section_type: SectionType,
    /// Library-relative asset paths
    pub sections: Vec<String>,
}

/// Declarative mapping from asset identities to section types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionConfig {
    /// All declared classifications
    pub mappings: Vec<SectionMapping>,
}

impl SectionConfig {
    /// Parse a config from a JSON stream
    ///
    /// # Errors
    ///
    /// Returns an error if the stream is not valid config JSON.
    pub fn from_reader(path: &Path, reader: impl Read) -> Result<Self> {
        serde_json::from_reader(reader).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Parse a config file
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, or malformed.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_reader(path, file)
    }
}

/// Pure `path -> Option<SectionType>` classifier built once from a config
///
/// Paths are canonicalized (backslashes become slashes) before lookup, so
/// rules written on any platform match assets enumerated on any other.
#[derive(Debug, Clone)]
pub struct TypeRules {
    rules: HashMap<String, SectionType>,
}

impl TypeRules {
    /// Build the rule table from a parsed config
    ///
    /// Later mappings win when two rules name the same path.
    pub fn from_config(config: &SectionConfig) -> Self {
        let mut rules = HashMap::new();
        for mapping in &config.mappings {
            for path in &mapping.sections {
                rules.insert(normalize_path(path), mapping.section_type);
            }
        }
        Self { rules }
    }

    /// Classify an asset path, if any rule covers it
    pub fn classify(&self, path: &str) -> Option<SectionType> {
        self.rules.get(&normalize_path(path)).copied()
    }

    /// Number of classified asset paths
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table classifies nothing
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::labels::Terrain;

    fn config_with(path: &str) -> SectionConfig {
        SectionConfig {
            mappings: vec![SectionMapping {
                section_type: SectionType::uniform(Terrain::Grass),
                sections: vec![path.to_string()],
            }],
        }
    }

    #[test]
    fn separator_style_does_not_affect_classification() {
        let rules = TypeRules::from_config(&config_with(r"sections\grass\flat.sect"));
        let expected = Some(SectionType::uniform(Terrain::Grass));
        assert_eq!(rules.classify("sections/grass/flat.sect"), expected);
        assert_eq!(rules.classify(r"sections\grass\flat.sect"), expected);
    }

    #[test]
    fn unknown_paths_are_unclassified() {
        let rules = TypeRules::from_config(&config_with("a.sect"));
        assert_eq!(rules.classify("b.sect"), None);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = config_with("a.sect");
        let json = serde_json::to_string(&config).unwrap();
        let parsed = SectionConfig::from_reader(Path::new("inline"), json.as_bytes()).unwrap();
        let rules = TypeRules::from_config(&parsed);
        assert_eq!(
            rules.classify("a.sect"),
            Some(SectionType::uniform(Terrain::Grass))
        );
    }

    #[test]
    fn malformed_json_reports_config_error() {
        let result = SectionConfig::from_reader(Path::new("inline"), "{nope".as_bytes());
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
