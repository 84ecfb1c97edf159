//! Section library: assets, classification, and candidate stores
//!
//! A library is a directory tree of section assets, optionally containing
//! archive containers read as virtual subtrees. The loader classifies each
//! asset via the user's config and registers it in either the exact store
//! ([`database::SectionDatabase`]) or the fuzzy store
//! ([`selector::IndexedSectionSelector`]).

/// Classification config and the path-to-type rule table
pub mod config;
/// Exact section store with uniform-random tie-break
pub mod database;
/// Library traversal and store population
pub mod loader;
/// Immutable section assets
pub mod section;
/// Fuzzy store supporting nearest-pattern retrieval
pub mod selector;
/// Polymorphic asset sources (filesystem and archive)
pub mod source;

pub use config::{SectionConfig, TypeRules};
pub use database::{SectionChooser, SectionDatabase, SectionRegistry};
pub use section::Section;
pub use selector::{CornerHamming, IndexedSectionSelector, TypeMetric};
