//! Runtime constants and configurable defaults

/// Fixed seed for reproducible section selection
pub const DEFAULT_SEED: u64 = 42;

/// Extensions identifying archive-format section containers
pub const ARCHIVE_EXTENSIONS: &[&str] = &["zip", "sectlib"];

/// Magic bytes opening every binary section asset
pub const SECTION_MAGIC: [u8; 4] = *b"TSEC";

// Sanity bound against corrupt headers allocating absurd grids
/// Maximum accepted section dimension, in tiles
pub const MAX_SECTION_DIMENSION: usize = 1024;

/// Maximum accepted map dimension, in cells
pub const MAX_MAP_DIMENSION: usize = 4096;

/// Spinner refresh interval for progress display
pub const SPINNER_TICK_MS: u64 = 80;
