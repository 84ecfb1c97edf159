//! Binary section format reader and writer
//!
//! On-disk layout: 4 magic bytes, little-endian u16 width and height in
//! tiles, then `width * height` little-endian u16 tile ids in row-major
//! order. This stands in for the game's proprietary section container; the
//! pipeline only touches it through the [`SectionReader`] seam.

use crate::grid::Grid;
use crate::io::configuration::{MAX_SECTION_DIMENSION, SECTION_MAGIC};
use crate::io::error::{Error, Result};
use crate::library::section::Section;
use std::io::{Read, Write};

/// Decodes section assets from a byte stream
///
/// The loader is generic over this trait so libraries in other formats only
/// need a new reader, not a new loader.
pub trait SectionReader {
    /// Decode one section
    ///
    /// `name` identifies the asset for error messages and becomes the
    /// section's name.
    ///
    /// # Errors
    ///
    /// Returns an error if the stream ends early or the data is malformed.
    fn read(&self, name: &str, input: &mut dyn Read) -> Result<Section>;
}

/// Reader for the native binary section format
#[derive(Debug, Clone, Copy, Default)]
pub struct BinarySectionReader;

impl BinarySectionReader {
    /// Create a reader
    pub const fn new() -> Self {
        Self
    }
}

impl SectionReader for BinarySectionReader {
    fn read(&self, name: &str, input: &mut dyn Read) -> Result<Section> {
        let mut magic = [0u8; 4];
        read_bytes(input, &mut magic, name)?;
        if magic != SECTION_MAGIC {
            return Err(Error::SectionFormat {
                name: name.to_string(),
                reason: format!("bad magic {magic:?}"),
            });
        }

        let width = read_u16(input, name)? as usize;
        let height = read_u16(input, name)? as usize;
        if width == 0 || height == 0 {
            return Err(Error::SectionFormat {
                name: name.to_string(),
                reason: format!("empty dimensions {width}x{height}"),
            });
        }
        if width > MAX_SECTION_DIMENSION || height > MAX_SECTION_DIMENSION {
            return Err(Error::SectionFormat {
                name: name.to_string(),
                reason: format!(
                    "dimensions {width}x{height} exceed the {MAX_SECTION_DIMENSION} tile limit"
                ),
            });
        }

        let mut tiles = Vec::with_capacity(width * height);
        for _ in 0..width * height {
            tiles.push(read_u16(input, name)?);
        }

        let grid = Grid::from_cells(width, height, tiles)?;
        Ok(Section::new(name, grid))
    }
}

/// Serialize a section in the native binary format
///
/// # Errors
///
/// Returns an error if the section exceeds the format's u16 dimension range
/// or the underlying write fails.
pub fn write_section(output: &mut dyn Write, section: &Section) -> Result<()> {
    let width = u16::try_from(section.width()).map_err(|_| Error::SectionFormat {
        name: section.name().to_string(),
        reason: format!("width {} does not fit the format", section.width()),
    })?;
    let height = u16::try_from(section.height()).map_err(|_| Error::SectionFormat {
        name: section.name().to_string(),
        reason: format!("height {} does not fit the format", section.height()),
    })?;

    let write_failure = |source| Error::FileSystem {
        path: section.name().into(),
        operation: "write section",
        source,
    };

    output.write_all(&SECTION_MAGIC).map_err(write_failure)?;
    output.write_all(&width.to_le_bytes()).map_err(write_failure)?;
    output
        .write_all(&height.to_le_bytes())
        .map_err(write_failure)?;
    for tile in section.tiles() {
        output.write_all(&tile.to_le_bytes()).map_err(write_failure)?;
    }
    Ok(())
}

fn read_bytes(input: &mut dyn Read, buf: &mut [u8], name: &str) -> Result<()> {
    input.read_exact(buf).map_err(|e| Error::SectionFormat {
        name: name.to_string(),
        reason: format!("truncated data: {e}"),
    })
}

fn read_u16(input: &mut dyn Read, name: &str) -> Result<u16> {
    let mut buf = [0u8; 2];
    read_bytes(input, &mut buf, name)?;
    Ok(u16::from_le_bytes(buf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sample_section() -> Section {
        let tiles = Grid::from_cells(2, 2, vec![10, 11, 12, 13]).unwrap();
        Section::new("lib/sample.sect", tiles)
    }

    #[test]
    fn round_trip_preserves_geometry() {
        let section = sample_section();
        let mut bytes = Vec::new();
        write_section(&mut bytes, &section).unwrap();

        let decoded = BinarySectionReader::new()
            .read("lib/sample.sect", &mut Cursor::new(bytes))
            .unwrap();
        assert_eq!(decoded, section);
    }

    #[test]
    fn bad_magic_is_rejected() {
        let result =
            BinarySectionReader::new().read("x", &mut Cursor::new(b"NOPE\x01\x00\x01\x00\x00\x00"));
        assert!(matches!(result, Err(Error::SectionFormat { .. })));
    }

    #[test]
    fn truncated_tile_data_is_rejected() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&SECTION_MAGIC);
        bytes.extend_from_slice(&2u16.to_le_bytes());
        bytes.extend_from_slice(&2u16.to_le_bytes());
        bytes.extend_from_slice(&7u16.to_le_bytes()); // one of four tiles

        let result = BinarySectionReader::new().read("short", &mut Cursor::new(bytes));
        assert!(matches!(result, Err(Error::SectionFormat { .. })));
    }

    #[test]
    fn empty_dimensions_are_rejected() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&SECTION_MAGIC);
        bytes.extend_from_slice(&0u16.to_le_bytes());
        bytes.extend_from_slice(&3u16.to_le_bytes());

        let result = BinarySectionReader::new().read("empty", &mut Cursor::new(bytes));
        assert!(matches!(result, Err(Error::SectionFormat { .. })));
    }
}
