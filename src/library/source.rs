//! Polymorphic asset sources
//!
//! Library traversal is container-agnostic: a source enumerates entry names
//! and opens entries for reading, whether the entries live on the filesystem
//! or inside an archive container.

use crate::io::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use zip::ZipArchive;

/// A tree of readable assets addressed by relative entry name
///
/// Entry names always use `/` separators regardless of platform or backing
/// store, matching the canonical form used by the classification rules.
pub trait AssetSource {
    /// All file entries in the source, sorted for deterministic traversal
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be enumerated.
    fn entries(&mut self) -> Result<Vec<String>>;

    /// Open one entry for reading
    ///
    /// # Errors
    ///
    /// Returns an error if the entry does not exist or cannot be opened.
    fn open(&mut self, entry: &str) -> Result<Box<dyn Read + '_>>;
}

/// Filesystem directory tree as an asset source
#[derive(Debug, Clone)]
pub struct DirAssetSource {
    root: PathBuf,
}

impl DirAssetSource {
    /// Create a source rooted at a directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn collect(&self, dir: &Path, entries: &mut Vec<String>) -> Result<()> {
        let read_dir = std::fs::read_dir(dir).map_err(|e| Error::FileSystem {
            path: dir.to_path_buf(),
            operation: "read directory",
            source: e,
        })?;
        for entry in read_dir {
            let entry = entry.map_err(|e| Error::FileSystem {
                path: dir.to_path_buf(),
                operation: "read directory entry",
                source: e,
            })?;
            let path = entry.path();
            if path.is_dir() {
                self.collect(&path, entries)?;
            } else if let Ok(relative) = path.strip_prefix(&self.root) {
                entries.push(relative.to_string_lossy().replace('\\', "/"));
            }
        }
        Ok(())
    }
}

impl AssetSource for DirAssetSource {
    fn entries(&mut self) -> Result<Vec<String>> {
        let mut entries = Vec::new();
        self.collect(&self.root.clone(), &mut entries)?;
        entries.sort();
        Ok(entries)
    }

    fn open(&mut self, entry: &str) -> Result<Box<dyn Read + '_>> {
        let path = self.root.join(entry);
        let file = File::open(&path).map_err(|e| Error::FileSystem {
            path,
            operation: "open asset",
            source: e,
        })?;
        Ok(Box::new(file))
    }
}

/// Zip archive container as an asset source
///
/// Entry names are the archive's internal paths, scoped to this container.
pub struct ZipAssetSource {
    path: PathBuf,
    archive: ZipArchive<File>,
}

impl ZipAssetSource {
    /// Open an archive container
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or is not a readable
    /// archive.
    pub fn open_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| Error::FileSystem {
            path: path.to_path_buf(),
            operation: "open archive",
            source: e,
        })?;
        let archive = ZipArchive::new(file).map_err(|e| Error::Archive {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            archive,
        })
    }
}

impl AssetSource for ZipAssetSource {
    fn entries(&mut self) -> Result<Vec<String>> {
        let mut entries: Vec<String> = self
            .archive
            .file_names()
            .filter(|name| !name.ends_with('/'))
            .map(str::to_string)
            .collect();
        entries.sort();
        Ok(entries)
    }

    fn open(&mut self, entry: &str) -> Result<Box<dyn Read + '_>> {
        let path = self.path.clone();
        let file = self
            .archive
            .by_name(entry)
            .map_err(|e| Error::Archive { path, source: e })?;
        Ok(Box::new(file))
    }
}
