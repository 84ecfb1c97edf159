//! Library loading tests over temporary directories and archive containers

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tilestitch::Error;
use tilestitch::grid::Grid;
use tilestitch::io::section::write_section;
use tilestitch::library::config::{SectionConfig, SectionMapping, TypeRules};
use tilestitch::library::loader::{create_database_from, create_fuzzy_database_from};
use tilestitch::library::section::Section;
use tilestitch::terrain::labels::{SectionType, Terrain};

fn section_bytes(fill: u16) -> Vec<u8> {
    let section = Section::new("fixture", Grid::from_cells(2, 2, vec![fill; 4]).unwrap());
    let mut bytes = Vec::new();
    write_section(&mut bytes, &section).unwrap();
    bytes
}

fn write_asset(root: &Path, relative: &str, bytes: &[u8]) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, bytes).unwrap();
}

fn config(entries: &[(&str, SectionType)]) -> SectionConfig {
    SectionConfig {
        mappings: entries
            .iter()
            .map(|(path, section_type)| SectionMapping {
                section_type: *section_type,
                sections: vec![(*path).to_string()],
            })
            .collect(),
    }
}

#[test]
fn classified_assets_register_and_strays_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let sea = SectionType::uniform(Terrain::Sea);

    write_asset(dir.path(), "coast/sea.sect", &section_bytes(1));
    write_asset(dir.path(), "notes.txt", b"not a section");

    let config = config(&[("coast/sea.sect", sea)]);
    let db = create_database_from(dir.path(), &config, 42).unwrap();
    assert_eq!(db.section_count(), 1);
    assert_eq!(db.type_count(), 1);
}

#[test]
fn corrupt_matched_asset_aborts_the_load() {
    let dir = tempfile::tempdir().unwrap();
    write_asset(dir.path(), "bad.sect", b"garbage");

    let config = config(&[("bad.sect", SectionType::uniform(Terrain::Rock))]);
    let result = create_database_from(dir.path(), &config, 42);
    assert!(matches!(result, Err(Error::SectionFormat { .. })));
}

#[test]
fn archive_entries_register_under_internal_names() {
    let dir = tempfile::tempdir().unwrap();
    let archive_path = dir.path().join("coastpack.zip");

    let mut archive = zip::ZipWriter::new(File::create(&archive_path).unwrap());
    let options = zip::write::SimpleFileOptions::default();
    archive.start_file("coast/sea.sect", options).unwrap();
    archive.write_all(&section_bytes(3)).unwrap();
    archive.start_file("readme.txt", options).unwrap();
    archive.write_all(b"stray").unwrap();
    archive.finish().unwrap();

    // The rule names the entry's internal path, scoped to the container
    let config = config(&[("coast/sea.sect", SectionType::uniform(Terrain::Sea))]);
    let db = create_database_from(dir.path(), &config, 42).unwrap();
    assert_eq!(db.section_count(), 1);
}

#[test]
fn directory_and_archive_assets_load_together() {
    let dir = tempfile::tempdir().unwrap();
    let sea = SectionType::uniform(Terrain::Sea);
    let rock = SectionType::uniform(Terrain::Rock);

    write_asset(dir.path(), "plain/rock.sect", &section_bytes(1));

    let archive_path = dir.path().join("pack.sectlib");
    let mut archive = zip::ZipWriter::new(File::create(&archive_path).unwrap());
    archive
        .start_file("sea.sect", zip::write::SimpleFileOptions::default())
        .unwrap();
    archive.write_all(&section_bytes(2)).unwrap();
    archive.finish().unwrap();

    let config = config(&[("plain/rock.sect", rock), ("sea.sect", sea)]);
    let selector = create_fuzzy_database_from(dir.path(), &config, 42).unwrap();
    assert_eq!(selector.section_count(), 2);
}

#[test]
fn unreadable_archive_aborts_the_load() {
    let dir = tempfile::tempdir().unwrap();
    write_asset(dir.path(), "broken.zip", b"this is not an archive");

    let config = config(&[("anything.sect", SectionType::uniform(Terrain::Sea))]);
    let result = create_database_from(dir.path(), &config, 42);
    let error = result.unwrap_err();
    assert!(matches!(error, Error::Archive { .. }));
    // Errors name the actual container, not a placeholder path
    assert!(
        error.to_string().contains("broken.zip"),
        "unexpected message: {error}"
    );
}

#[test]
fn missing_library_root_names_the_directory() {
    let config = config(&[("a.sect", SectionType::uniform(Terrain::Sea))]);
    let error = create_database_from(Path::new("/nonexistent/library"), &config, 42).unwrap_err();
    assert!(matches!(error, Error::FileSystem { .. }));
    assert!(
        error.to_string().contains("/nonexistent/library"),
        "unexpected message: {error}"
    );
}

#[test]
fn config_file_round_trip_feeds_the_rules() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("sections.json");
    let original = config(&[("coast/sea.sect", SectionType::uniform(Terrain::Sea))]);
    fs::write(&config_path, serde_json::to_string(&original).unwrap()).unwrap();

    let parsed = SectionConfig::from_path(&config_path).unwrap();
    let rules = TypeRules::from_config(&parsed);
    assert_eq!(
        rules.classify(r"coast\sea.sect"),
        Some(SectionType::uniform(Terrain::Sea))
    );
}

#[test]
fn missing_config_file_is_an_error() {
    let result = SectionConfig::from_path(Path::new("/nonexistent/sections.json"));
    assert!(matches!(result, Err(Error::Config { .. })));
}
