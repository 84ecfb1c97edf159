//! End-to-end conversion tests over synthetic images and in-memory libraries

use std::rc::Rc;
use tilestitch::Error;
use tilestitch::grid::Grid;
use tilestitch::library::database::{SectionChooser, SectionDatabase, SectionRegistry};
use tilestitch::library::section::Section;
use tilestitch::library::selector::IndexedSectionSelector;
use tilestitch::terrain::creator::TerrainCreator;
use tilestitch::terrain::labels::{SectionType, Symmetry, Terrain};

const SEA_RGB: [u8; 4] = [24, 60, 180, 255];
const GRASS_RGB: [u8; 4] = [52, 140, 49, 255];

/// 2x2-tile section filled with one tile id, so composed regions are
/// recognizable in the output
fn section(name: &str, fill: u16) -> Section {
    Section::new(name, Grid::from_cells(2, 2, vec![fill; 4]).unwrap())
}

/// Left half sea-colored, right half grass-colored
fn split_image() -> image::DynamicImage {
    let buffer = image::RgbaImage::from_fn(8, 8, |x, _y| {
        if x < 4 {
            image::Rgba(SEA_RGB)
        } else {
            image::Rgba(GRASS_RGB)
        }
    });
    image::DynamicImage::ImageRgba8(buffer)
}

/// The four patterns a 1x1-cell map of the split image requires, paired
/// with a distinguishing tile id
fn required_patterns() -> Vec<(SectionType, u16)> {
    let sea = Terrain::Sea;
    let grass = Terrain::Grass;
    let void = Terrain::Void;
    vec![
        (SectionType::new(sea, grass, sea, grass), 10),
        (SectionType::new(grass, void, grass, void), 20),
        (SectionType::new(sea, grass, void, void), 30),
        (SectionType::new(grass, void, void, void), 40),
    ]
}

fn full_database(seed: u64) -> SectionDatabase {
    let mut db = SectionDatabase::new(seed);
    for (pattern, fill) in required_patterns() {
        db.register_section(section(&format!("s{fill}"), fill), pattern);
    }
    db
}

#[test]
fn one_cell_map_composes_matching_corner_patterns() {
    // A 1x1-cell map uses a 2x2 intersection grid
    let mut creator =
        TerrainCreator::with_chooser(full_database(42), 2, 2, Symmetry::None).unwrap();
    let composed = creator.create_terrain_from(&split_image()).unwrap();

    // Four 2x2-tile sections stitched into a 4x4-tile map
    assert_eq!(composed.width(), 4);
    assert_eq!(composed.height(), 4);

    // Each quadrant carries the section registered for its quantized pattern
    assert_eq!(*composed.tiles().get(0, 0).unwrap(), 10);
    assert_eq!(*composed.tiles().get(3, 0).unwrap(), 20);
    assert_eq!(*composed.tiles().get(0, 3).unwrap(), 30);
    assert_eq!(*composed.tiles().get(3, 3).unwrap(), 40);
}

#[test]
fn fixed_seed_makes_runs_identical() {
    let run = || {
        let mut db = full_database(7);
        // Competing candidates force the tie-break to actually matter
        for (pattern, fill) in required_patterns() {
            db.register_section(section(&format!("alt{fill}"), fill + 1), pattern);
        }
        let mut creator = TerrainCreator::with_chooser(db, 2, 2, Symmetry::None).unwrap();
        creator.create_terrain_from(&split_image()).unwrap()
    };

    assert_eq!(run(), run());
}

#[test]
fn incomplete_library_fails_exact_but_not_fuzzy() {
    let missing = required_patterns()[2].0;

    let mut exact = SectionDatabase::new(5);
    let mut fuzzy = IndexedSectionSelector::new(5);
    for (pattern, fill) in required_patterns() {
        if pattern == missing {
            continue;
        }
        exact.register_section(section(&format!("s{fill}"), fill), pattern);
        fuzzy.register_section(section(&format!("s{fill}"), fill), pattern);
    }

    let mut exact_creator = TerrainCreator::with_chooser(exact, 2, 2, Symmetry::None).unwrap();
    assert!(matches!(
        exact_creator.create_terrain_from(&split_image()),
        Err(Error::NoSectionsOfType { section_type }) if section_type == missing
    ));

    let mut fuzzy_creator = TerrainCreator::with_chooser(fuzzy, 2, 2, Symmetry::None).unwrap();
    let composed = fuzzy_creator.create_terrain_from(&split_image()).unwrap();
    // Every intersection still resolved to some section
    assert_eq!(composed.width(), 4);
    assert_eq!(composed.height(), 4);
}

#[test]
fn empty_fuzzy_library_still_fails() {
    let selector = IndexedSectionSelector::new(1);
    let mut creator = TerrainCreator::with_chooser(selector, 2, 2, Symmetry::None).unwrap();
    assert!(matches!(
        creator.create_terrain_from(&split_image()),
        Err(Error::EmptyLibrary)
    ));
}

#[test]
fn boxed_chooser_behaves_like_the_concrete_store() {
    let chooser: Box<dyn SectionChooser> = Box::new(full_database(42));
    let mut creator = TerrainCreator::with_chooser(chooser, 2, 2, Symmetry::None).unwrap();
    let composed = creator.create_terrain_from(&split_image()).unwrap();
    assert_eq!(*composed.tiles().get(0, 0).unwrap(), 10);
}

#[test]
fn larger_maps_scale_the_section_grid() {
    // 3x2 cells -> 4x3 intersections; register a section for every pattern
    // the fuzzy store might need by seeding only uniform types
    let mut selector = IndexedSectionSelector::new(9);
    for (index, terrain) in [Terrain::Sea, Terrain::Grass].into_iter().enumerate() {
        selector.register_section(
            section(&format!("u{index}"), index as u16),
            SectionType::uniform(terrain),
        );
    }

    let mut creator = TerrainCreator::with_chooser(selector, 4, 3, Symmetry::None).unwrap();
    let composed = creator.create_terrain_from(&split_image()).unwrap();
    assert_eq!(composed.width(), 8);
    assert_eq!(composed.height(), 6);
}

#[test]
fn chosen_sections_are_shared_not_copied() {
    let mut db = SectionDatabase::new(2);
    let pattern = SectionType::uniform(Terrain::Sea);
    db.register_section(section("only", 1), pattern);

    let first = db.choose_section_of_type(pattern).unwrap();
    let second = db.choose_section_of_type(pattern).unwrap();
    assert!(Rc::ptr_eq(&first, &second));
}
