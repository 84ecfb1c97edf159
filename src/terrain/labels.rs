//! Terrain labels and the corner patterns that drive section matching

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete terrain label assigned to one grid intersection
///
/// `Void` is the out-of-map sentinel used for neighbors beyond the map
/// border; it never appears in the quantization palette.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Terrain {
    /// Outside the map border
    #[default]
    Void,
    /// Open water
    Sea,
    /// Shoreline and beaches
    Sand,
    /// Grassland
    Grass,
    /// Bare rock and cliffs
    Rock,
}

impl Terrain {
    /// Reference colors used to classify quantized image regions
    ///
    /// `Void` is deliberately absent: the sentinel can never be produced by
    /// quantization, only by the labeler at map borders.
    pub const PALETTE: [(Self, [u8; 3]); 4] = [
        (Self::Sea, [24, 60, 180]),
        (Self::Sand, [219, 201, 141]),
        (Self::Grass, [52, 140, 49]),
        (Self::Rock, [128, 128, 128]),
    ];
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Void => "void",
            Self::Sea => "sea",
            Self::Sand => "sand",
            Self::Grass => "grass",
            Self::Rock => "rock",
        };
        f.write_str(name)
    }
}

/// Corner pattern a section must satisfy to sit at a grid intersection
///
/// Equality drives exact-match lookup in the section stores; the ordering is
/// arbitrary but total, which keeps store iteration deterministic.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SectionType {
    /// Terrain at the section's top-left corner
    pub top_left: Terrain,
    /// Terrain at the section's top-right corner
    pub top_right: Terrain,
    /// Terrain at the section's bottom-left corner
    pub bottom_left: Terrain,
    /// Terrain at the section's bottom-right corner
    pub bottom_right: Terrain,
}

impl SectionType {
    /// Build a pattern from its four corner labels
    pub const fn new(
        top_left: Terrain,
        top_right: Terrain,
        bottom_left: Terrain,
        bottom_right: Terrain,
    ) -> Self {
        Self {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }

    /// Pattern with the same label at all four corners
    pub const fn uniform(terrain: Terrain) -> Self {
        Self::new(terrain, terrain, terrain, terrain)
    }

    /// Corners in reading order: top-left, top-right, bottom-left, bottom-right
    pub const fn corners(&self) -> [Terrain; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
        ]
    }

    /// Pattern rotated 90 degrees clockwise
    pub const fn rotated(&self) -> Self {
        Self::new(
            self.bottom_left,
            self.top_left,
            self.bottom_right,
            self.top_right,
        )
    }

    /// Pattern mirrored across the vertical axis
    pub const fn mirrored(&self) -> Self {
        Self::new(
            self.top_right,
            self.top_left,
            self.bottom_right,
            self.bottom_left,
        )
    }

    /// Lexicographic minimum over all eight rotations and reflections
    pub fn dihedral_canonical(&self) -> Self {
        let mut best = *self;
        let mut current = *self;
        for flip in 0..2 {
            if flip == 1 {
                current = self.mirrored();
            }
            for _ in 0..4 {
                current = current.rotated();
                if current < best {
                    best = current;
                }
            }
        }
        best
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} {} / {} {}]",
            self.top_left, self.top_right, self.bottom_left, self.bottom_right
        )
    }
}

/// Policy deciding which corner patterns the library treats as interchangeable
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Symmetry {
    /// Every orientation is a distinct pattern
    #[default]
    None,
    /// Rotations and reflections collapse to one canonical pattern
    Dihedral,
}

impl Symmetry {
    /// Canonicalize a pattern under this policy
    pub fn apply(self, section_type: SectionType) -> SectionType {
        match self {
            Self::None => section_type,
            Self::Dihedral => section_type.dihedral_canonical(),
        }
    }
}
