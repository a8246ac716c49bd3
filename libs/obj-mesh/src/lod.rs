//! # Level of Detail
//!
//! Maps the host's single tessellation knob onto side and stack counts.

use crate::error::MeshError;
use config::constants::{LOD_HIGH, LOD_LOW, LOD_NORMAL, MIN_RECOMMENDED_LOD, MIN_SIDES, MIN_STACKS};
use serde::{Deserialize, Serialize};

/// Tessellation density chosen by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LevelOfDetail {
    Low,
    #[default]
    Normal,
    High,
    /// Any other value; even and at least 6 is recommended
    Custom(u32),
}

impl LevelOfDetail {
    /// Returns the raw level-of-detail value.
    pub fn value(self) -> u32 {
        match self {
            Self::Low => LOD_LOW,
            Self::Normal => LOD_NORMAL,
            Self::High => LOD_HIGH,
            Self::Custom(value) => value,
        }
    }
}

/// Side and stack counts of a revolved solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tessellation {
    /// Vertices per ring
    pub sides: u32,
    /// Axial increments between the two poles
    pub stacks: u32,
}

impl Tessellation {
    /// Creates a tessellation, rejecting counts that cannot close a solid.
    pub fn new(sides: u32, stacks: u32) -> Result<Self, MeshError> {
        if sides < MIN_SIDES || stacks < MIN_STACKS {
            return Err(MeshError::invalid_tessellation(sides, stacks));
        }
        Ok(Self { sides, stacks })
    }

    /// Maps a level of detail to `sides = stacks = lod / 2`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use obj_mesh::lod::{LevelOfDetail, Tessellation};
    ///
    /// let t = Tessellation::from_level_of_detail(LevelOfDetail::Custom(8)).unwrap();
    /// assert_eq!((t.sides, t.stacks), (4, 4));
    /// ```
    pub fn from_level_of_detail(lod: LevelOfDetail) -> Result<Self, MeshError> {
        let value = lod.value();
        if value % 2 != 0 || value < MIN_RECOMMENDED_LOD {
            log::warn!(
                "level of detail {value} is odd or below {MIN_RECOMMENDED_LOD}; tessellation may be uneven"
            );
        }
        let half = value / 2;
        Self::new(half, half)
    }

    /// Vertices (and normals) emitted per revolved instance.
    ///
    /// Two poles plus `stacks - 1` rings of `sides` vertices.
    pub fn vertices_per_instance(self) -> u32 {
        2 + (self.stacks - 1) * self.sides
    }

    /// Faces emitted per revolved instance.
    ///
    /// Two fans of `sides` triangles plus `stacks - 2` bands of quads.
    pub fn faces_per_instance(self) -> u32 {
        2 * self.sides + (self.stacks - 2) * self.sides
    }
}
