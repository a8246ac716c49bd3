//! # Shape Generators
//!
//! Generators that append solids to a [`MeshStore`](crate::mesh::MeshStore):
//! - **revolution**: a radius profile swept around the host X axis, closed by
//!   a pole vertex at each end
//! - **polygon**: a flat outline extruded to a thickness along host Z
//!
//! Every generator validates its input first and only then writes, so an
//! `Err` leaves the store exactly as it was.

pub mod polygon;
pub mod revolution;


pub use polygon::{add_outline_mesh, add_polygon_mesh};
pub use revolution::{add_revolution_mesh, Placement, RadiusProfile, RevolutionParams};

use std::ops::Range;

/// Index ranges appended to the store by one generator call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedRange {
    /// Indices of the new vertices
    pub vertices: Range<u32>,
    /// Indices of the new normals
    pub normals: Range<u32>,
    /// Positions of the new faces in [`MeshStore::faces`](crate::mesh::MeshStore::faces)
    pub faces: Range<usize>,
}

impl GeneratedRange {
    /// Number of vertices written.
    pub fn vertex_count(&self) -> u32 {
        self.vertices.end - self.vertices.start
    }

    /// Number of normals written.
    pub fn normal_count(&self) -> u32 {
        self.normals.end - self.normals.start
    }

    /// Number of faces written.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}
