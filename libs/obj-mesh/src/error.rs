//! # Mesh Errors
//!
//! Error types for mesh generation operations.
//!
//! Only structural input errors are reported. Degenerate numbers (zero radius,
//! zero thickness, collinear points) produce degenerate but well-formed
//! geometry instead.

use thiserror::Error;

/// Errors that can occur before a generator writes to the mesh store.
///
/// Every variant is raised during validation, so a generator returning an
/// error has left the store unmodified.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Outline X and Y coordinate arrays differ in length
    #[error("Outline coordinate arrays differ in length: x={x_len}, y={y_len}")]
    MismatchedOutline { x_len: usize, y_len: usize },

    /// Not enough points to form a polygon
    #[error("At least {min} points are required to create a polygon, got {count}")]
    TooFewPoints { count: usize, min: usize },

    /// Outline repeats its first point at the end
    #[error("The first and last outline points must be different")]
    ClosedOutline,

    /// Tessellation too coarse to close a revolved solid
    #[error("Invalid tessellation: sides={sides} (min 3), stacks={stacks} (min 2)")]
    InvalidTessellation { sides: u32, stacks: u32 },

    /// Axial length is not a finite number
    #[error("Axial length must be finite: {length}")]
    InvalidLength { length: f64 },
}

impl MeshError {
    /// Creates a mismatched outline error.
    pub fn mismatched_outline(x_len: usize, y_len: usize) -> Self {
        Self::MismatchedOutline { x_len, y_len }
    }

    /// Creates a too-few-points error.
    pub fn too_few_points(count: usize, min: usize) -> Self {
        Self::TooFewPoints { count, min }
    }

    /// Creates an invalid tessellation error.
    pub fn invalid_tessellation(sides: u32, stacks: u32) -> Self {
        Self::InvalidTessellation { sides, stacks }
    }
}
