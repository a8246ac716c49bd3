//! # Coordinate Transform
//!
//! Maps host coordinates (axial direction along +X) into the mesh store's
//! coordinate system.
//!
//! Points and directions go through different operations: points receive the
//! origin offset, directions never do. Passing a normal through
//! [`CoordTransform::convert_loc`] shifts it by the origin offset and corrupts
//! shading.

use glam::{DMat3, DVec3};

/// Host-to-container coordinate mapping.
pub trait CoordTransform {
    /// Maps a host-space point to container space, origin offset included.
    fn convert_loc(&self, x: f64, y: f64, z: f64) -> DVec3;

    /// Maps a host-space direction to container space without translating it.
    fn convert_loc_without_origin_offset(&self, x: f64, y: f64, z: f64) -> DVec3;

    /// Point form taking a vector.
    fn convert_point(&self, p: DVec3) -> DVec3 {
        self.convert_loc(p.x, p.y, p.z)
    }

    /// Direction form taking a vector.
    fn convert_direction(&self, d: DVec3) -> DVec3 {
        self.convert_loc_without_origin_offset(d.x, d.y, d.z)
    }
}

/// Affine transform: an axis remapping followed by an origin offset.
///
/// `convert_loc(p) = axes * p + origin_offset` and
/// `convert_loc_without_origin_offset(d) = axes * d`.
///
/// # Example
///
/// ```rust
/// use obj_mesh::transform::{AxisTransform, CoordTransform};
/// use glam::DVec3;
///
/// // Host +X (the axis) becomes container -Y, shifted up by the length.
/// let t = AxisTransform::axial_down(2.0);
/// assert_eq!(t.convert_loc(0.0, 0.0, 0.0), DVec3::new(0.0, 2.0, 0.0));
/// assert_eq!(t.convert_loc_without_origin_offset(1.0, 0.0, 0.0), DVec3::NEG_Y);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTransform {
    /// Columns are the container-space images of host X, Y and Z.
    pub axes: DMat3,
    /// Added to every converted point.
    pub origin_offset: DVec3,
}

impl Default for AxisTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl AxisTransform {
    /// Creates a transform from an axis matrix and an origin offset.
    pub fn new(axes: DMat3, origin_offset: DVec3) -> Self {
        Self { axes, origin_offset }
    }

    /// Host and container coordinates coincide.
    pub fn identity() -> Self {
        Self::new(DMat3::IDENTITY, DVec3::ZERO)
    }

    /// Keeps the axes, shifts every point by `offset`.
    pub fn translation(offset: DVec3) -> Self {
        Self::new(DMat3::IDENTITY, offset)
    }

    /// Y-up container with the host axis pointing down.
    ///
    /// Host X maps to container -Y, host Y to container X and host Z to
    /// container Z, then the result is lifted by `axial_length` so an object
    /// spanning `0..axial_length` stands on the container origin.
    pub fn axial_down(axial_length: f64) -> Self {
        let axes = DMat3::from_cols(DVec3::NEG_Y, DVec3::X, DVec3::Z);
        Self::new(axes, DVec3::new(0.0, axial_length, 0.0))
    }
}

impl CoordTransform for AxisTransform {
    fn convert_loc(&self, x: f64, y: f64, z: f64) -> DVec3 {
        self.axes * DVec3::new(x, y, z) + self.origin_offset
    }

    fn convert_loc_without_origin_offset(&self, x: f64, y: f64, z: f64) -> DVec3 {
        self.axes * DVec3::new(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_round_trips_points() {
        let t = AxisTransform::identity();
        assert_eq!(t.convert_loc(1.0, 2.0, 3.0), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_direction_ignores_offset() {
        let t = AxisTransform::translation(DVec3::new(10.0, 20.0, 30.0));
        assert_eq!(t.convert_loc(1.0, 0.0, 0.0), DVec3::new(11.0, 20.0, 30.0));
        assert_eq!(t.convert_loc_without_origin_offset(1.0, 0.0, 0.0), DVec3::X);
    }

    #[test]
    fn test_axial_down_mapping() {
        let t = AxisTransform::axial_down(5.0);
        let tip = t.convert_loc(5.0, 0.0, 0.0);
        assert_relative_eq!(tip.y, 0.0);
        let radial = t.convert_loc_without_origin_offset(0.0, 1.0, 0.0);
        assert_eq!(radial, DVec3::X);
    }

    #[test]
    fn test_point_and_direction_differ_by_offset() {
        let t = AxisTransform::axial_down(3.0);
        let p = DVec3::new(0.5, -1.0, 2.0);
        let diff = t.convert_point(p) - t.convert_direction(p);
        assert_eq!(diff, t.origin_offset);
    }
}
