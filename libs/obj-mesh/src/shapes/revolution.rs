//! # Revolution Generator
//!
//! Sweeps a radius profile around the host X axis.
//!
//! ## Layout
//!
//! One instance writes `2 + (stacks - 1) * sides` vertices and the same number
//! of normals, in this order:
//!
//! ```text
//! bottom pole (x = 0)
//! ring 1 .. ring stacks-1   (sides vertices each, angle i * 2π/sides)
//! top pole (x = length)
//! ```
//!
//! Faces are a triangle fan at each pole and one band of quads between each
//! pair of adjacent rings. Every face uses the same relative offset for its
//! vertex and normal indices, so the surface is always smooth shaded.
//!
//! ## Normals
//!
//! Ring vertices whose radius equals the reference radius exactly get a
//! purely radial normal. Everywhere else the normal points from an arc
//! center on the axis through the vertex: `arc_height` from the bottom for
//! rings up to `stacks / 2`, `length - arc_height` past it. With an odd
//! stack count the middle ring falls on the bottom side of that split.

use super::GeneratedRange;
use crate::error::MeshError;
use crate::lod::Tessellation;
use crate::mesh::{Face, MeshStore};
use crate::transform::CoordTransform;
use glam::DVec3;
use std::f64::consts::PI;

/// Cross-section radius as a function of axial position.
///
/// Implemented for any `Fn(f64) -> f64`.
pub trait RadiusProfile {
    /// Radius at axial position `x`, `0 <= x <= length`.
    fn radius_at(&self, x: f64) -> f64;
}

impl<F> RadiusProfile for F
where
    F: Fn(f64) -> f64,
{
    fn radius_at(&self, x: f64) -> f64 {
        self(x)
    }
}

/// Shape parameters of a revolved solid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevolutionParams {
    /// Axial length along host X
    pub length: f64,
    /// Radius of the cylindrical section; rings at exactly this radius get
    /// radial normals
    pub reference_radius: f64,
    /// Axial distance from each end to the arc center used for smooth normals
    pub arc_height: f64,
    /// Side and stack counts
    pub tessellation: Tessellation,
}

/// Where one instance of a revolved solid is placed, in host coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Placement {
    /// Location of the bottom pole before the radial shift
    pub location: DVec3,
    /// Distance from the host axis
    pub radial_position: f64,
    /// Angle of the radial shift in the host YZ plane, radians from +Y
    pub radial_direction: f64,
}

impl Placement {
    /// Placement at `location` with no radial shift.
    pub fn at(location: DVec3) -> Self {
        Self {
            location,
            ..Default::default()
        }
    }

    /// Placement at `location` shifted radially.
    pub fn radial(location: DVec3, radial_position: f64, radial_direction: f64) -> Self {
        Self {
            location,
            radial_position,
            radial_direction,
        }
    }

    /// Total host-space offset of the instance.
    pub fn offset(&self) -> DVec3 {
        DVec3::new(
            self.location.x,
            self.location.y + self.radial_position * self.radial_direction.cos(),
            self.location.z + self.radial_position * self.radial_direction.sin(),
        )
    }
}

/// Start indices of the poles and rings of one instance.
///
/// Built once from a captured base, used for both the vertex and the normal
/// index space.
#[derive(Debug, Clone, Copy)]
struct RingLayout {
    sides: u32,
    bottom_pole: u32,
    first_ring: u32,
    last_ring: u32,
    top_pole: u32,
}

impl RingLayout {
    fn new(base: u32, tessellation: Tessellation) -> Self {
        let sides = tessellation.sides;
        let first_ring = base + 1;
        let last_ring = first_ring + (tessellation.stacks - 2) * sides;
        Self {
            sides,
            bottom_pole: base,
            first_ring,
            last_ring,
            top_pole: last_ring + sides,
        }
    }

    /// Index of vertex `i` on ring `ring`, counting rings from 0.
    #[inline]
    fn ring_vertex(&self, ring: u32, i: u32) -> u32 {
        self.first_ring + ring * self.sides + i % self.sides
    }

    /// One past the last index of the instance.
    #[inline]
    fn end(&self) -> u32 {
        self.top_pole + 1
    }
}

/// Appends one revolved solid to `store`, writing its faces to `group`.
///
/// # Arguments
///
/// * `store` - Mesh store to append to
/// * `transform` - Host-to-container mapping
/// * `profile` - Radius along the axis
/// * `params` - Length, reference radius, arc height and tessellation
/// * `placement` - Location and radial shift of this instance
/// * `group` - Group the faces belong to
///
/// # Returns
///
/// The index ranges written.
///
/// # Example
///
/// ```rust
/// use obj_mesh::lod::Tessellation;
/// use obj_mesh::mesh::MeshStore;
/// use obj_mesh::shapes::{add_revolution_mesh, Placement, RevolutionParams};
/// use obj_mesh::transform::AxisTransform;
///
/// let mut store = MeshStore::new();
/// let params = RevolutionParams {
///     length: 2.0,
///     reference_radius: 0.5,
///     arc_height: 0.5,
///     tessellation: Tessellation::new(8, 4).unwrap(),
/// };
/// let range = add_revolution_mesh(
///     &mut store,
///     &AxisTransform::identity(),
///     &|_x: f64| 0.5,
///     &params,
///     &Placement::default(),
///     "mass",
/// )
/// .unwrap();
/// assert_eq!(range.vertex_count(), 2 + 3 * 8);
/// ```
pub fn add_revolution_mesh<T, P>(
    store: &mut MeshStore,
    transform: &T,
    profile: &P,
    params: &RevolutionParams,
    placement: &Placement,
    group: &str,
) -> Result<GeneratedRange, MeshError>
where
    T: CoordTransform + ?Sized,
    P: RadiusProfile + ?Sized,
{
    let tessellation = Tessellation::new(params.tessellation.sides, params.tessellation.stacks)?;
    if !params.length.is_finite() {
        return Err(MeshError::InvalidLength {
            length: params.length,
        });
    }

    if tessellation.stacks % 2 != 0 {
        log::warn!(
            "odd stack count {} biases the arc-center mirror toward the bottom end",
            tessellation.stacks
        );
    }

    let group = store.group(group);
    let vertex_base = store.vertex_count();
    let normal_base = store.normal_count();
    let face_base = store.face_count();
    let vertices = RingLayout::new(vertex_base, tessellation);
    let normals = RingLayout::new(normal_base, tessellation);

    log::debug!(
        "revolving {} sides x {} stacks into group {} at vertex {vertex_base}",
        tessellation.sides,
        tessellation.stacks,
        store.group_name(group)
    );

    // The radial shift is a direction: it must not pick up the origin offset.
    let shift = transform.convert_direction(placement.offset());
    emit_vertices(store, transform, profile, params, tessellation, shift);
    debug_assert_eq!(store.vertex_count(), vertices.end());
    debug_assert_eq!(store.normal_count(), normals.end());

    let sides = tessellation.sides;

    // Bottom fan
    for i in 0..sides {
        let corners = |l: &RingLayout| {
            vec![
                l.bottom_pole,
                l.ring_vertex(0, i),
                l.ring_vertex(0, i + 1),
            ]
        };
        store.add_face_to(group, Face::new(corners(&vertices), corners(&normals)));
    }

    // Bands between adjacent rings
    for ring in 0..tessellation.stacks - 2 {
        for i in 0..sides {
            let corners = |l: &RingLayout| {
                vec![
                    l.ring_vertex(ring, i),
                    l.ring_vertex(ring + 1, i),
                    l.ring_vertex(ring + 1, i + 1),
                    l.ring_vertex(ring, i + 1),
                ]
            };
            store.add_face_to(group, Face::new(corners(&vertices), corners(&normals)));
        }
    }

    // Top fan, closing against the last ring
    for i in 0..sides {
        let corners = |l: &RingLayout| {
            vec![
                l.top_pole,
                l.last_ring + (i + 1) % l.sides,
                l.last_ring + i,
            ]
        };
        store.add_face_to(group, Face::new(corners(&vertices), corners(&normals)));
    }

    Ok(GeneratedRange {
        vertices: vertex_base..vertices.end(),
        normals: normal_base..normals.end(),
        faces: face_base..store.face_count(),
    })
}

/// Writes the poles and rings, one normal per vertex.
fn emit_vertices<T, P>(
    store: &mut MeshStore,
    transform: &T,
    profile: &P,
    params: &RevolutionParams,
    tessellation: Tessellation,
    shift: DVec3,
) where
    T: CoordTransform + ?Sized,
    P: RadiusProfile + ?Sized,
{
    let Tessellation { sides, stacks } = tessellation;
    let dx = params.length / stacks as f64;
    let da = 2.0 * PI / sides as f64;

    for j in 0..=stacks {
        let x = j as f64 * dx;

        if j == 0 || j == stacks {
            store.add_vertex(transform.convert_loc(x, 0.0, 0.0) + shift);
            let direction = if j == 0 { -1.0 } else { 1.0 };
            store.add_normal(transform.convert_loc_without_origin_offset(direction, 0.0, 0.0));
            continue;
        }

        let r = profile.radius_at(x);
        let x_center = if j <= stacks / 2 {
            params.arc_height
        } else {
            params.length - params.arc_height
        };

        for i in 0..sides {
            let angle = i as f64 * da;
            let y = r * angle.cos();
            let z = r * angle.sin();

            store.add_vertex(transform.convert_loc(x, y, z) + shift);

            let normal = if r == params.reference_radius {
                transform.convert_loc_without_origin_offset(0.0, y, z)
            } else {
                transform.convert_loc_without_origin_offset(x - x_center, y, z)
            };
            store.add_normal(normal);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::AxisTransform;
    use approx::assert_relative_eq;

    fn params(sides: u32, stacks: u32) -> RevolutionParams {
        RevolutionParams {
            length: 4.0,
            reference_radius: 1.0,
            arc_height: 1.0,
            tessellation: Tessellation { sides, stacks },
        }
    }

    fn cylinder(_x: f64) -> f64 {
        1.0
    }

    #[test]
    fn test_ring_layout() {
        let layout = RingLayout::new(10, Tessellation { sides: 4, stacks: 4 });
        assert_eq!(layout.bottom_pole, 10);
        assert_eq!(layout.first_ring, 11);
        assert_eq!(layout.last_ring, 19);
        assert_eq!(layout.top_pole, 23);
        assert_eq!(layout.end(), 24);
        assert_eq!(layout.ring_vertex(1, 4), 15);
    }

    #[test]
    fn test_poles_sit_on_axis() {
        let mut store = MeshStore::new();
        let range = add_revolution_mesh(
            &mut store,
            &AxisTransform::identity(),
            &cylinder,
            &params(6, 4),
            &Placement::default(),
            "mass",
        )
        .unwrap();

        assert_eq!(store.vertex(range.vertices.start), DVec3::ZERO);
        assert_eq!(store.vertex(range.vertices.end - 1), DVec3::new(4.0, 0.0, 0.0));
        assert_eq!(store.normal(range.normals.start), DVec3::NEG_X);
        assert_eq!(store.normal(range.normals.end - 1), DVec3::X);
    }

    #[test]
    fn test_ring_vertices_on_profile_radius() {
        let mut store = MeshStore::new();
        let profile = |x: f64| 0.5 + 0.25 * x;
        add_revolution_mesh(
            &mut store,
            &AxisTransform::identity(),
            &profile,
            &params(5, 4),
            &Placement::default(),
            "mass",
        )
        .unwrap();

        for ring in 0..3u32 {
            let x = (ring + 1) as f64;
            for i in 0..5u32 {
                let v = store.vertex(1 + ring * 5 + i);
                assert_relative_eq!(v.x, x);
                assert_relative_eq!(v.y.hypot(v.z), profile(x), epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_smooth_normals_point_away_from_arc_center() {
        let mut store = MeshStore::new();
        // Never equal to the reference radius
        let profile = |_x: f64| 0.5;
        add_revolution_mesh(
            &mut store,
            &AxisTransform::identity(),
            &profile,
            &params(4, 4),
            &Placement::default(),
            "mass",
        )
        .unwrap();

        // Ring at x = 1 sits on the bottom arc center (x = 1), ring at x = 3
        // on the top one (x = 4 - 1), so both normals are radial.
        assert_relative_eq!(store.normal(1).x, 0.0);
        assert_relative_eq!(store.normal(9).x, 0.0);
        // Middle ring (j = 2 <= 4 / 2) uses the bottom center.
        assert_relative_eq!(store.normal(5).x, 1.0);
    }

    #[test]
    fn test_odd_stacks_mirror_about_floor() {
        let mut store = MeshStore::new();
        let profile = |_x: f64| 0.5;
        let p = RevolutionParams {
            length: 5.0,
            reference_radius: 1.0,
            arc_height: 1.0,
            tessellation: Tessellation { sides: 3, stacks: 5 },
        };
        add_revolution_mesh(
            &mut store,
            &AxisTransform::identity(),
            &profile,
            &p,
            &Placement::default(),
            "mass",
        )
        .unwrap();

        // j = 2 (x = 2) is the last ring using the bottom center.
        assert_relative_eq!(store.normal(1 + 3).x, 1.0);
        // j = 3 (x = 3) uses the top center at x = 4.
        assert_relative_eq!(store.normal(1 + 2 * 3).x, -1.0);
    }

    #[test]
    fn test_zero_radius_ring_is_tolerated() {
        let mut store = MeshStore::new();
        let profile = |x: f64| if (x - 2.0).abs() < 1e-9 { 0.0 } else { 1.0 };
        let range = add_revolution_mesh(
            &mut store,
            &AxisTransform::identity(),
            &profile,
            &params(4, 4),
            &Placement::default(),
            "mass",
        )
        .unwrap();

        assert_eq!(range.vertex_count(), 14);
        for i in 0..4 {
            assert_eq!(store.vertex(5 + i), DVec3::new(2.0, 0.0, 0.0));
        }
        assert!(store.validate());
    }

    #[test]
    fn test_invalid_tessellation_leaves_store_untouched() {
        let mut store = MeshStore::new();
        let result = add_revolution_mesh(
            &mut store,
            &AxisTransform::identity(),
            &cylinder,
            &params(2, 4),
            &Placement::default(),
            "mass",
        );
        assert_eq!(result, Err(MeshError::invalid_tessellation(2, 4)));
        assert!(store.is_empty());
        assert!(store.groups().is_empty());
    }

    #[test]
    fn test_non_finite_length_is_rejected() {
        let mut store = MeshStore::new();
        let mut p = params(4, 4);
        p.length = f64::NAN;
        let result = add_revolution_mesh(
            &mut store,
            &AxisTransform::identity(),
            &cylinder,
            &p,
            &Placement::default(),
            "mass",
        );
        assert!(matches!(result, Err(MeshError::InvalidLength { .. })));
        assert!(store.is_empty());
    }

    #[test]
    fn test_placement_offset() {
        let p = Placement::radial(DVec3::new(1.0, 2.0, 3.0), 2.0, PI / 2.0);
        let offset = p.offset();
        assert_relative_eq!(offset.x, 1.0);
        assert_relative_eq!(offset.y, 2.0, epsilon = 1e-12);
        assert_relative_eq!(offset.z, 5.0);
    }
}
