//! # Polygon Extrusion
//!
//! Extrudes a flat outline in the host XY plane to a thickness along host Z,
//! centered on `z = 0`.
//!
//! The outline must run clockwise in the XY plane and is implicitly closed:
//! the first point is not repeated at the end. "Front" is the `z = -t/2` side,
//! whose normal is host `(0, 0, -1)`; "back" is the `z = +t/2` side.
//!
//! ## Layout
//!
//! ```text
//! normals:  front, back, one per edge
//! vertices: N front (z = -t/2), N back (z = +t/2)
//! faces:    front (reversed outline), back (outline order), N side quads
//! ```

use super::GeneratedRange;
use crate::error::MeshError;
use crate::mesh::{Face, MeshStore};
use crate::transform::CoordTransform;
use config::constants::MIN_OUTLINE_POINTS;
use glam::DVec2;

/// Appends an extruded polygon given as separate X and Y coordinate arrays.
///
/// # Arguments
///
/// * `store` - Mesh store to append to
/// * `transform` - Host-to-container mapping
/// * `group` - Group the faces belong to
/// * `xs` - X coordinates, clockwise
/// * `ys` - Y coordinates, clockwise
/// * `thickness` - Extent along host Z
///
/// # Errors
///
/// Rejects arrays of different lengths, fewer than three points, and
/// outlines whose last point repeats the first. The store is untouched on
/// error.
///
/// # Example
///
/// ```rust
/// use obj_mesh::mesh::MeshStore;
/// use obj_mesh::shapes::add_polygon_mesh;
/// use obj_mesh::transform::AxisTransform;
///
/// let mut store = MeshStore::new();
/// let xs = [0.0, 2.0, 2.0, 0.0];
/// let ys = [0.0, 0.0, 2.0, 2.0];
/// add_polygon_mesh(&mut store, &AxisTransform::identity(), "fin", &xs, &ys, 1.0).unwrap();
/// assert_eq!(store.vertex_count(), 8);
/// assert_eq!(store.face_count(), 6);
/// ```
pub fn add_polygon_mesh<T>(
    store: &mut MeshStore,
    transform: &T,
    group: &str,
    xs: &[f64],
    ys: &[f64],
    thickness: f64,
) -> Result<GeneratedRange, MeshError>
where
    T: CoordTransform + ?Sized,
{
    if xs.len() != ys.len() {
        return Err(MeshError::mismatched_outline(xs.len(), ys.len()));
    }

    let outline: Vec<DVec2> = xs
        .iter()
        .zip(ys)
        .map(|(&x, &y)| DVec2::new(x, y))
        .collect();
    add_outline_mesh(store, transform, group, &outline, thickness)
}

/// Appends an extruded polygon given as a list of points.
///
/// Same contract as [`add_polygon_mesh`].
pub fn add_outline_mesh<T>(
    store: &mut MeshStore,
    transform: &T,
    group: &str,
    outline: &[DVec2],
    thickness: f64,
) -> Result<GeneratedRange, MeshError>
where
    T: CoordTransform + ?Sized,
{
    verify_outline(outline)?;

    let n = outline.len() as u32;
    let group = store.group(group);
    let vertex_base = store.vertex_count();
    let normal_base = store.normal_count();
    let face_base = store.face_count();

    log::debug!(
        "extruding {n}-point outline into group {} at vertex {vertex_base}",
        store.group_name(group)
    );

    let front_normal = store.add_normal(transform.convert_loc_without_origin_offset(0.0, 0.0, -1.0));
    let back_normal = store.add_normal(transform.convert_loc_without_origin_offset(0.0, 0.0, 1.0));

    let half = thickness / 2.0;
    for z in [-half, half] {
        for p in outline {
            store.add_vertex(transform.convert_loc(p.x, p.y, z));
        }
    }

    let front = |i: u32| vertex_base + i;
    let back = |i: u32| vertex_base + n + i;

    // Front face winds the outline backwards so it faces away from the back
    let vertex_indices = (0..n).rev().map(front).collect();
    store.add_face_to(group, Face::new(vertex_indices, vec![front_normal; n as usize]));

    let vertex_indices = (0..n).map(back).collect();
    store.add_face_to(group, Face::new(vertex_indices, vec![back_normal; n as usize]));

    for i in 0..n {
        let next = (i + 1) % n;

        // Clockwise outline: the left-hand perpendicular points outward
        let edge = outline[next as usize] - outline[i as usize];
        let normal = store.add_normal(transform.convert_loc_without_origin_offset(-edge.y, edge.x, 0.0));

        store.add_face_to(
            group,
            Face::new(
                vec![front(i), front(next), back(next), back(i)],
                vec![normal; 4],
            ),
        );
    }

    Ok(GeneratedRange {
        vertices: vertex_base..store.vertex_count(),
        normals: normal_base..store.normal_count(),
        faces: face_base..store.face_count(),
    })
}

fn verify_outline(outline: &[DVec2]) -> Result<(), MeshError> {
    if outline.len() < MIN_OUTLINE_POINTS {
        return Err(MeshError::too_few_points(outline.len(), MIN_OUTLINE_POINTS));
    }

    if outline.first() == outline.last() {
        return Err(MeshError::ClosedOutline);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::AxisTransform;
    use glam::DVec3;

    #[test]
    fn test_verify_outline() {
        let square = [
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, 1.0),
            DVec2::new(1.0, 1.0),
        ];
        assert!(verify_outline(&square).is_ok());
        assert_eq!(
            verify_outline(&square[..2]),
            Err(MeshError::too_few_points(2, 3))
        );

        let closed = [square[0], square[1], square[2], square[0]];
        assert_eq!(verify_outline(&closed), Err(MeshError::ClosedOutline));
    }

    #[test]
    fn test_mismatched_arrays() {
        let mut store = MeshStore::new();
        let result = add_polygon_mesh(
            &mut store,
            &AxisTransform::identity(),
            "fin",
            &[0.0, 1.0, 1.0],
            &[0.0, 1.0],
            1.0,
        );
        assert_eq!(result, Err(MeshError::mismatched_outline(3, 2)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_vertices_split_by_thickness() {
        let mut store = MeshStore::new();
        add_polygon_mesh(
            &mut store,
            &AxisTransform::identity(),
            "fin",
            &[0.0, 0.0, 3.0],
            &[0.0, 2.0, 0.0],
            0.5,
        )
        .unwrap();

        assert_eq!(store.vertex(0), DVec3::new(0.0, 0.0, -0.25));
        assert_eq!(store.vertex(3), DVec3::new(0.0, 0.0, 0.25));
        assert_eq!(store.normal(0), DVec3::NEG_Z);
        assert_eq!(store.normal(1), DVec3::Z);
    }

    #[test]
    fn test_zero_thickness_is_tolerated() {
        let mut store = MeshStore::new();
        let range = add_polygon_mesh(
            &mut store,
            &AxisTransform::identity(),
            "fin",
            &[0.0, 0.0, 1.0],
            &[0.0, 1.0, 0.0],
            0.0,
        )
        .unwrap();
        assert_eq!(range.vertex_count(), 6);
        assert_eq!(store.vertex(0), store.vertex(3));
        assert!(store.validate());
    }
}
