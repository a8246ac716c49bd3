//! # Mass Object
//!
//! A cylindrical mass with rounded ends, revolved once per location.
//!
//! The rounded ends are elliptical: over the first `arc_height` of the length
//! the radius grows from zero at the pole to the full radius, and the last
//! `arc_height` mirrors it. In between the radius is exactly `radius`, so those
//! rings get cylindrical normals.

use crate::error::MeshError;
use crate::lod::{LevelOfDetail, Tessellation};
use crate::mesh::MeshStore;
use crate::shapes::{add_revolution_mesh, GeneratedRange, Placement, RadiusProfile, RevolutionParams};
use crate::transform::CoordTransform;
use config::constants::MASS_ARC_HEIGHT_FACTOR;
use glam::DVec3;

/// Geometry of a mass object as described by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct MassObject {
    /// Axial length
    pub length: f64,
    /// Radius of the cylindrical section
    pub radius: f64,
    /// Distance of the object's axis from the host axis
    pub radial_position: f64,
    /// Angle of the radial shift, radians from host +Y toward +Z
    pub radial_direction: f64,
    /// One instance is generated per location
    pub locations: Vec<DVec3>,
}

impl MassObject {
    /// Creates a mass object on the host axis at a single location.
    pub fn new(length: f64, radius: f64, location: DVec3) -> Self {
        Self {
            length,
            radius,
            radial_position: 0.0,
            radial_direction: 0.0,
            locations: vec![location],
        }
    }

    /// Axial height of each rounded end.
    pub fn arc_height(&self) -> f64 {
        self.length.min(2.0 * self.radius) * MASS_ARC_HEIGHT_FACTOR
    }

    /// Radius profile of this object.
    pub fn profile(&self) -> MassProfile {
        MassProfile {
            length: self.length,
            radius: self.radius,
            arc_height: self.arc_height(),
        }
    }

    fn placement(&self, location: DVec3) -> Placement {
        Placement::radial(location, self.radial_position, self.radial_direction)
    }
}

/// Radius of a mass object along its axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassProfile {
    pub length: f64,
    pub radius: f64,
    pub arc_height: f64,
}

impl RadiusProfile for MassProfile {
    fn radius_at(&self, x: f64) -> f64 {
        let a = self.arc_height;
        let t = if x < a {
            (a - x) / a
        } else if x > self.length - a {
            (x - (self.length - a)) / a
        } else {
            return self.radius;
        };
        self.radius * (1.0 - t * t).max(0.0).sqrt()
    }
}

/// Appends every instance of `mass` to `store`.
///
/// Tessellation comes from `lod` (`sides = stacks = lod / 2`). Each location
/// is a separate instance with its own index base.
///
/// # Example
///
/// ```rust
/// use obj_mesh::components::{export_mass_object, MassObject};
/// use obj_mesh::lod::LevelOfDetail;
/// use obj_mesh::mesh::MeshStore;
/// use obj_mesh::transform::AxisTransform;
/// use glam::DVec3;
///
/// let mut store = MeshStore::new();
/// let mass = MassObject::new(0.1, 0.02, DVec3::ZERO);
/// let ranges = export_mass_object(
///     &mut store,
///     &AxisTransform::identity(),
///     &mass,
///     "ballast",
///     LevelOfDetail::Low,
/// )
/// .unwrap();
/// assert_eq!(ranges.len(), 1);
/// ```
pub fn export_mass_object<T>(
    store: &mut MeshStore,
    transform: &T,
    mass: &MassObject,
    group: &str,
    lod: LevelOfDetail,
) -> Result<Vec<GeneratedRange>, MeshError>
where
    T: CoordTransform + ?Sized,
{
    let tessellation = Tessellation::from_level_of_detail(lod)?;
    let params = RevolutionParams {
        length: mass.length,
        reference_radius: mass.radius,
        arc_height: mass.arc_height(),
        tessellation,
    };
    let profile = mass.profile();

    log::debug!(
        "exporting mass object ({} instances) into group {group}",
        mass.locations.len()
    );

    mass.locations
        .iter()
        .map(|&location| {
            add_revolution_mesh(
                store,
                transform,
                &profile,
                &params,
                &mass.placement(location),
                group,
            )
        })
        .collect()
}
