//! # OBJ Mesh
//!
//! Procedural generation of solid meshes into an OBJ-style indexed store.
//!
//! ## Architecture
//!
//! ```text
//! host geometry → shapes / components → transform → MeshStore → external writer
//! ```
//!
//! ## Generators
//!
//! - **Revolution**: a radius profile swept around the host axis, closed with
//!   a pole vertex at each end and smooth shared normals
//! - **Polygon extrusion**: a clockwise outline extruded to a thickness, with
//!   one normal per side edge
//! - **Mass object**: rounded masses revolved once per location
//!
//! Generators own the store for the duration of a call. They capture the
//! store's vertex and normal counts up front and compute every index relative
//! to those bases, so callers sharing a store across threads must serialize
//! access themselves.
//!
//! ## Usage
//!
//! ```rust
//! use obj_mesh::mesh::MeshStore;
//! use obj_mesh::shapes::add_polygon_mesh;
//! use obj_mesh::transform::AxisTransform;
//!
//! let mut store = MeshStore::new();
//! add_polygon_mesh(
//!     &mut store,
//!     &AxisTransform::identity(),
//!     "fin",
//!     &[0.0, 0.0, 1.0],
//!     &[0.0, 1.0, 0.0],
//!     0.01,
//! )?;
//! assert_eq!(store.vertex_count(), 6);
//! # Ok::<(), obj_mesh::MeshError>(())
//! ```

pub mod components;
pub mod error;
pub mod lod;
pub mod mesh;
pub mod shapes;
pub mod transform;

pub use error::MeshError;
pub use lod::{LevelOfDetail, Tessellation};
pub use mesh::{Face, GroupId, MeshStore};
pub use transform::{AxisTransform, CoordTransform};
