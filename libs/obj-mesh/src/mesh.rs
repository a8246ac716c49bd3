//! # Mesh Store
//!
//! Append-only container of vertices, normals and faces, indexed the way
//! Wavefront OBJ indexes them: a face corner references a vertex and a normal
//! independently, and every face belongs to a named group.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Handle of a named face group inside a [`MeshStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId(pub u32);

/// A polygon referencing vertices and normals by index.
///
/// Vertex and normal indices are separate index spaces. When
/// `normal_indices` is present it has the same length as `vertex_indices`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Face {
    /// Vertex indices in winding order
    pub vertex_indices: Vec<u32>,
    /// Normal index for each corner, if the face is shaded
    pub normal_indices: Option<Vec<u32>>,
}

impl Face {
    /// Creates a face with a normal per corner.
    pub fn new(vertex_indices: Vec<u32>, normal_indices: Vec<u32>) -> Self {
        debug_assert_eq!(vertex_indices.len(), normal_indices.len());
        Self {
            vertex_indices,
            normal_indices: Some(normal_indices),
        }
    }

    /// Creates a face without normals.
    pub fn unshaded(vertex_indices: Vec<u32>) -> Self {
        Self {
            vertex_indices,
            normal_indices: None,
        }
    }

    /// Returns the number of corners.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertex_indices.len()
    }

    /// Returns true if the face has no corners.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertex_indices.is_empty()
    }
}

/// A face together with the group it was written to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedFace {
    pub group: GroupId,
    pub face: Face,
}

/// Shared mesh container the generators append to.
///
/// Nothing is ever removed or deduplicated. Generators capture
/// [`vertex_count`](Self::vertex_count) and
/// [`normal_count`](Self::normal_count) before writing and compute all their
/// indices relative to those bases, so a store must not be written by two
/// generators at the same time.
///
/// # Example
///
/// ```rust
/// use obj_mesh::mesh::{Face, MeshStore};
/// use glam::DVec3;
///
/// let mut store = MeshStore::new();
/// store.set_active_group("triangle");
/// let a = store.add_vertex(DVec3::ZERO);
/// let b = store.add_vertex(DVec3::X);
/// let c = store.add_vertex(DVec3::Y);
/// let n = store.add_normal(DVec3::Z);
/// store.add_face(Face::new(vec![a, b, c], vec![n, n, n]));
/// assert_eq!(store.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeshStore {
    vertices: Vec<DVec3>,
    normals: Vec<DVec3>,
    faces: Vec<GroupedFace>,
    groups: Vec<String>,
    active_group: Option<GroupId>,
}

/// Name of the group faces land in when none was set.
pub const DEFAULT_GROUP: &str = "default";

impl MeshStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Returns the number of normals.
    #[inline]
    pub fn normal_count(&self) -> u32 {
        self.normals.len() as u32
    }

    /// Returns the number of faces across all groups.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if nothing has been written.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.normals.is_empty() && self.faces.is_empty()
    }

    /// Appends a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Appends a normal and returns its index.
    pub fn add_normal(&mut self, normal: DVec3) -> u32 {
        let index = self.normals.len() as u32;
        self.normals.push(normal);
        index
    }

    /// Returns the id of the named group, registering it if needed.
    ///
    /// Does not change the active group.
    pub fn group(&mut self, name: &str) -> GroupId {
        if let Some(pos) = self.groups.iter().position(|g| g == name) {
            return GroupId(pos as u32);
        }
        self.groups.push(name.to_owned());
        GroupId((self.groups.len() - 1) as u32)
    }

    /// Makes `name` the group that [`add_face`](Self::add_face) writes to.
    pub fn set_active_group(&mut self, name: &str) -> GroupId {
        let id = self.group(name);
        self.active_group = Some(id);
        id
    }

    /// Returns the active group, if one was set.
    pub fn active_group(&self) -> Option<GroupId> {
        self.active_group
    }

    /// Appends a face to the active group.
    ///
    /// Falls back to [`DEFAULT_GROUP`] when no group was ever set.
    pub fn add_face(&mut self, face: Face) {
        let group = match self.active_group {
            Some(id) => id,
            None => self.set_active_group(DEFAULT_GROUP),
        };
        self.add_face_to(group, face);
    }

    /// Appends a face to an explicit group.
    ///
    /// Indices are not bounds-checked; referencing a vertex or normal that
    /// does not exist is a caller bug.
    pub fn add_face_to(&mut self, group: GroupId, face: Face) {
        debug_assert!(face.len() >= 3, "faces need at least 3 corners");
        self.faces.push(GroupedFace { group, face });
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the normals.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns all faces in insertion order with their groups.
    #[inline]
    pub fn faces(&self) -> &[GroupedFace] {
        &self.faces
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the normal at the given index.
    #[inline]
    pub fn normal(&self, index: u32) -> DVec3 {
        self.normals[index as usize]
    }

    /// Returns the face at the given index.
    #[inline]
    pub fn face(&self, index: usize) -> &Face {
        &self.faces[index].face
    }

    /// Returns the registered group names, indexed by [`GroupId`].
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    /// Returns the name of a group.
    pub fn group_name(&self, id: GroupId) -> &str {
        &self.groups[id.0 as usize]
    }

    /// Iterates over the faces written to the named group.
    pub fn faces_in_group<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Face> + 'a {
        let id = self
            .groups
            .iter()
            .position(|g| g == name)
            .map(|pos| GroupId(pos as u32));
        self.faces
            .iter()
            .filter(move |f| Some(f.group) == id)
            .map(|f| &f.face)
    }

    /// Computes the axis-aligned bounding box of all vertices.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Checks that every face index points at an existing vertex or normal
    /// and that every face has at least three corners.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertex_count();
        let normal_count = self.normal_count();

        self.faces.iter().all(|GroupedFace { group, face }| {
            if (group.0 as usize) >= self.groups.len() || face.len() < 3 {
                return false;
            }
            if face.vertex_indices.iter().any(|&i| i >= vertex_count) {
                return false;
            }
            match &face.normal_indices {
                Some(normals) => {
                    normals.len() == face.len() && normals.iter().all(|&i| i < normal_count)
                }
                None => true,
            }
        })
    }
}
