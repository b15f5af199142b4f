//! # Host Interfaces
//!
//! Everything the toolkit needs from the host application, expressed as
//! small traits: the point buffer of the bound mesh, the external
//! symmetry-table command, the selection, and the undo stack.
//!
//! [`InMemoryMesh`] and [`InMemoryHost`] implement them without a host so the
//! same code paths run in tests and in the WASM binding.

use glam::DVec3;

use crate::error::{SymmetryError, SymmetryResult};
use crate::undo::UndoRecord;

/// Read/write channel to a mesh's vertex positions.
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use sym_mesh::host::{InMemoryMesh, PointBuffer};
///
/// let mut mesh = InMemoryMesh::new("body", vec![DVec3::ZERO]);
/// mesh.set_points(&[DVec3::ONE]);
/// mesh.update_surface();
/// assert_eq!(mesh.points(), vec![DVec3::ONE]);
/// assert_eq!(mesh.surface_updates(), 1);
/// ```
pub trait PointBuffer {
    /// Returns a copy of every vertex position.
    fn points(&self) -> Vec<DVec3>;

    /// Replaces every vertex position.
    fn set_points(&mut self, points: &[DVec3]);

    /// Recomputes derived surface data after [`PointBuffer::set_points`].
    fn update_surface(&mut self);
}

/// External command that computes the half mapping for a mesh.
///
/// Entry `i` is the mirror partner of vertex `i` or the sentinel.
pub trait SymmetryTableProvider {
    /// Builds the half mapping for the mesh at `mesh_path`.
    fn half_mapping(&mut self, mesh_path: &str) -> SymmetryResult<Vec<i64>>;
}

/// Source of the host's current selection.
pub trait SelectionSource {
    /// Path of the mesh the selection lives on, if any.
    fn active_mesh(&self) -> Option<String>;

    /// Indices of the selected vertices on [`SelectionSource::active_mesh`].
    fn selected_vertices(&self) -> Vec<usize>;
}

/// Sink used to replace the host selection with vertex components.
pub trait SelectionSink {
    /// Replaces the current selection with `components`.
    fn select_components(&mut self, components: &[String]);
}

/// Host undo stack.
pub trait UndoStack {
    /// Pushes a record; it supersedes any pending redo entries.
    fn commit(&mut self, record: UndoRecord);
}

/// Converts a flat `[x, y, z, x, y, z, ...]` buffer into points.
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use sym_mesh::host::points_from_flat;
///
/// let points = points_from_flat(&[1.0, 2.0, 3.0, -1.0, 2.0, 3.0]).unwrap();
/// assert_eq!(points, vec![DVec3::new(1.0, 2.0, 3.0), DVec3::new(-1.0, 2.0, 3.0)]);
/// assert!(points_from_flat(&[1.0, 2.0]).is_err());
/// ```
pub fn points_from_flat(flat: &[f64]) -> SymmetryResult<Vec<DVec3>> {
    if flat.len() % 3 != 0 {
        return Err(SymmetryError::MalformedBuffer { len: flat.len() });
    }
    Ok(flat
        .chunks_exact(3)
        .map(|xyz| DVec3::new(xyz[0], xyz[1], xyz[2]))
        .collect())
}

/// Flattens points into `[x, y, z, x, y, z, ...]`.
pub fn points_to_flat(points: &[DVec3]) -> Vec<f64> {
    points.iter().flat_map(|p| p.to_array()).collect()
}

/// A named point buffer held in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemoryMesh {
    path: String,
    points: Vec<DVec3>,
    surface_updates: usize,
}

impl InMemoryMesh {
    /// Creates a mesh from its path and vertex positions.
    pub fn new(path: impl Into<String>, points: Vec<DVec3>) -> Self {
        Self {
            path: path.into(),
            points,
            surface_updates: 0,
        }
    }

    /// Path of this mesh.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Borrowed view of the current positions.
    pub fn as_slice(&self) -> &[DVec3] {
        &self.points
    }

    /// How many times the surface was recomputed.
    pub fn surface_updates(&self) -> usize {
        self.surface_updates
    }
}

impl PointBuffer for InMemoryMesh {
    fn points(&self) -> Vec<DVec3> {
        self.points.clone()
    }

    fn set_points(&mut self, points: &[DVec3]) {
        self.points.clear();
        self.points.extend_from_slice(points);
    }

    fn update_surface(&mut self) {
        self.surface_updates += 1;
    }
}

/// Selection, table provider and selection sink backed by plain data.
///
/// # Examples
/// ```
/// use sym_mesh::host::{InMemoryHost, SelectionSource, SymmetryTableProvider};
///
/// let mut host = InMemoryHost::new("body", vec![1, -1]);
/// host.select(&[0]);
/// assert_eq!(host.active_mesh().as_deref(), Some("body"));
/// assert_eq!(host.selected_vertices(), vec![0]);
/// assert_eq!(host.half_mapping("body").unwrap(), vec![1, -1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryHost {
    mesh_path: Option<String>,
    half_mapping: Vec<i64>,
    selected: Vec<usize>,
    highlighted: Vec<String>,
}

impl InMemoryHost {
    /// Creates a host whose active mesh is `mesh_path`.
    pub fn new(mesh_path: impl Into<String>, half_mapping: Vec<i64>) -> Self {
        Self {
            mesh_path: Some(mesh_path.into()),
            half_mapping,
            selected: Vec::new(),
            highlighted: Vec::new(),
        }
    }

    /// Replaces the selected vertices.
    pub fn select(&mut self, indices: &[usize]) {
        self.selected = indices.to_vec();
    }

    /// Clears the active mesh and selection.
    pub fn clear_selection(&mut self) {
        self.mesh_path = None;
        self.selected.clear();
    }

    /// Changes the active mesh.
    pub fn set_active_mesh(&mut self, mesh_path: impl Into<String>) {
        self.mesh_path = Some(mesh_path.into());
    }

    /// Replaces the mapping returned by the provider.
    pub fn set_half_mapping(&mut self, half_mapping: Vec<i64>) {
        self.half_mapping = half_mapping;
    }

    /// Components most recently pushed through [`SelectionSink`].
    pub fn highlighted(&self) -> &[String] {
        &self.highlighted
    }
}

impl SymmetryTableProvider for InMemoryHost {
    fn half_mapping(&mut self, mesh_path: &str) -> SymmetryResult<Vec<i64>> {
        if self.mesh_path.as_deref() != Some(mesh_path) {
            return Err(SymmetryError::Provider {
                message: format!("no symmetry table for '{mesh_path}'"),
            });
        }
        Ok(self.half_mapping.clone())
    }
}

impl SelectionSource for InMemoryHost {
    fn active_mesh(&self) -> Option<String> {
        self.mesh_path.clone()
    }

    fn selected_vertices(&self) -> Vec<usize> {
        self.selected.clone()
    }
}

impl SelectionSink for InMemoryHost {
    fn select_components(&mut self, components: &[String]) {
        self.highlighted = components.to_vec();
    }
}
