//! # Vertex Editor
//!
//! Mirror and flip edits for selected vertices.
//!
//! ## Algorithm
//!
//! 1. Validate the selection and resolve every partner (abort on the first
//!    failure, nothing is written)
//! 2. Snapshot the point buffer
//! 3. Read positions from the snapshot, write into a working copy
//! 4. Push the working copy to the mesh in one batch and update the surface
//!    once
//!
//! Reading only from the snapshot makes the result independent of the order
//! the selection is processed in, even when a vertex and its partner are both
//! selected.

use std::collections::BTreeSet;

use glam::DVec3;
use tracing::info;

use crate::error::{SymmetryError, SymmetryResult};
use crate::host::PointBuffer;
use crate::point::{mirror, MirrorAxis};
use crate::table::SymmetryTable;
use crate::undo::UndoRecord;

/// Whether an edit copies one side or swaps both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    /// Copy each selected vertex's mirror onto its partner.
    Mirror,
    /// Additionally copy the partner's mirror back onto the selected vertex.
    Flip,
}

impl EditMode {
    /// Maps the `flip` flag of the host buttons to a mode.
    pub fn from_flip(flip: bool) -> Self {
        if flip {
            EditMode::Flip
        } else {
            EditMode::Mirror
        }
    }
}

/// Result of a successful edit.
#[derive(Debug, Clone, PartialEq)]
pub struct MirrorEdit {
    /// `(selected, partner)` pairs in ascending selected order.
    pub pairs: Vec<(usize, usize)>,
    /// Snapshots for the host undo stack.
    pub record: UndoRecord,
}

impl MirrorEdit {
    /// The new point buffer.
    pub fn points(&self) -> &[DVec3] {
        self.record.after()
    }
}

/// Applies mirror/flip edits using one symmetry table.
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use sym_mesh::{EditMode, MirrorAxis, SymmetryTable, VertexEditor};
///
/// let table = SymmetryTable::from_half_mapping(&[1, -1]).unwrap();
/// let editor = VertexEditor::new(&table, MirrorAxis::X);
/// let points = [DVec3::new(2.0, 1.0, 0.0), DVec3::new(-1.0, 0.0, 0.0)];
///
/// let edit = editor.plan(&points, &[0], EditMode::Mirror).unwrap();
/// assert_eq!(edit.points()[1], DVec3::new(-2.0, 1.0, 0.0));
/// assert_eq!(edit.record.before(), &points);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct VertexEditor<'a> {
    table: &'a SymmetryTable,
    axis: MirrorAxis,
}

impl<'a> VertexEditor<'a> {
    /// Creates an editor over `table`.
    pub fn new(table: &'a SymmetryTable, axis: MirrorAxis) -> Self {
        Self { table, axis }
    }

    /// Computes the edited buffer without touching any mesh.
    ///
    /// # Errors
    ///
    /// - [`SymmetryError::EmptySelection`] if `selected` is empty
    /// - [`SymmetryError::VertexCountMismatch`] if `points` does not match the table
    /// - [`SymmetryError::VertexOutOfRange`] for an index past the buffer
    /// - [`SymmetryError::NoPartner`] for a vertex outside every pair
    pub fn plan(
        &self,
        points: &[DVec3],
        selected: &[usize],
        mode: EditMode,
    ) -> SymmetryResult<MirrorEdit> {
        if selected.is_empty() {
            return Err(SymmetryError::EmptySelection);
        }
        if points.len() != self.table.vertex_count() {
            return Err(SymmetryError::VertexCountMismatch {
                table: self.table.vertex_count(),
                mesh: points.len(),
            });
        }

        let unique: BTreeSet<usize> = selected.iter().copied().collect();
        let pairs = unique
            .into_iter()
            .map(|index| {
                if index >= points.len() {
                    return Err(SymmetryError::VertexOutOfRange {
                        index,
                        len: points.len(),
                    });
                }
                self.table
                    .resolve_partner(index)
                    .map(|partner| (index, partner))
            })
            .collect::<SymmetryResult<Vec<_>>>()?;

        let before = points.to_vec();
        let mut after = before.clone();
        for &(index, partner) in &pairs {
            after[partner] = mirror(before[index], self.axis);
            if mode == EditMode::Flip {
                after[index] = mirror(before[partner], self.axis);
            }
        }

        Ok(MirrorEdit {
            pairs,
            record: UndoRecord::new(before, after),
        })
    }

    /// Edits `mesh` in place: one `set_points`, one `update_surface`.
    ///
    /// On error the mesh is not touched.
    pub fn apply<M: PointBuffer + ?Sized>(
        &self,
        mesh: &mut M,
        selected: &[usize],
        mode: EditMode,
    ) -> SymmetryResult<MirrorEdit> {
        let points = mesh.points();
        let edit = self.plan(&points, selected, mode)?;
        mesh.set_points(edit.points());
        mesh.update_surface();
        info!(vertices = edit.pairs.len(), ?mode, "mirrored selected vertices");
        Ok(edit)
    }
}
