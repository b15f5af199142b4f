//! # Symmetry Checker
//!
//! Read-only comparison of every mapped vertex against the mirror of its
//! partner.

use glam::DVec3;
use serde::Serialize;
use tracing::debug;

use crate::error::{SymmetryError, SymmetryResult};
use crate::point::{is_equivalent, mirror, MirrorAxis};
use crate::settings::{Side, Tolerance};
use crate::table::SymmetryTable;

/// Returns the keys of the `side` mapping whose position does not match the
/// mirrored position of their partner within `tolerance`.
///
/// The result follows the mapping's iteration order.
///
/// # Errors
///
/// [`SymmetryError::VertexCountMismatch`] if `points` is not the mesh the
/// table was built for.
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use sym_mesh::{check, MirrorAxis, Side, SymmetryTable, Tolerance};
///
/// let table = SymmetryTable::from_half_mapping(&[1, -1, -1, -1]).unwrap();
/// let points = [
///     DVec3::new(1.0, 0.0, 0.0),
///     DVec3::new(-1.0, 0.0, 0.01),
///     DVec3::ZERO,
///     DVec3::new(0.0, 0.0, 1.0),
/// ];
/// let strict = Tolerance::new(0.001).unwrap();
/// let loose = Tolerance::new(0.02).unwrap();
/// assert_eq!(check(&points, &table, Side::Left, strict, MirrorAxis::X).unwrap(), vec![0]);
/// assert!(check(&points, &table, Side::Left, loose, MirrorAxis::X).unwrap().is_empty());
/// ```
pub fn check(
    points: &[DVec3],
    table: &SymmetryTable,
    side: Side,
    tolerance: Tolerance,
    axis: MirrorAxis,
) -> SymmetryResult<Vec<usize>> {
    if points.len() != table.vertex_count() {
        return Err(SymmetryError::VertexCountMismatch {
            table: table.vertex_count(),
            mesh: points.len(),
        });
    }

    let mismatches: Vec<usize> = table
        .pairs(side)
        .filter(|&(key, partner)| {
            !is_equivalent(points[key], mirror(points[partner], axis), tolerance.value())
        })
        .map(|(key, _)| key)
        .collect();

    debug!(
        side = %side,
        tolerance = tolerance.value(),
        checked = table.pair_count(),
        mismatched = mismatches.len(),
        "symmetry check finished"
    );
    Ok(mismatches)
}

/// Outcome of a symmetry check, ready to hand back to the host.
///
/// # Examples
/// ```
/// use sym_mesh::CheckReport;
/// let report = CheckReport::new("body", vec![3, 8], 12);
/// assert!(!report.is_symmetric());
/// assert_eq!(report.components(), vec!["body.vtx[3]", "body.vtx[8]"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Path of the checked mesh.
    pub mesh: String,
    /// Vertices that failed the check.
    pub mismatched: Vec<usize>,
    /// Number of pairs that were compared.
    pub checked: usize,
}

impl CheckReport {
    /// Creates a report.
    pub fn new(mesh: impl Into<String>, mismatched: Vec<usize>, checked: usize) -> Self {
        Self {
            mesh: mesh.into(),
            mismatched,
            checked,
        }
    }

    /// True when every compared pair matched.
    pub fn is_symmetric(&self) -> bool {
        self.mismatched.is_empty()
    }

    /// Host component names for the mismatched vertices.
    pub fn components(&self) -> Vec<String> {
        crate::component::component_names(&self.mesh, &self.mismatched)
    }
}
