//! # Symmetry Table
//!
//! Left/right vertex pairing built from the half mapping produced by the
//! host's symmetry-table command. The host writes, for every vertex `i`,
//! either the index of its mirror partner or a sentinel; only one vertex of
//! each pair carries the entry, which makes that vertex the "left" one.
//!
//! ## Invariants
//!
//! - `right_to_left` is exactly the inverse of `left_to_right`
//! - No vertex is its own partner
//! - No right vertex is also a left vertex
//! - Every index is below `vertex_count`

use std::collections::HashMap;

use config::constants::NO_MIRROR_SENTINEL;
use tracing::debug;

use crate::error::{SymmetryError, SymmetryResult, TableConflict};
use crate::settings::Side;

/// Bidirectional mirror-pair lookup for one mesh.
///
/// # Examples
/// ```
/// use sym_mesh::SymmetryTable;
///
/// // Vertex 0 mirrors vertex 2; vertex 1 sits on the centerline.
/// let table = SymmetryTable::from_half_mapping(&[2, -1, -1]).unwrap();
/// assert_eq!(table.resolve_partner(0).unwrap(), 2);
/// assert_eq!(table.resolve_partner(2).unwrap(), 0);
/// assert!(table.resolve_partner(1).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymmetryTable {
    /// Length of the half mapping, i.e. the mesh's vertex count.
    vertex_count: usize,
    /// `(left, right)` pairs in ascending left order.
    pairs: Vec<(usize, usize)>,
    left_to_right: HashMap<usize, usize>,
    right_to_left: HashMap<usize, usize>,
}

impl SymmetryTable {
    /// Builds a table from a half mapping whose unmapped entries equal
    /// `sentinel`.
    ///
    /// # Errors
    ///
    /// Returns a [`TableConflict`] naming the offending vertices if two
    /// vertices share a partner, a vertex maps to itself, a partner is also
    /// a left vertex, or a partner lies outside the mapping.
    pub fn build(half_mapping: &[i64], sentinel: i64) -> Result<Self, TableConflict> {
        let vertex_count = half_mapping.len();
        let mut pairs = Vec::new();
        let mut left_to_right = HashMap::new();
        let mut right_to_left: HashMap<usize, usize> = HashMap::new();

        for (index, &raw) in half_mapping.iter().enumerate() {
            if raw == sentinel {
                continue;
            }
            let partner = usize::try_from(raw)
                .ok()
                .filter(|p| *p < vertex_count)
                .ok_or(TableConflict::PartnerOutOfRange {
                    index,
                    partner: raw,
                    len: vertex_count,
                })?;
            if partner == index {
                return Err(TableConflict::SelfPair { index });
            }
            if let Some(&first) = right_to_left.get(&partner) {
                return Err(TableConflict::DuplicatePartner {
                    first,
                    second: index,
                    partner,
                });
            }
            right_to_left.insert(partner, index);
            left_to_right.insert(index, partner);
            pairs.push((index, partner));
        }

        for &(index, partner) in &pairs {
            if let Some(&next) = left_to_right.get(&partner) {
                return Err(TableConflict::ChainedPair {
                    index,
                    partner,
                    next,
                });
            }
        }

        debug!(
            vertices = vertex_count,
            pairs = pairs.len(),
            unpaired = vertex_count - 2 * pairs.len(),
            "built symmetry table"
        );

        Ok(Self {
            vertex_count,
            pairs,
            left_to_right,
            right_to_left,
        })
    }

    /// Builds a table using the provider's default sentinel.
    pub fn from_half_mapping(half_mapping: &[i64]) -> Result<Self, TableConflict> {
        Self::build(half_mapping, NO_MIRROR_SENTINEL)
    }

    /// Number of vertices the table was built for.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of mirrored pairs.
    #[inline]
    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    /// Looks up the partner of `index` on one side only.
    pub fn partner_on(&self, side: Side, index: usize) -> Option<usize> {
        match side {
            Side::Left => self.left_to_right.get(&index).copied(),
            Side::Right => self.right_to_left.get(&index).copied(),
        }
    }

    /// Returns the mirror partner of `index`, trying the left mapping first
    /// and the right mapping second.
    ///
    /// # Errors
    ///
    /// [`SymmetryError::NoPartner`] if `index` is in neither mapping.
    pub fn resolve_partner(&self, index: usize) -> SymmetryResult<usize> {
        self.partner_on(Side::Left, index)
            .or_else(|| self.partner_on(Side::Right, index))
            .ok_or(SymmetryError::NoPartner { index })
    }

    /// Iterates the active mapping for `side` as `(key, partner)`.
    ///
    /// Both directions follow ascending left-vertex order, so results that
    /// depend on iteration order are reproducible.
    pub fn pairs(&self, side: Side) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.pairs.iter().map(move |&(left, right)| match side {
            Side::Left => (left, right),
            Side::Right => (right, left),
        })
    }

    /// Read-only view of the left-to-right mapping.
    pub fn left_to_right(&self) -> &HashMap<usize, usize> {
        &self.left_to_right
    }

    /// Read-only view of the right-to-left mapping.
    pub fn right_to_left(&self) -> &HashMap<usize, usize> {
        &self.right_to_left
    }
}

#[cfg(test)]
mod tests;
