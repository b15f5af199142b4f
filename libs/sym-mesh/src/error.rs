//! # Error Types
//!
//! Error types for symmetry operations. Every error is recoverable at the
//! host boundary: the requested action is aborted and the mesh is left
//! exactly as it was.
//!
//! ## Error Policy
//!
//! - NO partial edits when an operation fails
//! - Validation happens before the first write
//! - Errors carry the offending indices or input

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while checking or enforcing mesh symmetry.
///
/// ## Example
///
/// ```rust
/// use sym_mesh::{SymmetryError, Tolerance};
///
/// match Tolerance::parse("abc") {
///     Ok(tol) => println!("tolerance {}", tol.value()),
///     Err(SymmetryError::InvalidTolerance { input }) => eprintln!("bad tolerance: {input}"),
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SymmetryError {
    /// No symmetry table has been picked yet.
    #[error("Mesh is not set: pick a reference edge first")]
    MeshNotBound,

    /// A mutating action was requested with nothing selected.
    #[error("Nothing is selected")]
    EmptySelection,

    /// The vertex is not part of any mirrored pair.
    #[error("Vertex {index} has no mirror partner")]
    NoPartner {
        /// Vertex that could not be resolved.
        index: usize,
    },

    /// The tolerance text is not a finite, non-negative number.
    #[error("Invalid tolerance '{input}': expected a non-negative number")]
    InvalidTolerance {
        /// Raw text that was rejected.
        input: String,
    },

    /// The side selector value is not recognised.
    #[error("Invalid side '{input}': expected left or right")]
    InvalidSide {
        /// Raw selector value.
        input: String,
    },

    /// The half mapping handed over by the table provider is malformed.
    #[error("Symmetry table conflict: {0}")]
    Conflict(#[from] TableConflict),

    /// A selected vertex does not exist in the point buffer.
    #[error("Vertex {index} is out of range for a mesh with {len} vertices")]
    VertexOutOfRange {
        /// Offending vertex index.
        index: usize,
        /// Number of points in the buffer.
        len: usize,
    },

    /// A flat `[x, y, z, ...]` buffer whose length is not a multiple of three.
    #[error("Point buffer of {len} values is not a whole number of xyz triples")]
    MalformedBuffer {
        /// Number of scalars received.
        len: usize,
    },

    /// The point buffer does not belong to the mesh the table was built for.
    #[error("Symmetry table covers {table} vertices but the mesh has {mesh}")]
    VertexCountMismatch {
        /// Vertex count recorded in the table.
        table: usize,
        /// Vertex count of the current point buffer.
        mesh: usize,
    },

    /// The operation targets a different mesh than the bound one.
    #[error("Selection is on '{selected}' but the symmetry table was built for '{bound}'")]
    WrongMesh {
        /// Path of the mesh the table was built for.
        bound: String,
        /// Path of the mesh that is currently selected.
        selected: String,
    },

    /// A component name could not be parsed.
    #[error("Invalid vertex component '{input}'")]
    InvalidComponent {
        /// Raw component string.
        input: String,
    },

    /// The requested feature is a disabled placeholder.
    #[error("{feature} symmetry is not supported")]
    Unsupported {
        /// Name of the disabled feature.
        feature: &'static str,
    },

    /// The external symmetry-table provider failed.
    #[error("Symmetry table provider failed: {message}")]
    Provider {
        /// Message reported by the provider.
        message: String,
    },

    /// The undo history is empty.
    #[error("Nothing to undo")]
    NothingToUndo,

    /// The redo history is empty.
    #[error("Nothing to redo")]
    NothingToRedo,
}

/// Structural problems detected while building a [`crate::SymmetryTable`].
///
/// The provider's raw inverse would overwrite silently in these cases, so
/// construction refuses instead and names the vertices involved.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableConflict {
    /// Two left vertices claim the same mirror partner.
    #[error("vertices {first} and {second} both map to {partner}")]
    DuplicatePartner {
        /// Left vertex that claimed the partner first.
        first: usize,
        /// Left vertex that claimed it again.
        second: usize,
        /// The contested right vertex.
        partner: usize,
    },

    /// A vertex names itself as its own mirror.
    #[error("vertex {index} maps to itself")]
    SelfPair {
        /// Offending vertex.
        index: usize,
    },

    /// A partner also appears as a left-side vertex.
    #[error("vertex {index} maps to {partner}, which is itself mapped to {next}")]
    ChainedPair {
        /// Left vertex.
        index: usize,
        /// Its partner, also present as a left key.
        partner: usize,
        /// The partner's own partner.
        next: usize,
    },

    /// A partner index lies outside the mapping.
    #[error("vertex {index} maps to {partner}, outside 0..{len}")]
    PartnerOutOfRange {
        /// Left vertex.
        index: usize,
        /// Raw partner value.
        partner: i64,
        /// Length of the half mapping.
        len: usize,
    },
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for symmetry operations.
pub type SymmetryResult<T> = Result<T, SymmetryError>;

// =============================================================================
// TESTS
// =============================================================================
