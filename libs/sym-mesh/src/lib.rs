//! # Sym-Mesh
//!
//! Bilateral symmetry checking and enforcement for polygon meshes owned by a
//! host 3D application.
//!
//! ## Architecture
//!
//! ```text
//! host table command → SymmetryTable ─┬─→ check()       → CheckReport → host selection
//!                                     └─→ VertexEditor  → UndoRecord  → host undo stack
//! ```
//!
//! The host stays behind the traits in [`host`]: the core never owns mesh
//! topology, only a copy of the point buffer for the duration of one action.
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec3;
//! use sym_mesh::{check, EditMode, MirrorAxis, Side, SymmetryTable, Tolerance, VertexEditor};
//!
//! let table = SymmetryTable::from_half_mapping(&[1, -1, -1])?;
//! let points = [
//!     DVec3::new(1.0, 0.5, 0.0),
//!     DVec3::new(-0.5, 0.5, 0.0),
//!     DVec3::new(0.0, 1.0, 0.0),
//! ];
//!
//! let mismatched = check(&points, &table, Side::Left, Tolerance::default(), MirrorAxis::X)?;
//! assert_eq!(mismatched, vec![0]);
//!
//! let edit = VertexEditor::new(&table, MirrorAxis::X).plan(&points, &[0], EditMode::Mirror)?;
//! let after = check(edit.points(), &table, Side::Left, Tolerance::default(), MirrorAxis::X)?;
//! assert!(after.is_empty());
//! # Ok::<(), sym_mesh::SymmetryError>(())
//! ```

pub mod check;
pub mod component;
pub mod editor;
pub mod error;
pub mod host;
pub mod point;
pub mod session;
pub mod settings;
pub mod table;
pub mod undo;

pub use check::{check, CheckReport};
pub use editor::{EditMode, MirrorEdit, VertexEditor};
pub use error::{SymmetryError, SymmetryResult, TableConflict};
pub use point::{is_equivalent, mirror, MirrorAxis};
pub use session::{Command, HostContext, MeshBinding, Outcome, SymmetrySession};
pub use settings::{Side, Tolerance, ToolSettings};
pub use table::SymmetryTable;
pub use undo::{History, UndoRecord, UndoState};

/// Re-exported so hosts share the crate's vector type.
pub use glam::DVec3;
