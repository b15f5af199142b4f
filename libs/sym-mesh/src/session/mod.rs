//! # Symmetry Session
//!
//! State of one open tool window: the panel settings and the symmetry table
//! of the mesh picked as reference. Host UI events are turned into
//! [`Command`] values and routed through [`SymmetrySession::dispatch`], so the
//! session never sees widget types.

use tracing::{info, warn};

use crate::check::{check, CheckReport};
use crate::editor::{EditMode, MirrorEdit, VertexEditor};
use crate::error::{SymmetryError, SymmetryResult};
use crate::host::{PointBuffer, SelectionSink, SelectionSource, SymmetryTableProvider, UndoStack};
use crate::settings::{Side, Tolerance, ToolSettings};
use crate::table::SymmetryTable;

/// The mesh a session is bound to and its table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshBinding {
    /// Host path of the reference mesh.
    pub path: String,
    /// Mirror pairs of that mesh.
    pub table: SymmetryTable,
}

/// Everything a host exposes besides the point buffer and the undo stack.
pub trait Host: SymmetryTableProvider + SelectionSource + SelectionSink {}

impl<T: SymmetryTableProvider + SelectionSource + SelectionSink + ?Sized> Host for T {}

/// Borrowed host collaborators for one dispatched command.
pub struct HostContext<'a> {
    /// Selection, table provider and selection sink.
    pub host: &'a mut dyn Host,
    /// Point buffer of the bound mesh.
    pub mesh: &'a mut dyn PointBuffer,
    /// Host undo stack.
    pub undo: &'a mut dyn UndoStack,
}

/// A user action on the tool panel.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// The tolerance field was edited.
    SetTolerance(String),
    /// The side selector changed.
    SetSide(Side),
    /// "Select middle edge": build the table from the current selection.
    PickReference,
    /// "Check Symmetry".
    CheckSymmetry,
    /// "Mirror selected vertices".
    MirrorSelected,
    /// "Flip selected vertices".
    FlipSelected,
    /// Disabled placeholder for blend shape weights.
    MirrorBlendShapeWeights,
    /// Disabled placeholder for skin cluster weights.
    MirrorSkinWeights,
    /// Disabled placeholder for vertex colors.
    MirrorVertexColors,
}

impl Command {
    /// Name of the feature behind a disabled placeholder control, or `None`
    /// for commands the session runs.
    pub fn disabled_feature(&self) -> Option<&'static str> {
        match self {
            Command::MirrorBlendShapeWeights => Some("Blend shape weight"),
            Command::MirrorSkinWeights => Some("Skin cluster weight"),
            Command::MirrorVertexColors => Some("Vertex color"),
            _ => None,
        }
    }
}

/// What a successful command did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Panel settings were updated.
    SettingsChanged(ToolSettings),
    /// A new symmetry table is bound.
    ReferencePicked {
        /// Path of the reference mesh.
        mesh: String,
        /// Number of mirrored pairs.
        pairs: usize,
    },
    /// A check ran; mismatches were selected in the host.
    Checked(CheckReport),
    /// Vertices were mirrored or flipped.
    Edited {
        /// Vertices whose position changed.
        changed: Vec<usize>,
    },
}

/// Tool state between user actions.
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use sym_mesh::host::{InMemoryHost, InMemoryMesh};
/// use sym_mesh::{History, SymmetrySession};
///
/// let mut host = InMemoryHost::new("body", vec![1, -1]);
/// let mut mesh = InMemoryMesh::new("body", vec![DVec3::new(1.0, 0.0, 0.0), DVec3::ZERO]);
/// let mut history = History::default();
/// let mut session = SymmetrySession::default();
///
/// session.pick_reference(&mut host).unwrap();
/// assert_eq!(session.check(&mesh).unwrap().mismatched, vec![0]);
///
/// host.select(&[0]);
/// session.mirror_selected(&mut mesh, &host, &mut history, false).unwrap();
/// assert!(session.check(&mesh).unwrap().is_symmetric());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SymmetrySession {
    settings: ToolSettings,
    binding: Option<MeshBinding>,
}

impl SymmetrySession {
    /// Opens a session with explicit settings.
    pub fn new(settings: ToolSettings) -> Self {
        Self {
            settings,
            binding: None,
        }
    }

    /// Current panel settings.
    pub fn settings(&self) -> ToolSettings {
        self.settings
    }

    /// Parses and stores the tolerance field; a rejected value keeps the old
    /// tolerance.
    pub fn set_tolerance_text(&mut self, text: &str) -> SymmetryResult<Tolerance> {
        let tolerance = Tolerance::parse(text)?;
        self.settings.tolerance = tolerance;
        Ok(tolerance)
    }

    /// Selects the side that drives checks.
    pub fn set_side(&mut self, side: Side) {
        self.settings.side = side;
    }

    /// Current binding, if a reference was picked.
    pub fn binding(&self) -> Option<&MeshBinding> {
        self.binding.as_ref()
    }

    /// Path shown in the panel's read-only mesh field.
    pub fn bound_path(&self) -> Option<&str> {
        self.binding.as_ref().map(|b| b.path.as_str())
    }

    /// Drops the table, as when the tool window closes.
    pub fn release(&mut self) {
        self.binding = None;
    }

    fn require_binding(&self) -> SymmetryResult<&MeshBinding> {
        self.binding.as_ref().ok_or(SymmetryError::MeshNotBound)
    }

    /// Asks the host for the active mesh's half mapping and binds the
    /// resulting table, treating the configured sentinel as "no partner".
    /// A failure keeps the previous binding.
    pub fn pick_reference<H>(&mut self, host: &mut H) -> SymmetryResult<&MeshBinding>
    where
        H: SymmetryTableProvider + SelectionSource + ?Sized,
    {
        let path = host.active_mesh().ok_or(SymmetryError::EmptySelection)?;
        let half = host.half_mapping(&path)?;
        let table = SymmetryTable::build(&half, self.settings.sentinel)?;
        info!(mesh = %path, pairs = table.pair_count(), "bound symmetry table");
        let binding = self.binding.insert(MeshBinding { path, table });
        Ok(&*binding)
    }

    /// Checks the bound mesh with the current settings.
    ///
    /// # Errors
    ///
    /// [`SymmetryError::MeshNotBound`] before a reference was picked.
    pub fn check<M: PointBuffer + ?Sized>(&self, mesh: &M) -> SymmetryResult<CheckReport> {
        let binding = self.require_binding()?;
        let points = mesh.points();
        let mismatched = check(
            &points,
            &binding.table,
            self.settings.side,
            self.settings.tolerance,
            self.settings.axis,
        )?;
        Ok(CheckReport::new(
            binding.path.clone(),
            mismatched,
            binding.table.pair_count(),
        ))
    }

    /// Mirrors (or flips) the selected vertices of the bound mesh and commits
    /// the undo record.
    pub fn mirror_selected<M, S, U>(
        &self,
        mesh: &mut M,
        selection: &S,
        undo: &mut U,
        flip: bool,
    ) -> SymmetryResult<MirrorEdit>
    where
        M: PointBuffer + ?Sized,
        S: SelectionSource + ?Sized,
        U: UndoStack + ?Sized,
    {
        let binding = self.require_binding()?;
        let selected_mesh = selection
            .active_mesh()
            .ok_or(SymmetryError::EmptySelection)?;
        if selected_mesh != binding.path {
            return Err(SymmetryError::WrongMesh {
                bound: binding.path.clone(),
                selected: selected_mesh,
            });
        }

        let editor = VertexEditor::new(&binding.table, self.settings.axis);
        let edit = editor.apply(
            mesh,
            &selection.selected_vertices(),
            EditMode::from_flip(flip),
        )?;
        undo.commit(edit.record.clone());
        Ok(edit)
    }

    /// Routes one panel command.
    ///
    /// Failures are logged and returned; the mesh is left untouched.
    pub fn dispatch(
        &mut self,
        command: Command,
        ctx: &mut HostContext<'_>,
    ) -> SymmetryResult<Outcome> {
        let result = self.run(&command, ctx);
        if let Err(err) = &result {
            warn!(?command, %err, "command rejected");
        }
        result
    }

    fn run(&mut self, command: &Command, ctx: &mut HostContext<'_>) -> SymmetryResult<Outcome> {
        match command {
            Command::SetTolerance(text) => {
                self.set_tolerance_text(text)?;
                Ok(Outcome::SettingsChanged(self.settings))
            }
            Command::SetSide(side) => {
                self.set_side(*side);
                Ok(Outcome::SettingsChanged(self.settings))
            }
            Command::PickReference => {
                let binding = self.pick_reference(&mut *ctx.host)?;
                Ok(Outcome::ReferencePicked {
                    mesh: binding.path.clone(),
                    pairs: binding.table.pair_count(),
                })
            }
            Command::CheckSymmetry => {
                let report = self.check(&*ctx.mesh)?;
                ctx.host.select_components(&report.components());
                Ok(Outcome::Checked(report))
            }
            Command::MirrorSelected | Command::FlipSelected => {
                let flip = matches!(command, Command::FlipSelected);
                let edit =
                    self.mirror_selected(&mut *ctx.mesh, &*ctx.host, &mut *ctx.undo, flip)?;
                Ok(Outcome::Edited {
                    changed: edit.record.changed_indices(),
                })
            }
            placeholder => Err(SymmetryError::Unsupported {
                feature: placeholder.disabled_feature().unwrap_or_default(),
            }),
        }
    }
}

#[cfg(test)]
mod tests;
