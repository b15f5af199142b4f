//! # Symmetry Tool Handle
//!
//! One open tool panel bound to one mesh owned by the JavaScript host.

use config::constants::ToolConfig;
use sym_mesh::component::parse_components;
use sym_mesh::host::{points_from_flat, points_to_flat, InMemoryHost, InMemoryMesh, PointBuffer};
use sym_mesh::{
    CheckReport, Command, History, HostContext, Outcome, Side, SymmetryError, SymmetryResult,
    SymmetrySession,
};
use wasm_bindgen::prelude::*;

use crate::report::ToolReport;

fn to_js(err: SymmetryError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// A symmetry tool session over a JS-owned mesh.
///
/// # Example (JavaScript)
///
/// ```javascript
/// init();
/// const tool = new SymmetryTool("body", geometry.attributes.position.array);
/// tool.pick_reference(buildSymmetryTable(geometry)); // Int32Array, -1 = no partner
/// tool.set_tolerance("0.001");
///
/// const bad = tool.check_symmetry();      // Uint32Array of vertex indices
/// tool.mirror_selected(selectedIndices);
/// tool.flip_components(["body.vtx[4:6]"]);
/// geometry.attributes.position.array.set(tool.points());
/// tool.undo();
/// ```
#[wasm_bindgen]
#[derive(Debug)]
pub struct SymmetryTool {
    session: SymmetrySession,
    host: InMemoryHost,
    mesh: InMemoryMesh,
    history: History,
    last_check: Option<CheckReport>,
}

impl SymmetryTool {
    /// Creates a tool over a flat `[x, y, z, ...]` position buffer.
    pub fn new_internal(mesh_path: &str, points: &[f64]) -> SymmetryResult<Self> {
        let points = points_from_flat(points)?;
        Ok(Self {
            session: SymmetrySession::new(ToolConfig::default().into()),
            host: InMemoryHost::new(mesh_path, Vec::new()),
            mesh: InMemoryMesh::new(mesh_path, points),
            history: History::default(),
            last_check: None,
        })
    }

    fn dispatch(&mut self, command: Command) -> SymmetryResult<Outcome> {
        let mut ctx = HostContext {
            host: &mut self.host,
            mesh: &mut self.mesh,
            undo: &mut self.history,
        };
        self.session.dispatch(command, &mut ctx)
    }

    /// Stores the tolerance field's text.
    pub fn set_tolerance_internal(&mut self, text: &str) -> SymmetryResult<()> {
        self.dispatch(Command::SetTolerance(text.to_string())).map(|_| ())
    }

    /// Selects the side from the one-based radio button index.
    pub fn set_side_internal(&mut self, button: u32) -> SymmetryResult<()> {
        let side = Side::from_button(button).ok_or_else(|| SymmetryError::InvalidSide {
            input: button.to_string(),
        })?;
        self.dispatch(Command::SetSide(side)).map(|_| ())
    }

    /// Binds the half mapping produced by the host's table builder.
    /// Returns the number of mirrored pairs.
    pub fn pick_reference_internal(&mut self, half_mapping: &[i64]) -> SymmetryResult<usize> {
        self.host.set_half_mapping(half_mapping.to_vec());
        match self.dispatch(Command::PickReference)? {
            Outcome::ReferencePicked { pairs, .. } => {
                self.last_check = None;
                Ok(pairs)
            }
            _ => Ok(0),
        }
    }

    /// Runs a check and returns the mismatched vertices.
    pub fn check_symmetry_internal(&mut self) -> SymmetryResult<Vec<usize>> {
        match self.dispatch(Command::CheckSymmetry)? {
            Outcome::Checked(report) => {
                let mismatched = report.mismatched.clone();
                self.last_check = Some(report);
                Ok(mismatched)
            }
            _ => Ok(Vec::new()),
        }
    }

    /// Mirrors or flips `selected` and returns the vertices that moved.
    pub fn edit_internal(&mut self, selected: &[usize], flip: bool) -> SymmetryResult<Vec<usize>> {
        self.host.select(selected);
        let command = if flip {
            Command::FlipSelected
        } else {
            Command::MirrorSelected
        };
        match self.dispatch(command)? {
            Outcome::Edited { changed } => Ok(changed),
            _ => Ok(Vec::new()),
        }
    }

    /// Mirrors or flips vertices named as components (`mesh.vtx[i]`,
    /// `mesh.vtx[a:b]`), which must all address this tool's mesh.
    pub fn edit_components_internal(
        &mut self,
        names: &[String],
        flip: bool,
    ) -> SymmetryResult<Vec<usize>> {
        let component = parse_components(names.iter().map(String::as_str))?
            .ok_or(SymmetryError::EmptySelection)?;
        if component.mesh != self.mesh.path() {
            return Err(SymmetryError::WrongMesh {
                bound: self.mesh.path().to_string(),
                selected: component.mesh,
            });
        }
        self.edit_internal(&component.indices, flip)
    }

    /// Undoes the last edit.
    pub fn undo_internal(&mut self) -> SymmetryResult<()> {
        self.history.undo(&mut self.mesh)
    }

    /// Redoes the last undone edit.
    pub fn redo_internal(&mut self) -> SymmetryResult<()> {
        self.history.redo(&mut self.mesh)
    }

    /// Current positions as a flat buffer.
    pub fn points_internal(&self) -> Vec<f64> {
        points_to_flat(&self.mesh.points())
    }

    /// Snapshot of the panel state.
    pub fn report(&self) -> ToolReport {
        ToolReport::new(&self.session, &self.history, self.last_check.as_ref())
    }
}

#[wasm_bindgen]
impl SymmetryTool {
    /// Creates a tool for the mesh `mesh_path` with positions `[x, y, z, ...]`.
    #[wasm_bindgen(constructor)]
    pub fn new(mesh_path: &str, points: &[f64]) -> Result<SymmetryTool, JsValue> {
        Self::new_internal(mesh_path, points).map_err(to_js)
    }

    /// Parses and stores the tolerance text field.
    pub fn set_tolerance(&mut self, text: &str) -> Result<(), JsValue> {
        self.set_tolerance_internal(text).map_err(to_js)
    }

    /// Current tolerance.
    pub fn tolerance(&self) -> f64 {
        self.session.settings().tolerance.value()
    }

    /// Selects the checked side: 1 = left, 2 = right.
    pub fn set_side(&mut self, button: u32) -> Result<(), JsValue> {
        self.set_side_internal(button).map_err(to_js)
    }

    /// Binds the symmetry table (`-1` marks vertices without partner).
    pub fn pick_reference(&mut self, half_mapping: &[i32]) -> Result<u32, JsValue> {
        let half: Vec<i64> = half_mapping.iter().map(|v| i64::from(*v)).collect();
        self.pick_reference_internal(&half)
            .map(|pairs| u32::try_from(pairs).unwrap_or(u32::MAX))
            .map_err(to_js)
    }

    /// Path of the bound mesh, if a reference was picked.
    pub fn bound_mesh(&self) -> Option<String> {
        self.session.bound_path().map(str::to_string)
    }

    /// Drops the bound table, as when the tool window closes.
    pub fn release(&mut self) {
        self.session.release();
        self.last_check = None;
    }

    /// Returns the vertices that fail the symmetry check as a Uint32Array.
    pub fn check_symmetry(&mut self) -> Result<Vec<u32>, JsValue> {
        self.check_symmetry_internal().map(to_u32).map_err(to_js)
    }

    /// Mirrors the selected vertices onto their partners.
    pub fn mirror_selected(&mut self, selected: &[u32]) -> Result<Vec<u32>, JsValue> {
        self.edit_internal(&from_u32(selected), false)
            .map(to_u32)
            .map_err(to_js)
    }

    /// Swaps the selected vertices with their mirrored partners.
    pub fn flip_selected(&mut self, selected: &[u32]) -> Result<Vec<u32>, JsValue> {
        self.edit_internal(&from_u32(selected), true)
            .map(to_u32)
            .map_err(to_js)
    }

    /// Mirrors vertices given as component names such as `"body.vtx[3:5]"`.
    pub fn mirror_components(&mut self, names: Vec<String>) -> Result<Vec<u32>, JsValue> {
        self.edit_components_internal(&names, false)
            .map(to_u32)
            .map_err(to_js)
    }

    /// Flips vertices given as component names.
    pub fn flip_components(&mut self, names: Vec<String>) -> Result<Vec<u32>, JsValue> {
        self.edit_components_internal(&names, true)
            .map(to_u32)
            .map_err(to_js)
    }

    /// Undoes the last edit.
    pub fn undo(&mut self) -> Result<(), JsValue> {
        self.undo_internal().map_err(to_js)
    }

    /// Redoes the last undone edit.
    pub fn redo(&mut self) -> Result<(), JsValue> {
        self.redo_internal().map_err(to_js)
    }

    /// Current positions as a Float64Array.
    pub fn points(&self) -> js_sys::Float64Array {
        js_sys::Float64Array::from(&self.points_internal()[..])
    }

    /// Panel state as a JSON string.
    pub fn report_json(&self) -> Result<String, JsValue> {
        self.report()
            .to_json()
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }
}

fn to_u32(indices: Vec<usize>) -> Vec<u32> {
    indices
        .into_iter()
        .map(|i| u32::try_from(i).unwrap_or(u32::MAX))
        .collect()
}

fn from_u32(indices: &[u32]) -> Vec<usize> {
    indices.iter().map(|&i| i as usize).collect()
}
