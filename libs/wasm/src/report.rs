//! Serializable snapshot of a tool panel for the JavaScript side.

use config::constants::{TOOL_NAME, TOOL_VERSION};
use serde::Serialize;
use sym_mesh::{CheckReport, History, Side, SymmetrySession};

/// Panel state as shown to the user.
///
/// # Examples
/// ```
/// use sym_mesh_wasm::SymmetryTool;
///
/// let tool = SymmetryTool::new_internal("body", &[]).unwrap();
/// let json = tool.report().to_json().unwrap();
/// assert!(json.contains("\"tolerance\":0.001"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolReport {
    /// Tool name shown in the panel title.
    pub tool: &'static str,
    /// Tool version.
    pub version: &'static str,
    /// Path of the bound mesh.
    pub mesh: Option<String>,
    /// Current tolerance.
    pub tolerance: f64,
    /// Side driving checks.
    pub side: Side,
    /// Mirrored pairs in the bound table.
    pub pairs: usize,
    /// Component names from the last check.
    pub mismatched: Vec<String>,
    /// Number of edits that can be undone.
    pub undo_depth: usize,
    /// Whether redo is available.
    pub can_redo: bool,
}

impl ToolReport {
    /// Collects the report from a session and its history.
    pub fn new(
        session: &SymmetrySession,
        history: &History,
        last_check: Option<&CheckReport>,
    ) -> Self {
        let settings = session.settings();
        Self {
            tool: TOOL_NAME,
            version: TOOL_VERSION,
            mesh: session.bound_path().map(str::to_string),
            tolerance: settings.tolerance.value(),
            side: settings.side,
            pairs: session.binding().map_or(0, |b| b.table.pair_count()),
            mismatched: last_check.map(CheckReport::components).unwrap_or_default(),
            undo_depth: history.undo_depth(),
            can_redo: history.can_redo(),
        }
    }

    /// Serializes the report as JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
