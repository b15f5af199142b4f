//! WASM-facing entry points for the mesh symmetry toolkit.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. The JS side owns the editor: it hands over vertex
//! positions, the half mapping from its symmetry-table builder and the
//! current selection, and reads positions back after every edit. Native tests
//! use the `_internal` methods, which expose Rust error types directly.
//!
//! ```
//! let tool = sym_mesh_wasm::SymmetryTool::new_internal("body", &[1.0, 0.0, 0.0]).unwrap();
//! assert_eq!(tool.points_internal(), vec![1.0, 0.0, 0.0]);
//! ```

use config::constants::{DEFAULT_TOLERANCE, TOOL_VERSION};
use wasm_bindgen::prelude::*;

mod report;
mod tool;

pub use report::ToolReport;
pub use tool::SymmetryTool;

/// Prepares the module for use. Call once before creating a tool.
///
/// Installs a panic hook that forwards Rust panics to the browser console
/// when the `console_error_panic_hook` feature is enabled.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import init_wasm, { init } from "sym-mesh-wasm";
/// // await init_wasm();
/// // init();
/// ```
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returns the tool version shown in the panel title.
///
/// # Examples
/// ```
/// assert_eq!(sym_mesh_wasm::version(), "0.1");
/// ```
#[wasm_bindgen]
pub fn version() -> String {
    TOOL_VERSION.to_string()
}

/// Returns the tolerance the panel's text field starts with.
///
/// # Examples
/// ```
/// assert_eq!(sym_mesh_wasm::default_tolerance(), 0.001);
/// ```
#[wasm_bindgen]
pub fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}
