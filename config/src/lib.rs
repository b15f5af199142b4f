//! # Config Crate
//!
//! Centralized configuration constants for the mesh symmetry toolkit.
//! Every tunable value (tolerances, sentinels, naming conventions) is defined
//! here so the core library and the host bindings agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ToolConfig, DEFAULT_TOLERANCE, NO_MIRROR_SENTINEL};
//!
//! // The symmetry-table provider marks centerline vertices with the sentinel
//! let half = [1_i64, NO_MIRROR_SENTINEL, NO_MIRROR_SENTINEL];
//! assert_eq!(half.iter().filter(|v| **v == NO_MIRROR_SENTINEL).count(), 2);
//!
//! // The tool starts with the default tolerance
//! let cfg = ToolConfig::default();
//! assert_eq!(cfg.tolerance, DEFAULT_TOLERANCE);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Host-Agnostic**: No values tied to a particular host application
//! - **Dependency-Free**: Pure constants and validation helpers

pub mod constants;

#[cfg(test)]
mod tests;
