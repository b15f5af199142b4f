//! Centralized configuration values shared across the symmetry toolkit.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// TOOL IDENTITY
// =============================================================================

/// Human-readable tool name shown in host window titles.
pub const TOOL_NAME: &str = "symMesh";

/// Tool version string.
///
/// # Examples
/// ```
/// use config::constants::TOOL_VERSION;
/// assert!(!TOOL_VERSION.is_empty());
/// ```
pub const TOOL_VERSION: &str = "0.1";

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Default per-axis tolerance used when comparing a vertex against the mirror
/// of its partner.
///
/// This is the value the tolerance field is populated with when the tool
/// opens.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_TOLERANCE;
/// assert_eq!(DEFAULT_TOLERANCE, 0.001);
/// ```
pub const DEFAULT_TOLERANCE: f64 = 0.001;

// =============================================================================
// SYMMETRY TABLE CONSTANTS
// =============================================================================

/// Value written by the symmetry-table provider for vertices that have no
/// mirror partner (centerline or asymmetric vertices).
///
/// # Examples
/// ```
/// use config::constants::NO_MIRROR_SENTINEL;
/// let half = [3_i64, NO_MIRROR_SENTINEL];
/// assert!(half[1] < 0);
/// ```
pub const NO_MIRROR_SENTINEL: i64 = -1;

// =============================================================================
// UNDO CONSTANTS
// =============================================================================

/// Maximum number of edits kept by the built-in undo history.
///
/// Each entry holds two copies of the point buffer; older entries are
/// evicted first.
///
/// # Examples
/// ```
/// use config::constants::MAX_UNDO_DEPTH;
/// assert!(MAX_UNDO_DEPTH > 0);
/// ```
pub const MAX_UNDO_DEPTH: usize = 50;

// =============================================================================
// NAMING CONSTANTS
// =============================================================================

/// Component keyword used to address mesh vertices, as in `body.vtx[12]`.
///
/// # Examples
/// ```
/// use config::constants::COMPONENT_PREFIX;
/// let name = format!("body.{COMPONENT_PREFIX}[12]");
/// assert_eq!(name, "body.vtx[12]");
/// ```
pub const COMPONENT_PREFIX: &str = "vtx";

// =============================================================================
// TOOL CONFIGURATION
// =============================================================================

/// Immutable snapshot of the tool settings the host starts a session with.
///
/// # Examples
/// ```
/// use config::constants::ToolConfig;
/// let config = ToolConfig::default();
/// assert!(config.tolerance >= 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolConfig {
    /// Per-axis tolerance for symmetry checks.
    pub tolerance: f64,
    /// Sentinel the table provider uses for unmapped vertices.
    pub sentinel: i64,
}

impl ToolConfig {
    /// Builds a configuration, validating the supplied tolerance.
    ///
    /// Zero is accepted and means exact comparison.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ToolConfig;
    /// let cfg = ToolConfig::new(0.01).expect("valid config");
    /// assert_eq!(cfg.tolerance, 0.01);
    /// assert!(ToolConfig::new(-1.0).is_err());
    /// ```
    pub fn new(tolerance: f64) -> Result<Self, ConfigError> {
        validate_tolerance(tolerance)?;
        Ok(Self {
            tolerance,
            sentinel: NO_MIRROR_SENTINEL,
        })
    }
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            sentinel: NO_MIRROR_SENTINEL,
        }
    }
}

/// Checks that a tolerance is finite and non-negative.
///
/// # Examples
/// ```
/// use config::constants::{validate_tolerance, ConfigError};
/// assert!(validate_tolerance(0.0).is_ok());
/// assert_eq!(validate_tolerance(f64::NAN).is_err(), true);
/// ```
pub fn validate_tolerance(tolerance: f64) -> Result<f64, ConfigError> {
    if !tolerance.is_finite() {
        return Err(ConfigError::NonFiniteTolerance);
    }
    if tolerance < 0.0 {
        return Err(ConfigError::NegativeTolerance(tolerance));
    }
    Ok(tolerance)
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the tolerance is below zero.
    NegativeTolerance(f64),
    /// Raised when the tolerance is NaN or infinite.
    NonFiniteTolerance,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NegativeTolerance(value) => {
                write!(f, "tolerance must not be negative: {value}")
            }
            ConfigError::NonFiniteTolerance => write!(f, "tolerance must be a finite number"),
        }
    }
}

impl std::error::Error for ConfigError {}
