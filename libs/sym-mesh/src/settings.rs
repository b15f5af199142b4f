//! # Tool Settings
//!
//! User-editable state of a symmetry session: the tolerance text field, the
//! side selector and the mirror axis. Values are validated on the way in so
//! the checker and editor never see a bad tolerance.

use std::fmt;
use std::str::FromStr;

use config::constants::{validate_tolerance, ToolConfig, DEFAULT_TOLERANCE, NO_MIRROR_SENTINEL};
use serde::Serialize;

use crate::error::{SymmetryError, SymmetryResult};
use crate::point::MirrorAxis;

/// A validated, finite, non-negative per-axis tolerance.
///
/// # Examples
/// ```
/// use sym_mesh::Tolerance;
///
/// assert_eq!(Tolerance::parse(" 0.02 ").unwrap().value(), 0.02);
/// assert!(Tolerance::parse("-1").is_err());
/// assert!(Tolerance::parse("abc").is_err());
/// assert_eq!(Tolerance::default().value(), 0.001);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(into = "f64")]
pub struct Tolerance(f64);

impl Tolerance {
    /// Validates a numeric tolerance.
    pub fn new(value: f64) -> SymmetryResult<Self> {
        validate_tolerance(value)
            .map(Self)
            .map_err(|_| SymmetryError::InvalidTolerance {
                input: value.to_string(),
            })
    }

    /// Parses the contents of a tolerance text field.
    pub fn parse(text: &str) -> SymmetryResult<Self> {
        let trimmed = text.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| SymmetryError::InvalidTolerance {
                input: trimmed.to_string(),
            })?;
        validate_tolerance(value)
            .map(Self)
            .map_err(|_| SymmetryError::InvalidTolerance {
                input: trimmed.to_string(),
            })
    }

    /// Returns the raw tolerance.
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self(DEFAULT_TOLERANCE)
    }
}

impl FromStr for Tolerance {
    type Err = SymmetryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Tolerance> for f64 {
    fn from(tolerance: Tolerance) -> Self {
        tolerance.0
    }
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which half of the table drives checks.
///
/// `Left` walks the left-to-right mapping and reports left vertices,
/// `Right` walks the inverse and reports right vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Side {
    /// Drive from the left half.
    #[default]
    Left,
    /// Drive from the right half.
    Right,
}

impl Side {
    /// Maps a one-based radio button index to a side.
    ///
    /// # Examples
    /// ```
    /// use sym_mesh::Side;
    /// assert_eq!(Side::from_button(1), Some(Side::Left));
    /// assert_eq!(Side::from_button(2), Some(Side::Right));
    /// assert_eq!(Side::from_button(3), None);
    /// ```
    pub fn from_button(index: u32) -> Option<Self> {
        match index {
            1 => Some(Side::Left),
            2 => Some(Side::Right),
            _ => None,
        }
    }
}

impl FromStr for Side {
    type Err = SymmetryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Side::Left),
            "right" | "r" => Ok(Side::Right),
            _ => Err(SymmetryError::InvalidSide {
                input: s.trim().to_string(),
            }),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("Left"),
            Side::Right => f.write_str("Right"),
        }
    }
}

/// Snapshot of the tool panel.
///
/// # Examples
/// ```
/// use sym_mesh::{MirrorAxis, Side, ToolSettings};
/// let settings = ToolSettings::default();
/// assert_eq!(settings.side, Side::Left);
/// assert_eq!(settings.axis, MirrorAxis::X);
/// assert_eq!(settings.sentinel, -1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ToolSettings {
    /// Per-axis tolerance for checks.
    pub tolerance: Tolerance,
    /// Side driving the check.
    pub side: Side,
    /// Mirror axis.
    pub axis: MirrorAxis,
    /// Half-mapping value the table provider writes for unpaired vertices.
    pub sentinel: i64,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            side: Side::default(),
            axis: MirrorAxis::default(),
            sentinel: NO_MIRROR_SENTINEL,
        }
    }
}

impl From<ToolConfig> for ToolSettings {
    fn from(config: ToolConfig) -> Self {
        Self {
            // ToolConfig is validated on construction.
            tolerance: Tolerance(config.tolerance),
            sentinel: config.sentinel,
            ..Self::default()
        }
    }
}
