//! Point mirroring and per-axis equivalence.
//!
//! These are the only geometric primitives the tool needs. Both are pure:
//! the checker relies on that so a read-only check never touches the
//! point buffer it inspects.

use glam::DVec3;
use serde::Serialize;

/// Axis across which the mesh is mirrored.
///
/// # Examples
/// ```
/// use sym_mesh::MirrorAxis;
/// assert_eq!(MirrorAxis::default(), MirrorAxis::X);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum MirrorAxis {
    /// Mirror across the YZ plane.
    #[default]
    X,
    /// Mirror across the XZ plane.
    Y,
    /// Mirror across the XY plane.
    Z,
}

impl MirrorAxis {
    /// Scale vector that negates this axis and keeps the other two.
    #[inline]
    pub fn reflection(self) -> DVec3 {
        match self {
            MirrorAxis::X => DVec3::new(-1.0, 1.0, 1.0),
            MirrorAxis::Y => DVec3::new(1.0, -1.0, 1.0),
            MirrorAxis::Z => DVec3::new(1.0, 1.0, -1.0),
        }
    }
}

/// Returns `point` reflected across `axis`.
///
/// Negation is exact in IEEE arithmetic, so mirroring twice gives back the
/// original bits.
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use sym_mesh::{mirror, MirrorAxis};
///
/// let p = DVec3::new(1.5, 2.0, -3.0);
/// assert_eq!(mirror(p, MirrorAxis::X), DVec3::new(-1.5, 2.0, -3.0));
/// assert_eq!(mirror(mirror(p, MirrorAxis::Z), MirrorAxis::Z), p);
/// ```
#[inline]
pub fn mirror(point: DVec3, axis: MirrorAxis) -> DVec3 {
    point * axis.reflection()
}

/// Returns true when every component of `a` and `b` differs by at most
/// `tolerance`.
///
/// A tolerance of zero demands exact equality. NaN components never compare
/// equivalent.
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use sym_mesh::is_equivalent;
///
/// let a = DVec3::new(1.0, 0.0, 0.0);
/// let b = DVec3::new(1.0, 0.0, 0.5);
/// assert!(is_equivalent(a, b, 0.5));
/// assert!(!is_equivalent(a, b, 0.25));
/// ```
#[inline]
pub fn is_equivalent(a: DVec3, b: DVec3, tolerance: f64) -> bool {
    (a - b).abs().cmple(DVec3::splat(tolerance)).all()
}
