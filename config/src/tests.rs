//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_default_tolerance_is_non_negative() {
    assert!(DEFAULT_TOLERANCE >= 0.0, "DEFAULT_TOLERANCE must not be negative");
}

#[test]
fn test_default_tolerance_is_small() {
    assert!(DEFAULT_TOLERANCE < 1.0, "DEFAULT_TOLERANCE should be a fine tolerance");
}

#[test]
fn test_default_tolerance_passes_validation() {
    assert_eq!(validate_tolerance(DEFAULT_TOLERANCE), Ok(DEFAULT_TOLERANCE));
}

// =============================================================================
// TABLE TESTS
// =============================================================================

#[test]
fn test_sentinel_is_not_a_valid_index() {
    assert!(NO_MIRROR_SENTINEL < 0, "sentinel must never collide with a vertex index");
}

// =============================================================================
// UNDO TESTS
// =============================================================================

#[test]
fn test_undo_depth_allows_at_least_one_step() {
    assert!(MAX_UNDO_DEPTH >= 1, "MAX_UNDO_DEPTH must keep the latest edit");
}

// =============================================================================
// NAMING TESTS
// =============================================================================

#[test]
fn test_component_prefix_has_no_separators() {
    assert!(!COMPONENT_PREFIX.contains('.'));
    assert!(!COMPONENT_PREFIX.contains('['));
}

#[test]
fn test_tool_identity() {
    assert_eq!(TOOL_NAME, "symMesh");
    assert!(TOOL_VERSION.split('.').all(|part| part.parse::<u32>().is_ok()));
}
