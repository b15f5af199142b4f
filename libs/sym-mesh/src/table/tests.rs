//! Tests for symmetry table construction and lookup.

use super::*;

/// Sentinel entries are skipped and the inverse is exact.
///
/// # Examples
/// ```
/// use sym_mesh::SymmetryTable;
/// let table = SymmetryTable::from_half_mapping(&[3, 2, -1, -1]).unwrap();
/// assert_eq!(table.pair_count(), 2);
/// ```
#[test]
fn build_skips_sentinel_and_inverts() {
    let table = SymmetryTable::from_half_mapping(&[3, 2, -1, -1, -1]).unwrap();
    assert_eq!(table.vertex_count(), 5);
    assert_eq!(table.pair_count(), 2);
    for (&left, &right) in table.left_to_right() {
        assert_eq!(table.right_to_left()[&right], left);
    }
    assert_eq!(table.left_to_right().len(), table.right_to_left().len());
}

#[test]
fn build_honours_custom_sentinel() {
    let table = SymmetryTable::build(&[1, 99, 99], 99).unwrap();
    assert_eq!(table.pair_count(), 1);
    assert_eq!(table.resolve_partner(1).unwrap(), 0);
}

#[test]
fn left_keys_never_appear_as_right_keys() {
    let table = SymmetryTable::from_half_mapping(&[5, 4, 3, -1, -1, -1, -1]).unwrap();
    for left in table.left_to_right().keys() {
        assert!(!table.right_to_left().contains_key(left));
    }
}

#[test]
fn duplicate_partner_is_a_conflict() {
    let err = SymmetryTable::from_half_mapping(&[2, 2, -1]).unwrap_err();
    assert_eq!(
        err,
        TableConflict::DuplicatePartner {
            first: 0,
            second: 1,
            partner: 2
        }
    );
}

#[test]
fn self_pair_is_a_conflict() {
    let err = SymmetryTable::from_half_mapping(&[-1, 1]).unwrap_err();
    assert_eq!(err, TableConflict::SelfPair { index: 1 });
}

#[test]
fn two_way_entries_are_a_conflict() {
    // A full (not half) table lists every pair twice.
    let err = SymmetryTable::from_half_mapping(&[1, 0]).unwrap_err();
    assert_eq!(
        err,
        TableConflict::ChainedPair {
            index: 0,
            partner: 1,
            next: 0
        }
    );
}

#[test]
fn out_of_range_partner_is_a_conflict() {
    let err = SymmetryTable::from_half_mapping(&[7, -1]).unwrap_err();
    assert!(matches!(
        err,
        TableConflict::PartnerOutOfRange {
            index: 0,
            partner: 7,
            len: 2
        }
    ));

    let err = SymmetryTable::from_half_mapping(&[-3, -1]).unwrap_err();
    assert!(matches!(
        err,
        TableConflict::PartnerOutOfRange { partner: -3, .. }
    ));
}

#[test]
fn resolve_prefers_left_then_right() {
    let table = SymmetryTable::from_half_mapping(&[-1, 3, -1, -1]).unwrap();
    assert_eq!(table.resolve_partner(1).unwrap(), 3);
    assert_eq!(table.resolve_partner(3).unwrap(), 1);
    assert_eq!(
        table.resolve_partner(0).unwrap_err(),
        SymmetryError::NoPartner { index: 0 }
    );
    assert_eq!(table.partner_on(Side::Left, 3), None);
    assert_eq!(table.partner_on(Side::Right, 3), Some(1));
}

#[test]
fn pairs_follow_left_order_on_both_sides() {
    let table = SymmetryTable::from_half_mapping(&[4, 3, -1, -1, -1]).unwrap();
    let left: Vec<_> = table.pairs(Side::Left).collect();
    let right: Vec<_> = table.pairs(Side::Right).collect();
    assert_eq!(left, vec![(0, 4), (1, 3)]);
    assert_eq!(right, vec![(4, 0), (3, 1)]);
}

#[test]
fn empty_mapping_builds_empty_table() {
    let table = SymmetryTable::from_half_mapping(&[]).unwrap();
    assert!(table.is_empty());
    assert_eq!(table.vertex_count(), 0);

    let table = SymmetryTable::from_half_mapping(&[-1, -1]).unwrap();
    assert!(table.is_empty());
    assert_eq!(table.vertex_count(), 2);
}
