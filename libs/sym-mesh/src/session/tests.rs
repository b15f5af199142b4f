//! Tests for session state and command dispatch.

use config::constants::ToolConfig;
use glam::DVec3;

use super::*;
use crate::error::TableConflict;
use crate::host::{InMemoryHost, InMemoryMesh};
use crate::undo::History;

/// The four-point mesh from the tool's manual: vertex 0 mirrors vertex 1,
/// which is displaced by 0.01 on Z.
fn manual_example() -> (InMemoryHost, InMemoryMesh) {
    let host = InMemoryHost::new("pCube1", vec![1, -1, -1, -1]);
    let mesh = InMemoryMesh::new(
        "pCube1",
        vec![
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(-1.0, 0.0, 0.01),
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(0.0, 0.0, 1.0),
        ],
    );
    (host, mesh)
}

#[test]
fn operations_require_a_bound_mesh() {
    let (host, mut mesh) = manual_example();
    let session = SymmetrySession::default();
    let mut history = History::default();
    assert_eq!(session.check(&mesh).unwrap_err(), SymmetryError::MeshNotBound);
    assert_eq!(
        session
            .mirror_selected(&mut mesh, &host, &mut history, false)
            .unwrap_err(),
        SymmetryError::MeshNotBound
    );
}

#[test]
fn manual_example_depends_on_tolerance() {
    let (mut host, mesh) = manual_example();
    let mut session = SymmetrySession::default();
    session.pick_reference(&mut host).unwrap();
    assert_eq!(session.bound_path(), Some("pCube1"));

    assert_eq!(session.check(&mesh).unwrap().mismatched, vec![0]);
    session.set_tolerance_text("0.02").unwrap();
    assert!(session.check(&mesh).unwrap().is_symmetric());
}

#[test]
fn rejected_tolerance_keeps_previous_value() {
    let mut session = SymmetrySession::default();
    session.set_tolerance_text("0.5").unwrap();
    assert!(session.set_tolerance_text("-3").is_err());
    assert!(session.set_tolerance_text("wide").is_err());
    assert_eq!(session.settings().tolerance.value(), 0.5);
}

#[test]
fn failed_pick_keeps_previous_binding() {
    let (mut host, _) = manual_example();
    let mut session = SymmetrySession::default();
    session.pick_reference(&mut host).unwrap();

    host.set_active_mesh("pSphere1");
    host.set_half_mapping(vec![1, 0]);
    assert!(matches!(
        session.pick_reference(&mut host),
        Err(SymmetryError::Conflict(_))
    ));
    assert_eq!(session.bound_path(), Some("pCube1"));

    host.clear_selection();
    assert_eq!(
        session.pick_reference(&mut host).unwrap_err(),
        SymmetryError::EmptySelection
    );
}

#[test]
fn mirror_commits_undo_record() {
    let (mut host, mut mesh) = manual_example();
    let original = mesh.points();
    let mut session = SymmetrySession::default();
    let mut history = History::default();
    session.pick_reference(&mut host).unwrap();

    host.select(&[0]);
    session
        .mirror_selected(&mut mesh, &host, &mut history, false)
        .unwrap();
    assert!(session.check(&mesh).unwrap().is_symmetric());

    history.undo(&mut mesh).unwrap();
    assert_eq!(mesh.points(), original);
    history.redo(&mut mesh).unwrap();
    assert!(session.check(&mesh).unwrap().is_symmetric());
}

#[test]
fn mirror_on_other_mesh_is_rejected() {
    let (mut host, mut mesh) = manual_example();
    let mut session = SymmetrySession::default();
    let mut history = History::default();
    session.pick_reference(&mut host).unwrap();

    host.set_active_mesh("pCube2");
    host.select(&[0]);
    let err = session
        .mirror_selected(&mut mesh, &host, &mut history, false)
        .unwrap_err();
    assert!(matches!(err, SymmetryError::WrongMesh { .. }));
    assert_eq!(history.undo_depth(), 0);
    assert_eq!(mesh.surface_updates(), 0);
}

#[test]
fn release_discards_table() {
    let (mut host, mesh) = manual_example();
    let mut session = SymmetrySession::default();
    session.pick_reference(&mut host).unwrap();
    session.release();
    assert!(session.binding().is_none());
    assert_eq!(session.check(&mesh).unwrap_err(), SymmetryError::MeshNotBound);
}

#[test]
fn dispatch_routes_panel_commands() {
    let (mut host, mut mesh) = manual_example();
    let mut history = History::default();
    let mut session = SymmetrySession::default();

    let mut ctx = HostContext {
        host: &mut host,
        mesh: &mut mesh,
        undo: &mut history,
    };

    let picked = session.dispatch(Command::PickReference, &mut ctx).unwrap();
    assert_eq!(
        picked,
        Outcome::ReferencePicked {
            mesh: "pCube1".to_string(),
            pairs: 1
        }
    );

    let checked = session.dispatch(Command::CheckSymmetry, &mut ctx).unwrap();
    match checked {
        Outcome::Checked(report) => assert_eq!(report.mismatched, vec![0]),
        other => panic!("unexpected outcome {other:?}"),
    }

    session
        .dispatch(Command::SetSide(Side::Right), &mut ctx)
        .unwrap();
    let checked = session.dispatch(Command::CheckSymmetry, &mut ctx).unwrap();
    assert!(matches!(checked, Outcome::Checked(ref r) if r.mismatched == vec![1]));

    drop(ctx);
    assert_eq!(host.highlighted(), ["pCube1.vtx[1]".to_string()]);
}

#[test]
fn dispatch_flip_reports_changed_vertices() {
    let (mut host, mut mesh) = manual_example();
    host.select(&[1]);
    let mut history = History::default();
    let mut session = SymmetrySession::default();
    let mut ctx = HostContext {
        host: &mut host,
        mesh: &mut mesh,
        undo: &mut history,
    };
    session.dispatch(Command::PickReference, &mut ctx).unwrap();

    let outcome = session.dispatch(Command::FlipSelected, &mut ctx).unwrap();
    assert_eq!(outcome, Outcome::Edited { changed: vec![0, 1] });
    drop(ctx);

    assert_eq!(mesh.as_slice()[0], DVec3::new(1.0, 0.0, 0.01));
    assert_eq!(mesh.as_slice()[1], DVec3::new(-1.0, 0.0, 0.0));
    assert_eq!(history.undo_depth(), 1);
}

#[test]
fn disabled_placeholders_are_unsupported() {
    let (mut host, mut mesh) = manual_example();
    let mut history = History::default();
    let mut session = SymmetrySession::default();
    let mut ctx = HostContext {
        host: &mut host,
        mesh: &mut mesh,
        undo: &mut history,
    };
    for command in [
        Command::MirrorBlendShapeWeights,
        Command::MirrorSkinWeights,
        Command::MirrorVertexColors,
    ] {
        let feature = command.disabled_feature().expect("placeholder");
        assert_eq!(
            session.dispatch(command, &mut ctx),
            Err(SymmetryError::Unsupported { feature })
        );
    }
    assert_eq!(Command::CheckSymmetry.disabled_feature(), None);
}

#[test]
fn dispatch_empty_selection_leaves_mesh_untouched() {
    let (mut host, mut mesh) = manual_example();
    let before = mesh.points();
    let mut history = History::default();
    let mut session = SymmetrySession::default();
    let mut ctx = HostContext {
        host: &mut host,
        mesh: &mut mesh,
        undo: &mut history,
    };
    session.dispatch(Command::PickReference, &mut ctx).unwrap();
    assert_eq!(
        session.dispatch(Command::MirrorSelected, &mut ctx),
        Err(SymmetryError::EmptySelection)
    );
    drop(ctx);
    assert_eq!(mesh.points(), before);
    assert_eq!(history.undo_depth(), 0);
}

#[test]
fn pick_reference_uses_configured_sentinel() {
    let mut host = InMemoryHost::new("pCube1", vec![3, -2, -2, -2]);
    let mut session = SymmetrySession::default();
    assert!(matches!(
        session.pick_reference(&mut host),
        Err(SymmetryError::Conflict(TableConflict::PartnerOutOfRange { partner: -2, .. }))
    ));

    let config = ToolConfig {
        sentinel: -2,
        ..ToolConfig::default()
    };
    let mut session = SymmetrySession::new(config.into());
    let binding = session.pick_reference(&mut host).unwrap();
    assert_eq!(binding.table.pair_count(), 1);
    assert_eq!(binding.table.resolve_partner(3), Ok(0));
}
