use approx::assert_abs_diff_eq;
use glam::DVec3;
use sym_mesh::host::{InMemoryHost, InMemoryMesh, PointBuffer};
use sym_mesh::{
    check, mirror, EditMode, History, MirrorAxis, Side, SymmetrySession, SymmetryTable, Tolerance,
    VertexEditor,
};

/// A ring of eight vertices symmetric about X = 0, with two on the centerline.
fn ring() -> (Vec<DVec3>, Vec<i64>) {
    let left: Vec<DVec3> = (0..3)
        .map(|i| {
            let angle = 0.4 + 0.8 * f64::from(i);
            DVec3::new(angle.cos().abs() + 0.1, angle.sin(), 0.1 * f64::from(i))
        })
        .collect();
    let mut points = left.clone();
    points.push(DVec3::new(0.0, 1.0, 0.0));
    points.push(DVec3::new(0.0, -1.0, 0.0));
    points.extend(left.iter().rev().map(|p| mirror(*p, MirrorAxis::X)));
    // 0↔7, 1↔6, 2↔5; 3 and 4 sit on the centerline.
    let half = vec![7, 6, 5, -1, -1, -1, -1, -1];
    (points, half)
}

#[test]
fn table_inverse_holds() {
    let (_, half) = ring();
    let table = SymmetryTable::from_half_mapping(&half).unwrap();
    for (left, right) in table.pairs(Side::Left) {
        assert_eq!(table.right_to_left()[&table.left_to_right()[&left]], left);
        assert_eq!(table.resolve_partner(right).unwrap(), left);
    }
}

#[test]
fn symmetric_ring_passes_at_any_tolerance() {
    let (points, half) = ring();
    let table = SymmetryTable::from_half_mapping(&half).unwrap();
    for text in ["0", "0.001", "1e-9", "100"] {
        let tol = Tolerance::parse(text).unwrap();
        for side in [Side::Left, Side::Right] {
            assert!(check(&points, &table, side, tol, MirrorAxis::X)
                .unwrap()
                .is_empty());
        }
    }
}

#[test]
fn displacement_threshold_is_inclusive() {
    let (mut points, half) = ring();
    let table = SymmetryTable::from_half_mapping(&half).unwrap();
    let d = 0.125;
    points[7].z += d;
    assert_abs_diff_eq!(points[7].z - points[0].z, d);

    let below = Tolerance::new(0.0625).unwrap();
    let at = Tolerance::new(d).unwrap();
    assert_eq!(check(&points, &table, Side::Left, below, MirrorAxis::X).unwrap(), vec![0]);
    assert!(check(&points, &table, Side::Left, at, MirrorAxis::X).unwrap().is_empty());
    assert_eq!(check(&points, &table, Side::Right, below, MirrorAxis::X).unwrap(), vec![7]);
}

#[test]
fn mirror_then_undo_round_trips_every_selection() {
    let (mut points, half) = ring();
    points[0].y += 0.3;
    points[5].x -= 0.2;
    let table = SymmetryTable::from_half_mapping(&half).unwrap();
    let editor = VertexEditor::new(&table, MirrorAxis::X);

    let selections: [&[usize]; 4] = [&[0], &[5], &[0, 1, 2], &[0, 7, 2, 6]];
    for selected in selections {
        let mut mesh = InMemoryMesh::new("ring", points.clone());
        let mut edit = editor.apply(&mut mesh, selected, EditMode::Mirror).unwrap();
        edit.record.undo(&mut mesh);
        assert_eq!(mesh.points(), points, "selection {selected:?}");
    }
}

#[test]
fn mirroring_left_half_makes_mesh_symmetric() {
    let (mut points, half) = ring();
    for p in &mut points[5..] {
        p.y += 0.05;
    }
    let table = SymmetryTable::from_half_mapping(&half).unwrap();
    let tol = Tolerance::default();
    assert_eq!(
        check(&points, &table, Side::Left, tol, MirrorAxis::X).unwrap(),
        vec![0, 1, 2]
    );

    let edit = VertexEditor::new(&table, MirrorAxis::X)
        .plan(&points, &[0, 1, 2], EditMode::Mirror)
        .unwrap();
    assert!(check(edit.points(), &table, Side::Left, tol, MirrorAxis::X)
        .unwrap()
        .is_empty());
}

#[test]
fn session_workflow_with_history() {
    let (mut points, half) = ring();
    points[7].z = 0.5;
    let mut host = InMemoryHost::new("|rig|ring", half);
    let mut mesh = InMemoryMesh::new("|rig|ring", points.clone());
    let mut history = History::default();
    let mut session = SymmetrySession::default();

    session.pick_reference(&mut host).unwrap();
    let report = session.check(&mesh).unwrap();
    assert_eq!(report.components(), vec!["|rig|ring.vtx[0]"]);

    host.select(&[7]);
    session
        .mirror_selected(&mut mesh, &host, &mut history, false)
        .unwrap();
    // Selecting the right vertex copies its mirror onto the left one.
    assert_eq!(mesh.as_slice()[0], mirror(points[7], MirrorAxis::X));
    assert!(session.check(&mesh).unwrap().is_symmetric());

    history.undo(&mut mesh).unwrap();
    assert_eq!(mesh.as_slice(), points.as_slice());
    assert_eq!(mesh.surface_updates(), 2);
}
