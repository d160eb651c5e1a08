//! Snapshot, restore, and reset integration tests.

use rubiks_sim::core::{Color, Face, FaceletPos, Move};
use rubiks_sim::{CubeError, CubeRng, CubeSnapshot, RubiksCube};

// =============================================================================
// Isolation
// =============================================================================

#[test]
fn test_snapshot_unaffected_by_later_moves() {
    let mut cube = RubiksCube::new();
    cube.scramble(10, &mut CubeRng::new(11));

    let snapshot = cube.snapshot();
    let captured = *cube.state();

    cube.scramble(10, &mut CubeRng::new(12));
    cube.reset();

    assert_eq!(*snapshot.state(), captured);
}

#[test]
fn test_restore_reproduces_snapshot() {
    let mut cube = RubiksCube::new();
    cube.apply_notation("R U F' D2").unwrap();
    let snapshot = cube.snapshot();
    let expected = cube.clone();

    cube.scramble(40, &mut CubeRng::new(3));
    cube.restore(&snapshot);

    assert_eq!(cube, expected);
}

#[test]
fn test_restored_cube_does_not_alias_snapshot() {
    let mut cube = RubiksCube::new();
    let snapshot = cube.snapshot();

    cube.restore(&snapshot);
    cube.apply_notation("L").unwrap();

    assert!(snapshot.state().is_solved());
    assert!(!cube.is_solved());

    // The same snapshot can be restored repeatedly.
    cube.restore(&snapshot);
    assert!(cube.is_solved());
}

#[test]
fn test_backtracking_search_pattern() {
    let mut cube = RubiksCube::new();
    cube.apply_notation("R U").unwrap();
    let root = cube.snapshot();

    // Explore every single move from the root, restoring after each.
    let mut solving_moves = Vec::new();
    for mv in Move::ALL {
        cube.apply_move(mv);
        cube.apply_notation("R'").unwrap();
        if cube.is_solved() {
            solving_moves.push(mv);
        }
        cube.restore(&root);
    }

    assert_eq!(solving_moves, vec!["U'".parse::<Move>().unwrap()]);
    assert_eq!(cube.snapshot(), root);
}

#[test]
fn test_clone_is_independent() {
    let mut cube = RubiksCube::new();
    let copy = cube.clone();

    cube.apply_notation("B").unwrap();

    assert!(copy.is_solved());
    assert_ne!(cube, copy);
}

// =============================================================================
// Reset
// =============================================================================

#[test]
fn test_reset_after_scramble() {
    let mut cube = RubiksCube::new();
    cube.scramble(100, &mut CubeRng::new(99));

    cube.reset();

    assert!(cube.is_solved());
    assert_eq!(cube, RubiksCube::new());
    for face in Face::ALL {
        assert_eq!(cube.face(face).get(1, 1), face.home_color());
    }
}

#[test]
fn test_reset_then_scramble() {
    let mut cube = RubiksCube::new();
    cube.scramble(5, &mut CubeRng::new(1));

    cube.reset();
    cube.scramble(5, &mut CubeRng::new(1));

    let mut fresh = RubiksCube::new();
    fresh.scramble(5, &mut CubeRng::new(1));
    assert_eq!(cube, fresh);
}

// =============================================================================
// Persistence
// =============================================================================

#[test]
fn test_snapshot_bytes_roundtrip() {
    let mut cube = RubiksCube::new();
    cube.scramble(20, &mut CubeRng::new(5));
    let snapshot = cube.snapshot();

    let bytes = snapshot.to_bytes().unwrap();
    let decoded = CubeSnapshot::from_bytes(&bytes).unwrap();

    let mut other = RubiksCube::new();
    other.restore(&decoded);
    assert_eq!(other, cube);
}

#[test]
fn test_snapshot_json_roundtrip() {
    let mut cube = RubiksCube::new();
    cube.apply_notation("D' L").unwrap();
    let snapshot = cube.snapshot();

    let json = serde_json::to_string(&snapshot).unwrap();
    let decoded: CubeSnapshot = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded, snapshot);
}

#[test]
fn test_truncated_bytes_rejected() {
    let bytes = RubiksCube::new().snapshot().to_bytes().unwrap();

    let result = CubeSnapshot::from_bytes(&bytes[..bytes.len() - 1]);

    assert!(matches!(result, Err(CubeError::Decode(_))));
}

#[test]
fn test_snapshot_facelet_lookup() {
    let mut cube = RubiksCube::new();
    cube.apply_notation("F").unwrap();
    let snapshot = cube.snapshot();

    let pos: FaceletPos = "U21".parse().unwrap();
    assert_eq!(snapshot.state().facelet(pos), Color::Orange);
    assert_eq!(cube.facelet(pos), Color::Orange);
}
