//! Cube model tests - rotation algorithm invariants

use std::collections::HashSet;

use tui_rubik::core::{Cube, CubeError};
use tui_rubik::types::{Axis, Color, Move, Position};

fn solved(size: u8) -> Cube {
    Cube::new(size).unwrap()
}

fn full_coordinate_cube(limit: i8) -> HashSet<Position> {
    let mut positions = HashSet::new();
    for x in -limit..=limit {
        for y in -limit..=limit {
            for z in -limit..=limit {
                positions.insert(Position::new(x, y, z));
            }
        }
    }
    positions
}

/// Number of non-zero-magnitude-limit coordinates, i.e. 3 for corners,
/// 2 for edges, 1 for face centers, 0 for the core (size 3).
fn shell_degree(position: Position, limit: i8) -> usize {
    [position.x, position.y, position.z]
        .iter()
        .filter(|c| c.abs() == limit)
        .count()
}

#[test]
fn test_construction_sizes() {
    for size in [1u8, 3, 5, 7] {
        let cube = solved(size);
        assert_eq!(cube.size(), size);
        assert_eq!(cube.coord_limit(), (size / 2) as i8);
        assert_eq!(cube.pieces().len(), (size as usize).pow(3));
    }

    assert_eq!(Cube::new(0), Err(CubeError::InvalidSize(0)));
    assert_eq!(Cube::new(2), Err(CubeError::InvalidSize(2)));
    assert_eq!(Cube::new(6), Err(CubeError::InvalidSize(6)));
}

#[test]
fn test_solved_coloring_matches_shell_rule() {
    let cube = solved(5);
    let limit = cube.coord_limit();

    for (&position, piece) in cube.pieces() {
        let expected_x = if position.x == limit {
            Some(Color::Orange)
        } else if position.x == -limit {
            Some(Color::Red)
        } else {
            None
        };
        let expected_y = if position.y == limit {
            Some(Color::Yellow)
        } else if position.y == -limit {
            Some(Color::White)
        } else {
            None
        };
        let expected_z = if position.z == limit {
            Some(Color::Green)
        } else if position.z == -limit {
            Some(Color::Blue)
        } else {
            None
        };

        assert_eq!(piece.color(Axis::X), expected_x, "at {position:?}");
        assert_eq!(piece.color(Axis::Y), expected_y, "at {position:?}");
        assert_eq!(piece.color(Axis::Z), expected_z, "at {position:?}");
    }
}

#[test]
fn test_bijection_holds_after_move_sequences() {
    for size in [3u8, 5] {
        let mut cube = solved(size);
        cube.apply_notation("R U Fi L2 D Bi U2 R2 Li F").unwrap();

        let expected = full_coordinate_cube(cube.coord_limit());
        let actual: HashSet<Position> = cube.pieces().keys().copied().collect();
        assert_eq!(actual, expected);
        assert_eq!(cube.pieces().len(), (size as usize).pow(3));
    }
}

#[test]
fn test_shell_color_invariant_survives_rotation() {
    let mut cube = solved(3);
    cube.apply_notation("F R U Ri Ui Fi B2 D Li").unwrap();
    let limit = cube.coord_limit();

    for (&position, piece) in cube.pieces() {
        for axis in Axis::ALL {
            let on_shell = position.get(axis).abs() == limit;
            assert_eq!(
                piece.color(axis).is_some(),
                on_shell,
                "axis {axis:?} at {position:?}"
            );
        }
    }
}

#[test]
fn test_quarter_turn_has_order_four() {
    for mv in [Move::R, Move::L, Move::U, Move::D, Move::F, Move::B] {
        let mut cube = solved(3);
        cube.apply_move(mv);
        assert_ne!(cube, solved(3), "{mv:?} must change the cube");

        for _ in 0..3 {
            cube.apply_move(mv);
        }
        assert_eq!(cube, solved(3), "{mv:?}^4 must be the identity");
    }
}

#[test]
fn test_inverse_cancels_quarter_turn() {
    let pairs = [
        (Move::R, Move::Ri),
        (Move::L, Move::Li),
        (Move::U, Move::Ui),
        (Move::D, Move::Di),
        (Move::F, Move::Fi),
        (Move::B, Move::Bi),
    ];
    for (turn, inverse) in pairs {
        let mut cube = solved(3);
        cube.apply_move(turn);
        cube.apply_move(inverse);
        assert_eq!(cube, solved(3), "{turn:?} then {inverse:?}");

        // And in the other order.
        cube.apply_move(inverse);
        cube.apply_move(turn);
        assert_eq!(cube, solved(3));
    }
}

#[test]
fn test_double_turn_is_two_quarter_turns() {
    let pairs = [
        (Move::R, Move::R2),
        (Move::L, Move::L2),
        (Move::U, Move::U2),
        (Move::D, Move::D2),
        (Move::F, Move::F2),
        (Move::B, Move::B2),
    ];
    for (quarter, double) in pairs {
        let mut by_double = solved(3);
        by_double.apply_move(double);

        let mut by_quarters = solved(3);
        by_quarters.apply_move(quarter);
        by_quarters.apply_move(quarter);

        assert_eq!(by_double, by_quarters, "{double:?} == {quarter:?} twice");

        // A 180° turn composed with itself is the identity.
        by_double.apply_move(double);
        assert_eq!(by_double, solved(3));
    }
}

#[test]
fn test_commutator_returns_to_solved() {
    let mut cube = solved(3);
    for _ in 0..3 {
        cube.apply_notation("R U Ri Ui").unwrap();
    }
    assert_eq!(cube, solved(3));
}

#[test]
fn test_chess_pattern_moves_edges_to_antipodes() {
    let start = solved(3);
    let mut cube = start.clone();
    cube.chess_pattern();
    assert_ne!(cube, start);

    for (&position, piece) in start.pieces() {
        let degree = shell_degree(position, 1);
        if degree == 2 {
            // Edge pieces swap with their antipodes, labels untouched: every
            // quarter-turn pair reorients them twice about the same axis.
            let antipode = Position::new(-position.x, -position.y, -position.z);
            assert_eq!(cube.piece_at(antipode), Some(piece), "edge at {position:?}");
        } else {
            // Corners, face centers and the core end up exactly where they
            // started.
            assert_eq!(cube.piece_at(position), Some(piece), "at {position:?}");
        }
    }

    // The pattern is an involution.
    cube.chess_pattern();
    assert_eq!(cube, start);
}

#[test]
fn test_chess_pattern_matches_its_notation() {
    let mut by_method = solved(3);
    by_method.chess_pattern();

    let mut by_notation = solved(3);
    by_notation.apply_notation("R2 L2 B2 F2 U2 D2").unwrap();

    assert_eq!(by_method, by_notation);
}

#[test]
fn test_unknown_move_leaves_cube_untouched() {
    let mut cube = solved(3);
    cube.apply_notation("R U").unwrap();
    let before = cube.clone();

    let err = cube.apply_notation("Q").unwrap_err();
    assert_eq!(err, CubeError::UnknownMove("Q".to_string()));
    assert_eq!(cube, before);

    // Lowercase face names are outside the vocabulary too.
    let err = cube.apply_notation("r").unwrap_err();
    assert_eq!(err, CubeError::UnknownMove("r".to_string()));
    assert_eq!(cube, before);
}
