//! Cross projection tests - cube state to terminal tiles

use tui_rubik::core::Cube;
use tui_rubik::term::{cross_grid, render_plain, CubeView, FrameBuffer, Hud, Viewport};
use tui_rubik::types::Face;

#[test]
fn test_solved_cross_layout() {
    let cube = Cube::new(3).unwrap();
    let expected = "\
...YYY...
...YYY...
...YYY...
RRRGGGOOO
RRRGGGOOO
RRRGGGOOO
...WWW...
...WWW...
...WWW...
...BBB...
...BBB...
...BBB...
";
    assert_eq!(render_plain(&cube), expected);
}

#[test]
fn test_front_turn_cross_layout() {
    let mut cube = Cube::new(3).unwrap();
    cube.apply_notation("F").unwrap();
    // The front face stays green; the ring around it cycles Up→Right→Down→Left.
    let expected = "\
...YYY...
...YYY...
...RRR...
RRWGGGYOO
RRWGGGYOO
RRWGGGYOO
...OOO...
...WWW...
...WWW...
...BBB...
...BBB...
...BBB...
";
    assert_eq!(render_plain(&cube), expected);
}

#[test]
fn test_chess_pattern_cross_layout() {
    let mut cube = Cube::new(3).unwrap();
    cube.chess_pattern();
    // Every face checkers its own color with the opposite face's color.
    let expected = "\
...YWY...
...WYW...
...YWY...
RORGBGORO
OROBGBROR
RORGBGORO
...WYW...
...YWY...
...WYW...
...BGB...
...GBG...
...BGB...
";
    assert_eq!(render_plain(&cube), expected);
}

#[test]
fn test_cross_grid_dimensions_scale_with_size() {
    for size in [1usize, 3, 5] {
        let cube = Cube::new(size as u8).unwrap();
        let grid = cross_grid(&cube);
        assert_eq!(grid.len(), 3 * size * 4 * size);
        // Every face contributes size^2 tiles.
        let filled = grid.iter().filter(|tile| tile.is_some()).count();
        assert_eq!(filled, 6 * size * size);
    }
}

#[test]
fn test_render_into_paints_tiles_and_hud() {
    let cube = Cube::new(3).unwrap();
    let view = CubeView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(0, 0);

    let hud = Hud {
        move_count: 2,
        last_move: None,
        prompt: None,
        message: Some("hello"),
    };
    view.render_into(&cube, &hud, viewport, &mut fb);

    assert_eq!(fb.width(), 80);
    assert_eq!(fb.height(), 24);

    // Some cells carry a non-default background (the cube tiles).
    let default_bg = tui_rubik::term::CellStyle::default().bg;
    let painted = (0..24u16)
        .flat_map(|y| (0..80u16).map(move |x| (x, y)))
        .filter(|&(x, y)| fb.get(x, y).unwrap().style.bg != default_bg)
        .count();
    // 54 tiles, two cells each.
    assert_eq!(painted, 108);
}

#[test]
fn test_face_hit_finds_every_face_center() {
    let view = CubeView::default();
    let viewport = Viewport::new(100, 40);
    // For a 3-cube at 2x1 tiles the cross is 18 cells wide and 12 tall with
    // a 4-row HUD, centered: origin (41, 12).
    let (ox, oy) = (41u16, 12u16);

    // The middle tile of each face region maps to that face's center.
    let cases = [
        (Face::Up, 4, 1),
        (Face::Left, 1, 4),
        (Face::Front, 4, 4),
        (Face::Right, 7, 4),
        (Face::Down, 4, 7),
        (Face::Back, 4, 10),
    ];
    for (face, tile_col, tile_row) in cases {
        let hit = view
            .face_hit(3, viewport, ox + tile_col * 2, oy + tile_row)
            .unwrap_or_else(|| panic!("face {face:?} never hit"));
        assert_eq!(hit.face, face);
        assert_eq!(hit.tile, (1, 1));
    }

    // Cross corners and cells outside the cross are misses.
    assert_eq!(view.face_hit(3, viewport, ox, oy), None);
    assert_eq!(view.face_hit(3, viewport, 0, 0), None);
}
