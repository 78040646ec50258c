//! Shape tests - rotation group structure and spawn geometry.

use blockfall::core::Shape;
use blockfall::types::{ShapeKind, BOARD_WIDTH};

fn rotated_n(shape: Shape, n: usize) -> Shape {
    (0..n).fold(shape, |s, _| s.rotated())
}

#[test]
fn test_rotation_has_order_four() {
    for kind in [
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::J,
        ShapeKind::L,
    ] {
        let shape = kind.shape();
        assert_ne!(rotated_n(shape, 1), shape, "{:?}", kind);
        assert_ne!(rotated_n(shape, 2), shape, "{:?}", kind);
        assert_ne!(rotated_n(shape, 3), shape, "{:?}", kind);
        assert_eq!(rotated_n(shape, 4), shape, "{:?}", kind);
    }
}

#[test]
fn test_o_shape_is_a_rotation_fixpoint() {
    let o = ShapeKind::O.shape();
    assert_eq!(o.rotated(), o);
}

#[test]
fn test_i_shape_has_rotation_order_two() {
    let i = ShapeKind::I.shape();
    assert_ne!(rotated_n(i, 1), i);
    assert_eq!(rotated_n(i, 2), i);
}

#[test]
fn test_rotation_preserves_cell_count() {
    for kind in ShapeKind::ALL {
        let shape = kind.shape();
        assert_eq!(shape.rotated().cells().len(), shape.cells().len());
    }
}

#[test]
fn test_rotation_never_mutates_the_input() {
    let s = ShapeKind::S.shape();
    let copy = s;
    let _ = s.rotated();
    assert_eq!(s, copy);
}

#[test]
fn test_spawn_x_centers_the_bounding_box() {
    // floor((10 - width) / 2)
    assert_eq!(ShapeKind::I.shape().spawn_x(), 3); // width 4
    assert_eq!(ShapeKind::T.shape().spawn_x(), 3); // width 3
    assert_eq!(ShapeKind::O.shape().spawn_x(), 4); // width 2

    for kind in ShapeKind::ALL {
        let shape = kind.shape();
        let x = shape.spawn_x();
        assert!(x >= 0);
        assert!(x + shape.width() as i8 <= BOARD_WIDTH as i8);
    }
}

#[test]
fn test_canonical_matrices_match_their_kinds() {
    // Spot checks on the exact patterns.
    let i = ShapeKind::I.shape();
    assert_eq!((i.width(), i.height()), (4, 1));

    let t = ShapeKind::T.shape();
    assert_eq!((t.width(), t.height()), (3, 2));
    assert!(t.filled(0, 0) && t.filled(0, 1) && t.filled(0, 2));
    assert!(!t.filled(1, 0) && t.filled(1, 1) && !t.filled(1, 2));

    let s = ShapeKind::S.shape();
    assert!(s.filled(0, 0) && s.filled(0, 1) && !s.filled(0, 2));
    assert!(!s.filled(1, 0) && s.filled(1, 1) && s.filled(1, 2));

    let z = ShapeKind::Z.shape();
    assert!(!z.filled(0, 0) && z.filled(0, 1) && z.filled(0, 2));
    assert!(z.filled(1, 0) && z.filled(1, 1) && !z.filled(1, 2));

    let j = ShapeKind::J.shape();
    assert!(j.filled(0, 0) && !j.filled(0, 1) && !j.filled(0, 2));
    assert!(j.filled(1, 0) && j.filled(1, 1) && j.filled(1, 2));

    let l = ShapeKind::L.shape();
    assert!(!l.filled(0, 0) && !l.filled(0, 1) && l.filled(0, 2));
    assert!(l.filled(1, 0) && l.filled(1, 1) && l.filled(1, 2));
}
