use super::*;

use crate::error::{IllegalMove, MoveError, OutOfBounds};

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert_eq!(board.size(), DEFAULT_BOARD_SIZE);
    assert_eq!(board.last_stone(), Stone::Empty);
    for row in 0..15 {
        for col in 0..15 {
            assert_eq!(board.get(row, col).unwrap(), Stone::Empty);
        }
    }
}

#[test]
fn test_compact_board_size() {
    let board = Board::with_size(10);
    assert_eq!(board.size(), 10);
    assert_eq!(board.get(9, 9).unwrap(), Stone::Empty);
    assert_eq!(
        board.get(10, 0),
        Err(OutOfBounds {
            row: 10,
            col: 0,
            size: 10
        })
    );
}

#[test]
fn test_place_and_get() {
    let mut board = Board::new();
    board.place((0, 0), Stone::Black).unwrap();
    assert_eq!(board.get(0, 0).unwrap(), Stone::Black);
    assert_eq!(board.last_stone(), Stone::Black);

    board.place((0, 1), Stone::White).unwrap();
    assert_eq!(board.get(0, 1).unwrap(), Stone::White);
    assert_eq!(board.last_stone(), Stone::White);
}

#[test]
fn test_opening_must_be_black() {
    let mut board = Board::new();
    assert_eq!(
        board.place((5, 5), Stone::White),
        Err(MoveError::Illegal(IllegalMove::WrongOpeningColor {
            expected: Stone::Black
        }))
    );
    // The rejected move left nothing behind.
    assert_eq!(board.get(5, 5).unwrap(), Stone::Empty);
    board.place((5, 5), Stone::Black).unwrap();
}

#[test]
fn test_alternation_enforced() {
    let mut board = Board::new();
    board.place((0, 0), Stone::Black).unwrap();
    assert_eq!(
        board.place((2, 3), Stone::Black),
        Err(MoveError::Illegal(IllegalMove::RepeatedColor {
            stone: Stone::Black
        }))
    );

    board.place((2, 3), Stone::White).unwrap();
    assert_eq!(
        board.place((2, 4), Stone::White),
        Err(MoveError::Illegal(IllegalMove::RepeatedColor {
            stone: Stone::White
        }))
    );

    // A long accepted sequence never repeats a color.
    board.place((3, 4), Stone::Black).unwrap();
    board.place((5, 4), Stone::White).unwrap();
    board.place((6, 3), Stone::Black).unwrap();
    assert_eq!(board.last_stone(), Stone::Black);
}

#[test]
fn test_no_overwrite() {
    let mut board = Board::new();
    board.setup().fill((4, 4), Stone::White);

    for stone in [Stone::Black, Stone::White] {
        assert_eq!(
            board.place((4, 4), stone),
            Err(MoveError::Illegal(IllegalMove::NotEmpty { row: 4, col: 4 }))
        );
    }
    assert_eq!(board.get(4, 4).unwrap(), Stone::White);
}

#[test]
fn test_cannot_place_empty() {
    let mut board = Board::new();
    assert_eq!(
        board.place((3, 5), Stone::Empty),
        Err(MoveError::Illegal(IllegalMove::CannotPlaceEmpty))
    );
}

#[test]
fn test_place_out_of_bounds() {
    let mut board = Board::new();
    assert_eq!(
        board.place((15, 0), Stone::Black),
        Err(MoveError::OutOfBounds(OutOfBounds {
            row: 15,
            col: 0,
            size: 15
        }))
    );
    assert_eq!(
        board.place((0, 15), Stone::Black),
        Err(MoveError::OutOfBounds(OutOfBounds {
            row: 0,
            col: 15,
            size: 15
        }))
    );
}

#[test]
fn test_get_out_of_bounds_includes_negative() {
    let board = Board::new();
    assert!(board.get(-1, 0).is_err());
    assert!(board.get(0, -1).is_err());
    assert!(board.get(15, 3).is_err());
}

#[test]
fn test_negative_index_rejected() {
    let mut board = Board::new();
    assert_eq!(
        board.place((-1, -3), Stone::Black),
        Err(MoveError::Illegal(IllegalMove::NegativeIndex {
            row: -1,
            col: -3
        }))
    );
}

#[test]
fn test_multi_cell_selectors_are_malformed_moves() {
    let mut board = Board::new();
    let selectors = [
        Selector::ColSpan { row: 1, cols: 2..5 },
        Selector::RowSpan { rows: 1..3, col: 2 },
        Selector::Block {
            rows: 1..3,
            cols: 2..5,
        },
        Selector::Rows(vec![2, 3]),
        Selector::Pairs {
            rows: vec![2, 4],
            cols: vec![3, 3],
        },
    ];
    for selector in selectors {
        assert_eq!(
            board.place(selector, Stone::Black),
            Err(MoveError::Illegal(IllegalMove::MalformedIndex))
        );
    }
    assert_eq!(board.snapshot().stone_count(), 0);
}

#[test]
fn test_validation_order() {
    let mut board = Board::new();
    board.setup().fill((2, 2), Stone::Black);

    // Occupancy outranks the empty-stone check.
    assert_eq!(
        board.place((2, 2), Stone::Empty),
        Err(MoveError::Illegal(IllegalMove::NotEmpty { row: 2, col: 2 }))
    );
    // Too-large outranks everything after the selector shape.
    assert_eq!(
        board.place((20, 3), Stone::Empty),
        Err(MoveError::OutOfBounds(OutOfBounds {
            row: 20,
            col: 3,
            size: 15
        }))
    );
    // The empty-stone check outranks the negative check.
    assert_eq!(
        board.place((-1, 2), Stone::Empty),
        Err(MoveError::Illegal(IllegalMove::CannotPlaceEmpty))
    );

    // The negative check outranks the alternation check.
    board.place((0, 0), Stone::Black).unwrap();
    assert_eq!(
        board.place((-1, 2), Stone::Black),
        Err(MoveError::Illegal(IllegalMove::NegativeIndex {
            row: -1,
            col: 2
        }))
    );
}

#[test]
fn test_win_reported_from_the_placing_call() {
    let mut board = Board::new();
    board.place((5, 5), Stone::Black).unwrap();
    board.place((6, 5), Stone::White).unwrap();
    board.place((6, 6), Stone::Black).unwrap();
    board.place((5, 6), Stone::White).unwrap();
    board.place((7, 7), Stone::Black).unwrap();
    board.place((8, 8), Stone::White).unwrap();
    board.place((4, 4), Stone::Black).unwrap();
    board.place((4, 7), Stone::White).unwrap();

    // (3,3) completes the falling diagonal (3,3)..(7,7).
    assert_eq!(
        board.place((3, 3), Stone::Black),
        Err(MoveError::Win(Stone::Black))
    );
    // The winning stone is committed, not rolled back.
    assert_eq!(board.get(3, 3).unwrap(), Stone::Black);
    assert_eq!(board.last_stone(), Stone::Black);
}

#[test]
fn test_board_stays_in_winning_state() {
    let mut board = Board::new();
    board.setup().fill(
        Selector::ColSpan { row: 7, cols: 2..7 },
        Stone::Black,
    );
    assert_eq!(
        board.place((0, 0), Stone::Black),
        Err(MoveError::Win(Stone::Black))
    );
    // Any later accepted placement sweeps the same five again.
    assert_eq!(
        board.place((0, 1), Stone::White),
        Err(MoveError::Win(Stone::Black))
    );
}

fn assert_five_is_detected(rows: [i32; 5], cols: [i32; 5], stone: Stone) {
    let mut board = Board::new();
    board.setup().fill(
        Selector::Pairs {
            rows: rows.to_vec(),
            cols: cols.to_vec(),
        },
        stone,
    );
    // The next accepted placement runs the sweep and reports the five.
    assert_eq!(
        board.place((14, 14), Stone::Black),
        Err(MoveError::Win(stone)),
        "five of {stone:?} at rows {rows:?}, cols {cols:?} not detected"
    );
}

#[test]
fn test_win_symmetry_all_orientations_and_orders() {
    for stone in [Stone::Black, Stone::White] {
        // Row, built left-to-right and right-to-left.
        assert_five_is_detected([4, 4, 4, 4, 4], [1, 2, 3, 4, 5], stone);
        assert_five_is_detected([4, 4, 4, 4, 4], [5, 4, 3, 2, 1], stone);
        // Column.
        assert_five_is_detected([1, 2, 3, 4, 5], [1, 1, 1, 1, 1], stone);
        assert_five_is_detected([5, 4, 3, 2, 1], [1, 1, 1, 1, 1], stone);
        // Falling diagonal.
        assert_five_is_detected([1, 2, 3, 4, 5], [1, 2, 3, 4, 5], stone);
        assert_five_is_detected([5, 4, 3, 2, 1], [5, 4, 3, 2, 1], stone);
        // Rising diagonal.
        assert_five_is_detected([1, 2, 3, 4, 5], [5, 4, 3, 2, 1], stone);
        assert_five_is_detected([5, 4, 3, 2, 1], [1, 2, 3, 4, 5], stone);
    }
}

#[test]
fn test_interposed_stone_prevents_win() {
    let mut board = Board::new();
    board.setup().fill(
        Selector::Pairs {
            rows: vec![1, 2, 3, 4, 5],
            cols: vec![5, 4, 3, 2, 1],
        },
        Stone::White,
    );
    board.setup().fill((3, 3), Stone::Black);
    board.place((14, 14), Stone::Black).unwrap();
}

#[test]
fn test_win_via_bulk_selectors() {
    // A full row seeded through each bulk form holds a five.
    let fills = [
        Selector::ColSpan { row: 1, cols: 1..6 },
        Selector::RowSpan { rows: 0..15, col: 1 },
        Selector::Block {
            rows: 1..6,
            cols: 1..6,
        },
        Selector::Rows(vec![1]),
    ];
    for fill in fills {
        let mut board = Board::new();
        board.setup().fill(fill.clone(), Stone::White);
        assert_eq!(
            board.place((14, 14), Stone::Black),
            Err(MoveError::Win(Stone::White)),
            "no win detected after filling {fill:?}"
        );
    }
}

#[test]
fn test_setup_does_not_update_last_stone() {
    let mut board = Board::new();
    board.setup().fill((4, 4), Stone::White);
    assert_eq!(board.last_stone(), Stone::Empty);
    // The opening rule still applies after seeding.
    assert_eq!(
        board.place((5, 5), Stone::White),
        Err(MoveError::Illegal(IllegalMove::WrongOpeningColor {
            expected: Stone::Black
        }))
    );
}

#[test]
fn test_clone_round_trip() {
    let mut board = Board::new();
    board.place((7, 7), Stone::Black).unwrap();
    board.place((7, 8), Stone::White).unwrap();

    let clone = board.clone_board();
    assert_eq!(clone.snapshot(), board.snapshot());
    // last_stone is reset: clones are for analysis, and resumed play
    // re-enters the opening rule.
    assert_eq!(clone.last_stone(), Stone::Empty);
    let mut clone = clone;
    assert_eq!(
        clone.place((0, 0), Stone::White),
        Err(MoveError::Illegal(IllegalMove::WrongOpeningColor {
            expected: Stone::Black
        }))
    );
}

#[test]
fn test_clone_is_isolated_from_original() {
    let mut board = Board::new();
    board.place((7, 7), Stone::Black).unwrap();

    let mut clone = board.clone_board();
    clone.setup().fill(
        Selector::Block {
            rows: 0..3,
            cols: 0..3,
        },
        Stone::White,
    );
    assert_eq!(board.snapshot().stone_count(), 1);
    assert_eq!(board.get(0, 0).unwrap(), Stone::Empty);
}

#[test]
fn test_snapshot_is_independent() {
    let mut board = Board::new();
    board.place((7, 7), Stone::Black).unwrap();

    let mut snapshot = board.snapshot();
    snapshot.set(7, 7, Stone::Empty);
    snapshot.set(1, 1, Stone::White);
    assert_eq!(board.get(7, 7).unwrap(), Stone::Black);
    assert_eq!(board.get(1, 1).unwrap(), Stone::Empty);
}
