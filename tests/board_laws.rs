use std::cell::RefCell;
use std::rc::Rc;

use queens_board::board::{BoardError, ChangeEvent, ConflictBoard};
use queens_board::core::cell::Occupancy;

#[test]
fn empty_boards_of_any_size_are_conflict_free() {
    for n in 0..8 {
        let b = ConflictBoard::empty(n);
        assert!(!b.has_any_row_conflict(), "n={n}");
        assert!(!b.has_any_col_conflict(), "n={n}");
        assert!(!b.has_any_major_diagonal_conflict(), "n={n}");
        assert!(!b.has_any_minor_diagonal_conflict(), "n={n}");
        assert!(!b.has_any_queen_conflict(), "n={n}");
    }
}

#[test]
fn toggle_twice_restores_the_board() {
    let mut b = ConflictBoard::from_rows(&[
        vec![1, 0, 0, 0],
        vec![0, 0, 0, 1],
        vec![0, 0, 0, 0],
        vec![0, 1, 0, 0],
    ])
    .unwrap();
    let before = b.to_matrix();
    let before_queen = b.has_any_queen_conflict();

    assert_eq!(b.toggle_piece(2, 1).unwrap(), Occupancy::Occupied);
    assert_eq!(b.toggle_piece(2, 1).unwrap(), Occupancy::Empty);

    assert_eq!(b.to_matrix(), before);
    assert_eq!(b.has_any_queen_conflict(), before_queen);
}

#[test]
fn lone_piece_is_safe_until_attacked() {
    let mut b = ConflictBoard::empty(5);
    b.toggle_piece(2, 2).unwrap();
    assert!(!b.has_any_queen_conflict_at(2, 2).unwrap());

    // one attacker on the row, column, and each diagonal in turn
    for &(row, col) in &[(2, 4), (4, 2), (0, 0), (4, 4), (0, 4), (4, 0)] {
        let mut b = ConflictBoard::empty(5);
        b.toggle_piece(2, 2).unwrap();
        b.toggle_piece(row, col).unwrap();
        assert!(
            b.has_any_queen_conflict_at(2, 2).unwrap(),
            "attacker at ({row}, {col})"
        );
    }

    // a knight's-move neighbor shares no line
    let mut b = ConflictBoard::empty(5);
    b.toggle_piece(2, 2).unwrap();
    b.toggle_piece(0, 1).unwrap();
    assert!(!b.has_any_queen_conflict_at(2, 2).unwrap());
}

#[test]
fn non_square_rows_are_rejected() {
    let err = ConflictBoard::from_rows(&[vec![0, 0], vec![0]]).unwrap_err();
    assert_eq!(
        err,
        BoardError::NonSquare {
            row: 1,
            expected: 2,
            got: 1
        }
    );

    let err = ConflictBoard::from_rows(&[vec![0, 0, 0], vec![0, 0, 0]]).unwrap_err();
    assert_eq!(
        err,
        BoardError::NonSquare {
            row: 0,
            expected: 2,
            got: 3
        }
    );
}

#[test]
fn out_of_bounds_indices_are_rejected() {
    let mut b = ConflictBoard::empty(3);
    let before = b.to_matrix();

    assert_eq!(
        b.toggle_piece(3, 0).unwrap_err(),
        BoardError::OutOfBounds { row: 3, col: 0, n: 3 }
    );
    assert_eq!(
        b.toggle_piece(0, 7).unwrap_err(),
        BoardError::OutOfBounds { row: 0, col: 7, n: 3 }
    );
    assert_eq!(b.to_matrix(), before);

    assert_eq!(
        b.has_any_queen_conflict_at(3, 3).unwrap_err(),
        BoardError::OutOfBounds { row: 3, col: 3, n: 3 }
    );
}

#[test]
fn per_line_checks_are_total_over_any_index() {
    let b = ConflictBoard::from_rows(&[vec![1, 1], vec![0, 0]]).unwrap();
    assert!(b.has_row_conflict_at(0));
    assert!(!b.has_row_conflict_at(5));
    assert!(!b.has_col_conflict_at(9));
    assert!(!b.has_major_diagonal_conflict_at(99));
    assert!(!b.has_minor_diagonal_conflict_at(-1));
}

#[test]
fn nonzero_values_count_as_pieces() {
    let b = ConflictBoard::from_rows(&[vec![7, 0], vec![0, 255]]).unwrap();
    assert!(!b.has_any_rook_conflict());
    // (0,0) and (1,1) share major key 0
    assert!(b.has_any_major_diagonal_conflict());
    assert_eq!(b.to_matrix(), vec![vec![1, 0], vec![0, 1]]);
}

#[test]
fn subscribers_observe_each_toggle_until_removed() {
    let seen: Rc<RefCell<Vec<ChangeEvent>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);

    let mut b = ConflictBoard::empty(4);
    let id = b.on_change(move |e| sink.borrow_mut().push(*e));

    b.toggle_piece(1, 2).unwrap();
    b.toggle_piece(1, 2).unwrap();
    assert!(b.toggle_piece(9, 9).is_err());

    {
        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(
            seen[0],
            ChangeEvent {
                row: 1,
                col: 2,
                occupancy: Occupancy::Occupied
            }
        );
        assert_eq!(
            seen[1],
            ChangeEvent {
                row: 1,
                col: 2,
                occupancy: Occupancy::Empty
            }
        );
    }

    assert!(b.unsubscribe(id));
    assert!(!b.unsubscribe(id));
    b.toggle_piece(0, 0).unwrap();
    assert_eq!(seen.borrow().len(), 2);
}

#[test]
fn rows_expose_the_current_grid() {
    let mut b = ConflictBoard::empty(2);
    b.toggle_piece(0, 1).unwrap();

    let rows: Vec<Vec<Occupancy>> = b.rows().map(|r| r.to_vec()).collect();
    assert_eq!(
        rows,
        vec![
            vec![Occupancy::Empty, Occupancy::Occupied],
            vec![Occupancy::Empty, Occupancy::Empty],
        ]
    );
    assert_eq!(b.grid().get(0, 1), Occupancy::Occupied);
}
