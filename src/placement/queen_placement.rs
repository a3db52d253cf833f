//! Queen placement and attack propagation.

use crate::board::board_grid::Board;
use crate::board::square_state::SquareState;

/// The eight `(d_row, d_col)` directions a queen attacks along.
const QUEEN_DIRECTIONS: [(i32, i32); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Places a queen at `(row, col)`: every square reachable along a rank, file,
/// or diagonal is marked `Attacked`, then the origin becomes `Queen`.
///
/// The target square must be `Open`; placing onto an occupied square corrupts
/// the board and is a caller error.
pub fn place_queen(board: &mut Board, row: usize, col: usize) {
    for (d_row, d_col) in QUEEN_DIRECTIONS {
        mark_ray(board, row as i32, col as i32, d_row, d_col);
    }
    board.set_square(row, col, SquareState::Queen);
}

/// Walks outward from `(row, col)` one direction step at a time until the
/// board edge, marking each square `Attacked`. Occupied squares keep their
/// state; the search never walks a queen ray into another piece because
/// placement candidates are filtered to `Open` squares first.
fn mark_ray(board: &mut Board, row: i32, col: i32, d_row: i32, d_col: i32) {
    let mut row = row + d_row;
    let mut col = col + d_col;

    while (0..8).contains(&row) && (0..8).contains(&col) {
        if board.square(row as usize, col as usize).is_open() {
            board.set_square(row as usize, col as usize, SquareState::Attacked);
        }
        row += d_row;
        col += d_col;
    }
}
