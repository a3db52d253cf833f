//! Knight placement, attack propagation, and the queen-conflict check.

use crate::board::board_grid::Board;
use crate::board::square_state::SquareState;

/// The eight `(d_row, d_col)` knight-move offsets.
const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Places a knight at `(row, col)`: each on-board knight-move destination is
/// marked `Attacked`, then the origin becomes `Knight`.
///
/// The target square must be `Open`; placing onto an occupied square corrupts
/// the board and is a caller error.
pub fn place_knight(board: &mut Board, row: usize, col: usize) {
    for (to_row, to_col) in knight_destinations(row, col) {
        if board.square(to_row, to_col).is_open() {
            board.set_square(to_row, to_col, SquareState::Attacked);
        }
    }
    board.set_square(row, col, SquareState::Knight);
}

/// True iff no square a knight at `(row, col)` would attack holds a `Queen`.
///
/// Queen rays already mark their squares `Attacked`, but a knight's attack
/// pattern is not a queen's: a knight on an un-attacked square can still
/// attack a queen, so this mutual knight-vs-queen check is required on top of
/// the caller's `Open` guard. Whether `(row, col)` itself is occupied or
/// attacked is deliberately not checked here.
pub fn can_place_knight(board: &Board, row: usize, col: usize) -> bool {
    knight_destinations(row, col).all(|(to_row, to_col)| {
        board.square(to_row, to_col) != SquareState::Queen
    })
}

fn knight_destinations(row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
    KNIGHT_OFFSETS.iter().filter_map(move |(d_row, d_col)| {
        let to_row = row as i32 + d_row;
        let to_col = col as i32 + d_col;
        if (0..8).contains(&to_row) && (0..8).contains(&to_col) {
            Some((to_row as usize, to_col as usize))
        } else {
            None
        }
    })
}
