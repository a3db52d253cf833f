//! Fixed 8x8 board state container.
//!
//! `Board` is a plain value type: copying it is the branching mechanism of
//! the search. A branch that wants to try a placement copies the board and
//! mutates the copy; the sibling "skip this square" branch keeps reading the
//! original. No undo logic exists anywhere.

use crate::board::square_state::SquareState;

pub const BOARD_SIZE: usize = 8;

/// 8x8 matrix of square states, indexed by `(row, col)` in `0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [[SquareState; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// A board with every square `Open`.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            squares: [[SquareState::Open; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    #[inline]
    pub fn square(&self, row: usize, col: usize) -> SquareState {
        self.squares[row][col]
    }

    // Mutation is reserved for the placement functions; callers go through
    // `place_queen` / `place_knight`.
    #[inline]
    pub(crate) fn set_square(&mut self, row: usize, col: usize, state: SquareState) {
        self.squares[row][col] = state;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}
