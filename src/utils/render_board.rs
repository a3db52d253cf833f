//! Terminal-oriented board renderer.
//!
//! Creates a human-readable grid view of a `Board` for debugging and test
//! diagnostics in text environments.

use std::fmt;

use crate::board::board_grid::{Board, BOARD_SIZE};
use crate::board::square_state::SquareState;

/// Render the board as a text grid, row 0 at the top.
///
/// `Q` queen, `N` knight, `x` attacked, `·` open.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  0 1 2 3 4 5 6 7\n");

    for row in 0..BOARD_SIZE {
        out.push(char::from(b'0' + row as u8));
        out.push(' ');

        for col in 0..BOARD_SIZE {
            out.push(square_glyph(board.square(row, col)));
            if col < BOARD_SIZE - 1 {
                out.push(' ');
            }
        }

        out.push('\n');
    }

    out
}

// Formatting a `Board` with `{}` goes through the renderer, so assertion
// messages and ad-hoc debugging get the grid view for free.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}

fn square_glyph(state: SquareState) -> char {
    match state {
        SquareState::Open => '·',
        SquareState::Attacked => 'x',
        SquareState::Queen => 'Q',
        SquareState::Knight => 'N',
    }
}
