//! Recursive placement counters.
//!
//! Both counters walk the board in row-major order with an explicit
//! `ScanCursor` and return the number of complete valid placements in the
//! subtree below the current call. At every candidate square the search
//! splits into two disjoint futures: "place a piece here" on a private copy
//! of the board, and "skip this square" on the original. The counts of the
//! two futures are summed, place branch first.

use crate::board::board_grid::{Board, BOARD_SIZE};
use crate::placement::knight_placement::{can_place_knight, place_knight};
use crate::placement::queen_placement::place_queen;

/// Row-major scan position. `row` is the committed axis for queens; `col` is
/// the within-row cursor. Either coordinate may step one past the board edge;
/// the counters interpret that as row-wrap or termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanCursor {
    pub row: usize,
    pub col: usize,
}

impl ScanCursor {
    /// Top-left corner of the board.
    #[inline]
    pub const fn start() -> Self {
        Self { row: 0, col: 0 }
    }

    #[inline]
    pub const fn next_col(self) -> Self {
        Self {
            row: self.row,
            col: self.col + 1,
        }
    }

    #[inline]
    pub const fn next_row(self) -> Self {
        Self {
            row: self.row + 1,
            col: 0,
        }
    }

    #[inline]
    pub const fn past_last_row(self) -> bool {
        self.row >= BOARD_SIZE
    }

    #[inline]
    pub const fn past_last_col(self) -> bool {
        self.col >= BOARD_SIZE
    }
}

/// Counts the ways to place `knights_left` mutually compatible knights on
/// `board`, scanning from `cursor` onward.
pub fn count_knights(board: &Board, knights_left: u32, cursor: ScanCursor) -> u64 {
    if knights_left == 0 {
        return 1;
    }
    if cursor.past_last_row() {
        return 0;
    }
    if cursor.past_last_col() {
        return count_knights(board, knights_left, cursor.next_row());
    }

    let here = board.square(cursor.row, cursor.col);
    if here.is_open() && can_place_knight(board, cursor.row, cursor.col) {
        let mut placed = *board;
        place_knight(&mut placed, cursor.row, cursor.col);

        count_knights(&placed, knights_left - 1, cursor.next_col())
            + count_knights(board, knights_left, cursor.next_col())
    } else {
        count_knights(board, knights_left, cursor.next_col())
    }
}

/// Counts the ways to place `queens_left` queens followed by `knights_left`
/// knights, no piece attacking any other, scanning queen candidates from
/// `cursor` onward.
///
/// Queens commit one row at a time: after a placement the scan jumps to the
/// next row, so a branch with more queens left than rows left is dead and is
/// pruned immediately. Once the last queen is down, the knight scan restarts
/// from the top-left corner.
pub fn count_queens_knights(
    board: &Board,
    queens_left: u32,
    knights_left: u32,
    cursor: ScanCursor,
) -> u64 {
    if queens_left == 0 {
        return count_knights(board, knights_left, ScanCursor::start());
    }
    if cursor.past_last_row() || queens_left as usize > BOARD_SIZE - cursor.row {
        return 0;
    }
    if cursor.past_last_col() {
        return count_queens_knights(board, queens_left, knights_left, cursor.next_row());
    }

    if board.square(cursor.row, cursor.col).is_open() {
        let mut placed = *board;
        place_queen(&mut placed, cursor.row, cursor.col);

        count_queens_knights(&placed, queens_left - 1, knights_left, cursor.next_row())
            + count_queens_knights(board, queens_left, knights_left, cursor.next_col())
    } else {
        count_queens_knights(board, queens_left, knights_left, cursor.next_col())
    }
}

#[cfg(test)]
mod tests {
    use super::{count_knights, count_queens_knights, ScanCursor};
    use crate::board::board_grid::Board;
    use crate::placement::knight_placement::place_knight;
    use crate::placement::queen_placement::place_queen;

    #[test]
    fn one_knight_fits_on_any_of_the_64_squares() {
        let board = Board::empty();
        assert_eq!(count_knights(&board, 1, ScanCursor::start()), 64);
    }

    #[test]
    fn a_placed_knight_blocks_nine_squares_for_the_next() {
        let mut board = Board::empty();
        place_knight(&mut board, 4, 4);

        // 64 minus the knight's own square minus its 8 attacked squares.
        assert_eq!(count_knights(&board, 1, ScanCursor::start()), 55, "\n{board}");
    }

    #[test]
    fn a_placed_queen_leaves_28_knight_squares() {
        let mut board = Board::empty();
        place_queen(&mut board, 4, 4);

        // 64 minus the queen's square, her 27 attacked squares, and the 8
        // squares a knight would attack her from.
        assert_eq!(count_knights(&board, 1, ScanCursor::start()), 28, "\n{board}");
    }

    #[test]
    fn zero_knights_count_one_completion() {
        let board = Board::empty();
        assert_eq!(count_knights(&board, 0, ScanCursor::start()), 1);
        assert_eq!(
            count_knights(&board, 0, ScanCursor { row: 8, col: 0 }),
            1
        );
    }

    #[test]
    fn knights_left_past_last_row_count_nothing() {
        let board = Board::empty();
        assert_eq!(
            count_knights(&board, 1, ScanCursor { row: 8, col: 0 }),
            0
        );
    }

    #[test]
    fn eight_queens_have_92_solutions() {
        let board = Board::empty();
        assert_eq!(count_queens_knights(&board, 8, 0, ScanCursor::start()), 92);
    }

    #[test]
    fn nine_queens_have_no_solution() {
        let board = Board::empty();
        assert_eq!(count_queens_knights(&board, 9, 0, ScanCursor::start()), 0);
    }

    #[test]
    fn six_queens_and_six_knights_have_no_solution() {
        let board = Board::empty();
        assert_eq!(count_queens_knights(&board, 6, 6, ScanCursor::start()), 0);
    }

    #[test]
    fn queen_search_with_no_queens_delegates_to_knights() {
        let board = Board::empty();
        assert_eq!(count_queens_knights(&board, 0, 1, ScanCursor::start()), 64);
    }

    #[test]
    fn two_queens_on_a_two_row_remainder_are_still_reachable() {
        let board = Board::empty();
        let from_row_six = ScanCursor { row: 6, col: 0 };
        let from_row_seven = ScanCursor { row: 7, col: 0 };

        assert!(count_queens_knights(&board, 2, 0, from_row_six) > 0);
        assert_eq!(count_queens_knights(&board, 2, 0, from_row_seven), 0);
    }
}
