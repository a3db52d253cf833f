//! Symmetry-reduced top-level driver.
//!
//! Mirroring a valid placement across the vertical mid-line yields another
//! valid placement with the same piece counts. The mirror keeps the topmost
//! queen in its row and flips its column `c -> 7 - c`, so exactly one
//! placement of each mirror pair has its first queen in columns 0..=3.
//! Scanning only those columns for the very first queen and doubling the
//! result therefore yields the full-board count at roughly half the cost.

use crate::board::board_grid::{Board, BOARD_SIZE};
use crate::placement::queen_placement::place_queen;
use crate::search::placement_count::{count_knights, count_queens_knights, ScanCursor};

/// Counts placements whose first (topmost) queen sits in the left half of its
/// row, starting from an empty board. `half_solutions(queens, knights) * 2`
/// equals `count_queens_knights` over the full board.
///
/// The reduction is only valid for the very first queen on an empty board;
/// this is not a general-purpose halving of arbitrary sub-searches.
pub fn half_solutions(queens: u32, knights: u32) -> u64 {
    let board = Board::empty();
    scan_first_queen(&board, queens, knights, ScanCursor::start())
}

fn scan_first_queen(board: &Board, queens: u32, knights: u32, cursor: ScanCursor) -> u64 {
    if queens == 0 {
        return count_knights(board, knights, ScanCursor::start());
    }
    if cursor.past_last_row() || queens as usize > BOARD_SIZE - cursor.row {
        return 0;
    }
    // Columns 4..=7 are the mirror images of columns 0..=3; skip to the next
    // candidate row for the first queen.
    if cursor.col > 3 {
        return scan_first_queen(board, queens, knights, cursor.next_row());
    }

    // The board is empty until the first queen lands, so every scanned
    // square is open: place here, or move on.
    let mut placed = *board;
    place_queen(&mut placed, cursor.row, cursor.col);

    count_queens_knights(&placed, queens - 1, knights, cursor.next_row())
        + scan_first_queen(board, queens, knights, cursor.next_col())
}

#[cfg(test)]
mod tests {
    use super::half_solutions;
    use crate::board::board_grid::Board;
    use crate::search::placement_count::{count_queens_knights, ScanCursor};

    #[test]
    fn doubled_half_count_matches_eight_queens() {
        assert_eq!(half_solutions(8, 0) * 2, 92);
    }

    #[test]
    fn one_queen_halves_to_32_placements() {
        assert_eq!(half_solutions(1, 0), 32);
    }

    #[test]
    fn doubled_half_count_matches_full_search_on_small_cases() {
        for (queens, knights) in [(1, 0), (1, 2), (2, 1), (3, 2), (4, 0), (5, 0)] {
            let board = Board::empty();
            let full = count_queens_knights(&board, queens, knights, ScanCursor::start());
            assert_eq!(
                half_solutions(queens, knights) * 2,
                full,
                "queens={queens} knights={knights}"
            );
        }
    }

    // Reference count pinned from a verified run of the full-board search;
    // this is the value the default CLI mode prints.
    #[test]
    fn five_queens_five_knights_have_sixteen_placements() {
        assert_eq!(half_solutions(5, 5) * 2, 16);

        let board = Board::empty();
        assert_eq!(count_queens_knights(&board, 5, 5, ScanCursor::start()), 16);
    }

    #[test]
    fn impossible_piece_counts_halve_to_zero() {
        assert_eq!(half_solutions(6, 6), 0);
        assert_eq!(half_solutions(9, 0), 0);
    }
}
