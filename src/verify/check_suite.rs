//! Fixed regression checks against known combinatorial counts.
//!
//! Every check runs even when an earlier one fails; failures are collected
//! and reported together so one regression cannot mask another.

use crate::board::board_grid::Board;
use crate::search::half_board::half_solutions;
use crate::search::placement_count::{count_knights, count_queens_knights, ScanCursor};

struct SuiteCase {
    name: &'static str,
    expected: u64,
    compute: fn() -> u64,
}

const SUITE_CASES: &[SuiteCase] = &[
    SuiteCase {
        name: "one_knight_open_board",
        expected: 64,
        compute: || count_knights(&Board::empty(), 1, ScanCursor::start()),
    },
    SuiteCase {
        name: "eight_queens",
        expected: 92,
        compute: || count_queens_knights(&Board::empty(), 8, 0, ScanCursor::start()),
    },
    SuiteCase {
        name: "eight_queens_half_doubled",
        expected: 92,
        compute: || half_solutions(8, 0) * 2,
    },
    SuiteCase {
        name: "six_queens_six_knights",
        expected: 0,
        compute: || count_queens_knights(&Board::empty(), 6, 6, ScanCursor::start()),
    },
];

/// One mismatched check: the search returned `actual` where the pinned
/// reference count is `expected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckFailure {
    pub name: &'static str,
    pub expected: u64,
    pub actual: u64,
}

impl CheckFailure {
    pub fn report(&self) -> String {
        format!(
            "check {} failed: expected {}, got {}",
            self.name, self.expected, self.actual
        )
    }
}

/// Runs all fixed checks and returns the failures, empty on a clean pass.
pub fn run_check_suite() -> Vec<CheckFailure> {
    let mut failures = Vec::new();

    for case in SUITE_CASES {
        let actual = (case.compute)();
        if actual != case.expected {
            failures.push(CheckFailure {
                name: case.name,
                expected: case.expected,
                actual,
            });
        }
    }

    failures
}
