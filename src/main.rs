//! Command-line entry point.
//!
//! Run with no argument to print the number of ways to place five mutually
//! non-attacking queens and five knights on the 8x8 board. Run with `test`
//! to execute the fixed regression checks; each failing check prints one
//! diagnostic line and a clean pass prints nothing.

use queens_knights::search::half_board::half_solutions;
use queens_knights::verify::check_suite::run_check_suite;

fn main() {
    let mode = std::env::args().nth(1);

    if mode.as_deref() == Some("test") {
        for failure in run_check_suite() {
            println!("{}", failure.report());
        }
    } else {
        println!("{}", half_solutions(5, 5) * 2);
    }
}
