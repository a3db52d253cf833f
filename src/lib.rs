//! Crate root module declarations for the queens-and-knights placement counter.
//!
//! This file exposes all top-level subsystems (board representation, piece
//! placement, the recursive search, the regression check suite, and utility
//! helpers) so the binary, tests, and benches can import stable module paths.

pub mod board {
    pub mod board_grid;
    pub mod square_state;
}

pub mod placement {
    pub mod knight_placement;
    pub mod queen_placement;
}

pub mod search {
    pub mod half_board;
    pub mod placement_count;
}

pub mod verify {
    pub mod check_suite;
}

pub mod utils {
    pub mod render_board;
}
