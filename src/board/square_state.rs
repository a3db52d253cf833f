/// Occupancy/attack status of a single board square.
///
/// A square only ever transitions `Open -> Attacked` or `Open -> Queen` /
/// `Open -> Knight` within one search branch; occupied squares are never
/// overwritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareState {
    Open,
    Attacked,
    Queen,
    Knight,
}

impl SquareState {
    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, SquareState::Open)
    }
}
