//! Pattern scores for Gobang evaluation
//!
//! These constants define the scoring weights for line shapes around a
//! candidate cell. Changing any weight changes observable game outcomes,
//! so they are fixed.

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five in a row - immediate win
    pub const FIVE: i32 = 100_000;
    /// Open four: _OOOO_ (two ways to complete)
    pub const OPEN_FOUR: i32 = 10_000;
    /// Closed four: XOOOO_ or _OOOOX (one way to complete)
    pub const CLOSED_FOUR: i32 = 1_000;
    /// Open three: _OOO_
    pub const OPEN_THREE: i32 = 500;
    /// Closed three: XOOO_ or _OOOX
    pub const CLOSED_THREE: i32 = 100;
    /// Open two: _OO_
    pub const OPEN_TWO: i32 = 50;
}

/// Map a (stone count, open ends) pair for one axis to its score.
///
/// Shapes outside the table score zero.
pub fn line_score(count: u32, open_ends: u32) -> i32 {
    if count >= 5 {
        PatternScore::FIVE
    } else {
        match (count, open_ends) {
            (4, 2) => PatternScore::OPEN_FOUR,
            (4, 1) => PatternScore::CLOSED_FOUR,
            (3, 2) => PatternScore::OPEN_THREE,
            (3, 1) => PatternScore::CLOSED_THREE,
            (2, 2) => PatternScore::OPEN_TWO,
            _ => 0,
        }
    }
}
