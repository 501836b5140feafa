//! Greedy single-ply move selection
//!
//! Two passes over the empty cells in row-major order: an offensive pass
//! that maximizes White's own line score, and a defensive pass that
//! overrides the choice only when Black's best answer is a four-level
//! threat worth more than White's best offensive option. This is a greedy
//! blend, not adversarial search.

use tracing::debug;

use crate::board::{Board, Pos, Stone, BOARD_SIZE};
use crate::eval::{evaluate, PatternScore};

/// Minimum opponent score that justifies a blocking move
const BLOCK_THRESHOLD: i32 = PatternScore::CLOSED_FOUR;

/// Pick White's next move.
///
/// Ties go to the first cell found in row-major scan order. The center
/// sentinel is only returned when no empty cell exists to scan. The board
/// is cloned once for the hypothetical placements, so the caller's copy is
/// never touched.
pub fn select_move(board: &Board) -> Pos {
    let mut scratch = board.clone();
    let mut best_score = -1;
    let mut best_move = Pos::center();

    // Offensive pass: maximize White's own immediate threat
    for y in 0..BOARD_SIZE as u8 {
        for x in 0..BOARD_SIZE as u8 {
            let pos = Pos::new(x, y);
            if !scratch.is_empty(pos) {
                continue;
            }
            scratch.place_stone(pos, Stone::White);
            let score = evaluate(&scratch, pos, Stone::White);
            scratch.remove_stone(pos);
            if score > best_score {
                best_score = score;
                best_move = pos;
            }
        }
    }

    // Defensive pass: block Black's near-winning shapes when they outweigh
    // our best offensive option
    for y in 0..BOARD_SIZE as u8 {
        for x in 0..BOARD_SIZE as u8 {
            let pos = Pos::new(x, y);
            if !scratch.is_empty(pos) {
                continue;
            }
            scratch.place_stone(pos, Stone::Black);
            let score = evaluate(&scratch, pos, Stone::Black);
            scratch.remove_stone(pos);
            if score >= BLOCK_THRESHOLD && score > best_score {
                best_score = score;
                best_move = pos;
            }
        }
    }

    debug!(x = best_move.x, y = best_move.y, score = best_score, "selected move");
    best_move
}
