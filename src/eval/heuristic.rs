//! Single-ply heuristic evaluation of a candidate cell
//!
//! Scores the line shapes a hypothetical stone would form. The caller
//! places the stone before calling [`evaluate`] and removes it afterwards;
//! the evaluator itself never mutates the board and never looks beyond the
//! immediate line shape around the cell (no opponent simulation).

use crate::board::{Board, Pos, Stone};

use super::patterns::line_score;

/// Direction vectors for line scanning (4 axes)
const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Horizontal
    (0, 1),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal NE
];

/// Evaluate the cell at `pos` for `stone`, assuming the stone is already
/// placed there.
///
/// For each of the four axes, walks up to 4 cells outward in both
/// sub-directions. A sub-direction is blocked when it reaches the board
/// edge or an opponent stone before its same-color run ends; an empty cell
/// ends the walk without blocking and leaves that end open. The axis
/// contributes `line_score(count, open_ends)` to the total.
///
/// A walk that spends all 4 steps on same-color stones exits without
/// inspecting the fifth cell, so that end counts as open whatever lies
/// beyond. The run is already a five by then, which scores the same
/// either way.
pub fn evaluate(board: &Board, pos: Pos, stone: Stone) -> i32 {
    let opponent = stone.opponent();
    let mut score = 0;

    for (dx, dy) in DIRECTIONS {
        let mut count = 1;
        let mut open_ends = 0;

        for step in [1i32, -1] {
            let mut blocked = false;
            for i in 1..5 {
                let nx = pos.x as i32 + dx * i * step;
                let ny = pos.y as i32 + dy * i * step;
                if !Pos::is_valid(nx, ny) {
                    blocked = true;
                    break;
                }
                let cell = board.get(Pos::new(nx as u8, ny as u8));
                if cell == opponent {
                    blocked = true;
                    break;
                }
                if cell == stone {
                    count += 1;
                } else {
                    break;
                }
            }
            if !blocked {
                open_ends += 1;
            }
        }

        score += line_score(count, open_ends);
    }

    score
}
