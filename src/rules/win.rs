//! Win condition checking
//!
//! A move wins when it completes a line of five or more stones of the same
//! color through the placed position. Overlines (six or more) also win;
//! there is no exact-five restriction.

use crate::board::{Board, Pos, Stone, BOARD_SIZE};

/// Direction vectors for line checking (4 axes)
const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Horizontal
    (0, 1),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal NE
];

/// Five-in-a-row check at a just-placed stone.
///
/// Only examines the 4 axes through `pos`, walking up to 4 cells in each
/// sub-direction and stopping at the first out-of-bounds or
/// differently-colored cell. No allocation.
pub fn check_win(board: &Board, pos: Pos, stone: Stone) -> bool {
    let sz = BOARD_SIZE as i32;
    for (dx, dy) in DIRECTIONS {
        let mut count = 1;
        for step in [1i32, -1] {
            for i in 1..5 {
                let nx = pos.x as i32 + dx * i * step;
                let ny = pos.y as i32 + dy * i * step;
                if nx < 0
                    || nx >= sz
                    || ny < 0
                    || ny >= sz
                    || board.get(Pos::new(nx as u8, ny as u8)) != stone
                {
                    break;
                }
                count += 1;
            }
        }
        if count >= 5 {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_line(board: &mut Board, start: (u8, u8), step: (i8, i8), len: u8, stone: Stone) {
        for i in 0..len {
            let x = (start.0 as i8 + step.0 * i as i8) as u8;
            let y = (start.1 as i8 + step.1 * i as i8) as u8;
            board.place_stone(Pos::new(x, y), stone);
        }
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let mut board = Board::new();
        place_line(&mut board, (3, 7), (1, 0), 5, Stone::Black);
        // Win must be detected through every stone of the line
        for i in 0..5 {
            assert!(check_win(&board, Pos::new(3 + i, 7), Stone::Black));
        }
        assert!(!check_win(&board, Pos::new(3, 7), Stone::White));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let mut board = Board::new();
        place_line(&mut board, (7, 3), (0, 1), 5, Stone::Black);
        assert!(check_win(&board, Pos::new(7, 5), Stone::Black));
    }

    #[test]
    fn test_five_in_row_diagonal_se() {
        let mut board = Board::new();
        place_line(&mut board, (2, 2), (1, 1), 5, Stone::White);
        assert!(check_win(&board, Pos::new(4, 4), Stone::White));
    }

    #[test]
    fn test_five_in_row_diagonal_ne() {
        let mut board = Board::new();
        place_line(&mut board, (2, 10), (1, -1), 5, Stone::White);
        assert!(check_win(&board, Pos::new(4, 8), Stone::White));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let mut board = Board::new();
        place_line(&mut board, (3, 7), (1, 0), 4, Stone::Black);
        for i in 0..4 {
            assert!(!check_win(&board, Pos::new(3 + i, 7), Stone::Black));
        }
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let mut board = Board::new();
        place_line(&mut board, (3, 7), (1, 0), 6, Stone::Black);
        assert!(check_win(&board, Pos::new(5, 7), Stone::Black));
    }

    #[test]
    fn test_gap_breaks_line() {
        let mut board = Board::new();
        // B B B _ B B placed around (6, 7): no five through any of them
        place_line(&mut board, (3, 7), (1, 0), 3, Stone::Black);
        place_line(&mut board, (7, 7), (1, 0), 2, Stone::Black);
        assert!(!check_win(&board, Pos::new(5, 7), Stone::Black));
        assert!(!check_win(&board, Pos::new(7, 7), Stone::Black));
    }

    #[test]
    fn test_opponent_stone_breaks_line() {
        let mut board = Board::new();
        place_line(&mut board, (3, 7), (1, 0), 4, Stone::Black);
        board.place_stone(Pos::new(7, 7), Stone::White);
        place_line(&mut board, (8, 7), (1, 0), 4, Stone::Black);
        assert!(!check_win(&board, Pos::new(6, 7), Stone::Black));
        assert!(!check_win(&board, Pos::new(8, 7), Stone::Black));
    }

    #[test]
    fn test_five_at_board_edge() {
        let mut board = Board::new();
        place_line(&mut board, (0, 14), (1, 0), 5, Stone::Black);
        assert!(check_win(&board, Pos::new(0, 14), Stone::Black));
        assert!(check_win(&board, Pos::new(4, 14), Stone::Black));
    }

    #[test]
    fn test_five_at_corner_diagonal() {
        let mut board = Board::new();
        place_line(&mut board, (10, 10), (1, 1), 5, Stone::White);
        assert!(check_win(&board, Pos::new(14, 14), Stone::White));
    }

    #[test]
    fn test_lone_stone_not_win() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        assert!(!check_win(&board, Pos::new(7, 7), Stone::Black));
    }
}
