//! Game rules for Gobang
//!
//! Pure functions over a [`Board`]: legality checking, stone placement,
//! and five-in-a-row win detection.

pub mod win;

// Re-exports for convenient access
pub use win::check_win;

use crate::board::{Board, Pos, Stone};

/// Errors from attempting a move.
///
/// All three are ordinary, recoverable conditions arising from user input
/// (e.g. clicking an occupied cell); a failed move never mutates state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("coordinate ({x}, {y}) is outside the board")]
    OutOfBounds { x: i32, y: i32 },

    #[error("cell ({}, {}) is already occupied", .0.x, .0.y)]
    CellOccupied(Pos),

    #[error("the game is already over")]
    GameOver,
}

/// Check if a cell is in bounds and empty
#[inline]
pub fn is_cell_open(board: &Board, x: i32, y: i32) -> bool {
    Pos::is_valid(x, y) && board.is_empty(Pos::new(x as u8, y as u8))
}

/// Place a stone at an open cell.
///
/// Fails with [`MoveError::CellOccupied`] and leaves the board untouched
/// if the cell already holds a stone.
pub fn place(board: &mut Board, pos: Pos, stone: Stone) -> Result<(), MoveError> {
    if !board.is_empty(pos) {
        return Err(MoveError::CellOccupied(pos));
    }
    board.place_stone(pos, stone);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_cell_open() {
        let mut board = Board::new();
        assert!(is_cell_open(&board, 7, 7));
        assert!(!is_cell_open(&board, -1, 7));
        assert!(!is_cell_open(&board, 7, 15));

        board.place_stone(Pos::new(7, 7), Stone::Black);
        assert!(!is_cell_open(&board, 7, 7));
    }

    #[test]
    fn test_place_on_open_cell() {
        let mut board = Board::new();
        let pos = Pos::new(4, 9);
        assert_eq!(place(&mut board, pos, Stone::White), Ok(()));
        assert_eq!(board.get(pos), Stone::White);
    }

    #[test]
    fn test_place_on_occupied_cell_fails_without_mutation() {
        let mut board = Board::new();
        let pos = Pos::new(4, 9);
        place(&mut board, pos, Stone::Black).unwrap();

        let before = board.clone();
        assert_eq!(
            place(&mut board, pos, Stone::White),
            Err(MoveError::CellOccupied(pos))
        );
        assert_eq!(board, before);
        assert_eq!(board.get(pos), Stone::Black);
    }
}
