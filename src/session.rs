//! Game session state machine
//!
//! A [`Session`] owns the board, the move history, the turn indicator, and
//! the game-over state, and exposes the operations a front end calls:
//! place a human move, undo, restart, and read accessors for rendering.
//! The human plays Black and moves first; White is the AI and replies
//! inline, so a single successful [`Session::human_move`] can mutate the
//! board twice before returning.
//!
//! Everything runs synchronously on the calling thread. A `Session` is a
//! single-owner value; embedders that share one across actors must put it
//! behind a single mutex, which is cheap since every operation is short
//! and O(board) at worst.

use tracing::debug;

use crate::board::{Board, Pos, Stone};
use crate::rules::{self, MoveError};
use crate::search::select_move;

/// Outcome of a successful human move (rejections are [`MoveError`]s)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Human stone and AI reply both placed; Black to move again
    Continue,
    /// The human move completed five in a row; no AI reply
    BlackWins,
    /// The AI reply completed five in a row
    WhiteWins,
}

/// A single game of Gobang
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    history: Vec<Pos>,
    to_move: Stone,
    winner: Option<Stone>,
}

impl Session {
    /// Fresh game: empty board, empty history, Black to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
            to_move: Stone::Black,
            winner: None,
        }
    }

    /// Attempt the human (Black) move at raw coordinates.
    ///
    /// Rejected moves leave the session untouched. On success the AI turn
    /// runs before this returns, unless the human move already won.
    pub fn human_move(&mut self, x: i32, y: i32) -> Result<MoveOutcome, MoveError> {
        if self.winner.is_some() {
            return Err(MoveError::GameOver);
        }
        if !Pos::is_valid(x, y) {
            return Err(MoveError::OutOfBounds { x, y });
        }

        let pos = Pos::new(x as u8, y as u8);
        rules::place(&mut self.board, pos, Stone::Black)?;
        self.history.push(pos);
        debug!(x = pos.x, y = pos.y, "black stone placed");

        if rules::check_win(&self.board, pos, Stone::Black) {
            debug!("black wins");
            self.winner = Some(Stone::Black);
            return Ok(MoveOutcome::BlackWins);
        }

        self.to_move = Stone::White;
        Ok(self.ai_turn())
    }

    /// White's reply, run inline after a non-winning human move.
    fn ai_turn(&mut self) -> MoveOutcome {
        let reply = select_move(&self.board);
        // The selector only ever returns a cell it verified empty; a
        // failure here is a bookkeeping defect, not a user error.
        rules::place(&mut self.board, reply, Stone::White)
            .expect("move selector returned an occupied cell");
        self.history.push(reply);
        debug!(x = reply.x, y = reply.y, "white stone placed");

        if rules::check_win(&self.board, reply, Stone::White) {
            debug!("white wins");
            self.winner = Some(Stone::White);
            return MoveOutcome::WhiteWins;
        }

        self.to_move = Stone::Black;
        MoveOutcome::Continue
    }

    /// Take back the last human/AI move pair.
    ///
    /// No-op when fewer than two moves exist or the game is over.
    pub fn undo(&mut self) {
        if self.winner.is_some() || self.history.len() < 2 {
            return;
        }
        for _ in 0..2 {
            if let Some(pos) = self.history.pop() {
                self.board.remove_stone(pos);
            }
        }
        self.to_move = Stone::Black;
        debug!(remaining = self.history.len(), "undid last move pair");
    }

    /// Reset to a fresh game regardless of current state
    pub fn restart(&mut self) {
        debug!("restarting game");
        self.board = Board::new();
        self.history.clear();
        self.to_move = Stone::Black;
        self.winner = None;
    }

    /// Cell state at raw coordinates; `None` when out of bounds
    pub fn cell(&self, x: i32, y: i32) -> Option<Stone> {
        if Pos::is_valid(x, y) {
            Some(self.board.get(Pos::new(x as u8, y as u8)))
        } else {
            None
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move (always Black between calls; White only transiently
    /// during the inline AI turn)
    pub fn to_move(&self) -> Stone {
        self.to_move
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn winner(&self) -> Option<Stone> {
        self.winner
    }

    /// All placed stones in chronological order, both sides
    pub fn history(&self) -> &[Pos] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().copied()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
