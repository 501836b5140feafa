//! Gobang (connect-five) game engine
//!
//! The rule engine and move-selection heuristic for a human-vs-computer
//! Gobang game on a 15x15 board:
//! - Five or more in a row wins (overlines count)
//! - Human plays Black and moves first; the AI plays White
//! - The AI is a single-ply positional heuristic, not adversarial search
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Legal-move validation and win detection
//! - [`eval`]: Single-ply line-shape scoring
//! - [`search`]: Greedy offensive/defensive move selection
//! - [`session`]: Game session state machine (moves, undo, restart)
//!
//! Presentation is deliberately absent: a front end maps its input events
//! to board coordinates, calls [`Session::human_move`], [`Session::undo`],
//! or [`Session::restart`], and re-reads the board to render. A single
//! successful human move also runs the AI reply before returning.
//!
//! # Quick Start
//!
//! ```
//! use gobang::{MoveOutcome, Session, Stone};
//!
//! let mut session = Session::new();
//!
//! // Human opens at the center; the AI replies before this returns
//! let outcome = session.human_move(7, 7).unwrap();
//! assert_eq!(outcome, MoveOutcome::Continue);
//! assert_eq!(session.cell(7, 7), Some(Stone::Black));
//! assert_eq!(session.to_move(), Stone::Black);
//! ```

pub mod board;
pub mod eval;
pub mod rules;
pub mod search;
pub mod session;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use rules::MoveError;
pub use session::{MoveOutcome, Session};
