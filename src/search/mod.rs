//! Move selection for the AI side

pub mod selector;

pub use selector::select_move;
