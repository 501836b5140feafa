//! Position evaluation for the Gobang AI

pub mod heuristic;
pub mod patterns;

pub use heuristic::evaluate;
pub use patterns::PatternScore;
