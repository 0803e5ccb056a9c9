//! Command implementations

pub mod simple;
pub mod solve;
pub mod stats;

pub use simple::run_simple;
pub use solve::{SolveConfig, SolveResult, parse_board, solve_board};
pub use stats::{BoardStatistics, Violation, check_board, run_stats};
