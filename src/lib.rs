pub mod config;
pub mod puzzle;
pub mod solver;
pub mod stats;

pub use config::Algorithm;
pub use puzzle::Puzzle;
pub use stats::SearchOutcome;
