pub mod evaluate;
pub mod search;

pub use evaluate::{Score, evaluate};
pub use search::{Difficulty, SearchLimits, SearchReport, compute_move, compute_move_with_rng};
