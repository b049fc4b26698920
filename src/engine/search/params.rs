//! Search and move-selection constants.

// Wall-clock budget for one computer move
pub const DEFAULT_MOVE_TIME_MS: u64 = 800;

// Probability of passing over the current ranked move for the next one
pub const EASY_SKIP_PROBABILITY: f64 = 0.5;
pub const NORMAL_SKIP_PROBABILITY: f64 = 0.2;
pub const HARD_SKIP_PROBABILITY: f64 = 0.0;

// Highest component a normalized score can reach
pub const MAX_SCORE: f32 = 1.0;
