use super::limits::SearchLimits;
use crate::engine::evaluate::Score;
use crate::game::{Color, GameState};
use std::fmt::{Display, Formatter, Result};
use std::time::Instant;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedMove {
    pub state: GameState,
    pub score: Score,
}

/// Outcome of a search: the children of the searched state, best first for
/// the player who was on turn.
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub player: Color,
    pub ranked: Vec<RankedMove>,
    pub depth: usize,
    pub nodes: u64,
    pub elapsed_ms: u64,
    pub forced_win: bool,
}

impl SearchReport {
    pub fn best(&self) -> &RankedMove {
        &self.ranked[0]
    }
}

impl Display for SearchReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "depth {} nodes {} time {} moves {} best {:.4}",
            self.depth,
            self.nodes,
            self.elapsed_ms,
            self.ranked.len(),
            self.ranked
                .first()
                .map_or(0.0, |m| m.score[self.player as usize])
        )
    }
}

pub struct SearchStats {
    pub nodes: u64,
    pub start_time: Instant,
    pub current_depth: usize,
    pub horizon_reached: bool,
}

impl SearchStats {
    pub fn new() -> Self {
        Self {
            nodes: 0,
            start_time: Instant::now(),
            current_depth: 0,
            horizon_reached: false,
        }
    }

    pub fn increment_nodes(&mut self) {
        self.nodes += 1;
    }

    pub fn get_elapsed_ms(&self) -> u64 {
        self.start_time.elapsed().as_millis() as u64
    }

    pub fn should_stop(&self, limits: &SearchLimits) -> bool {
        // Check time limit
        if let Some(max_time_ms) = limits.max_time_ms {
            if self.get_elapsed_ms() >= max_time_ms {
                return true;
            }
        }

        false
    }

    pub fn depth_exhausted(&self, limits: &SearchLimits) -> bool {
        limits
            .max_depth
            .is_some_and(|max_depth| self.current_depth > max_depth)
    }
}
