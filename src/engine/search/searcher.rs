use super::limits::SearchLimits;
use super::params::MAX_SCORE;
use super::results::{RankedMove, SearchReport, SearchStats};
use crate::engine::evaluate::{Score, evaluate};
use crate::game::{GameError, GameState};

// How often (in nodes) the clock is consulted inside a single child search
const TIME_CHECK_INTERVAL: u64 = 1024;

/// Max-N search over a game tree where every node maximizes the score of
/// the player on turn there.
pub struct Search {
    pub stats: SearchStats,
    pub limits: SearchLimits,
    stopped: bool,
}

impl Search {
    pub fn new(limits: SearchLimits) -> Self {
        Self {
            stats: SearchStats::new(),
            limits: limits.bounded(),
            stopped: false,
        }
    }

    /// Scores every move of the player on turn with iterative deepening and
    /// ranks them best first.
    pub fn run(&mut self, state: &GameState) -> Result<SearchReport, GameError> {
        self.stats = SearchStats::new();
        self.stopped = false;

        if state.is_game_over() {
            return Err(GameError::NoMoves);
        }

        let player = state.current_player();
        let me = player as usize;
        let children = state.get_next();

        if children.is_empty() {
            return Err(GameError::NoMoves);
        }

        let mut scores: Vec<Score> = children
            .iter()
            .map(|child| self.max_n(child, 0, 0.0))
            .collect();

        // A move that wins on the spot needs no further thought
        if let Some(index) = scores.iter().position(|score| score[me] >= MAX_SCORE) {
            log::debug!("{} has an immediately winning move", player);

            return Ok(SearchReport {
                player,
                ranked: vec![RankedMove {
                    state: children[index],
                    score: scores[index],
                }],
                depth: 0,
                nodes: self.stats.nodes,
                elapsed_ms: self.stats.get_elapsed_ms(),
                forced_win: true,
            });
        }

        let mut completed_depth = 0;
        self.stats.current_depth = 1;

        'deepening: while !self.stats.depth_exhausted(&self.limits) {
            let depth = self.stats.current_depth;
            let mut pass_best = 0.0f32;
            self.stats.horizon_reached = false;

            // One child at a time, so that an interrupted pass still leaves
            // every child with a score from this depth or the previous one
            for (child, score) in children.iter().zip(scores.iter_mut()) {
                if self.stats.should_stop(&self.limits) {
                    break 'deepening;
                }

                let fresh = self.max_n(child, depth, pass_best);
                if self.stopped {
                    break 'deepening;
                }

                *score = fresh;
                pass_best = pass_best.max(fresh[me]);
            }

            completed_depth = depth;
            log::debug!(
                "depth {} best {:.4} nodes {} time {}ms",
                depth,
                pass_best,
                self.stats.nodes,
                self.stats.get_elapsed_ms()
            );

            // Nothing was cut off by the depth limit, so deeper passes would
            // only repeat this one
            if !self.stats.horizon_reached {
                break;
            }

            self.stats.current_depth += 1;
        }

        let mut ranked: Vec<RankedMove> = children
            .into_iter()
            .zip(scores)
            .map(|(state, score)| RankedMove { state, score })
            .collect();

        ranked.sort_by(|a, b| b.score[me].total_cmp(&a.score[me]));

        Ok(SearchReport {
            player,
            ranked,
            depth: completed_depth,
            nodes: self.stats.nodes,
            elapsed_ms: self.stats.get_elapsed_ms(),
            forced_win: false,
        })
    }

    /// Scores `state` looking `depth` moves ahead. Siblings are skipped once
    /// the player on turn has secured `1 - parent_best`, since the parent's
    /// mover can then no longer gain anything from this branch.
    pub fn max_n(&mut self, state: &GameState, depth: usize, parent_best: f32) -> Score {
        self.stats.increment_nodes();

        if self.stats.nodes % TIME_CHECK_INTERVAL == 0 && self.stats.should_stop(&self.limits) {
            self.stopped = true;
        }

        if self.stopped || state.is_game_over() {
            return evaluate(state);
        }

        if depth == 0 {
            self.stats.horizon_reached = true;
            return evaluate(state);
        }

        let mover = state.current_player() as usize;
        let children = state.get_next();

        let Some((first, rest)) = children.split_first() else {
            return evaluate(state);
        };

        let mut best = self.max_n(first, depth - 1, 0.0);

        for child in rest {
            if self.stopped || best[mover] >= MAX_SCORE - parent_best {
                break;
            }

            let score = self.max_n(child, depth - 1, best[mover]);
            if score[mover] > best[mover] {
                best = score;
            }
        }

        best
    }
}

/// Depth-limited max-N score of a single state.
pub fn search(state: &GameState, depth: usize, parent_best: f32) -> Score {
    Search::new(SearchLimits::depth(depth)).max_n(state, depth, parent_best)
}
