pub mod limits;
pub mod params;
pub mod results;
pub mod searcher;

pub use limits::{Difficulty, SearchLimits};
pub use results::{RankedMove, SearchReport, SearchStats};
pub use searcher::{Search, search};

use crate::game::{GameError, GameState};
use rand::Rng;

/// Lets the computer play one move for the player on turn.
pub fn compute_move(state: &GameState, difficulty: Difficulty) -> Result<GameState, GameError> {
    compute_move_with_rng(state, difficulty, &SearchLimits::default(), &mut rand::rng())
}

pub fn compute_move_with_rng<R: Rng>(
    state: &GameState,
    difficulty: Difficulty,
    limits: &SearchLimits,
    rng: &mut R,
) -> Result<GameState, GameError> {
    let report = Search::new(limits.clone()).run(state)?;

    Ok(select_move(&report, difficulty, rng).state)
}

/// Walks down the ranking according to the difficulty.
pub fn select_move<'a, R: Rng>(report: &'a SearchReport, difficulty: Difficulty, rng: &mut R) -> &'a RankedMove {
    let index = difficulty.pick(report.ranked.len(), rng);

    log::info!(
        "{} plays its #{} of {} moves ({}, {})",
        report.player,
        index + 1,
        report.ranked.len(),
        difficulty,
        report
    );

    &report.ranked[index]
}
