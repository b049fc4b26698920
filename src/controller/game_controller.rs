use crate::engine::evaluate::{Score, evaluate};
use crate::engine::search::{Difficulty, Search, SearchLimits, SearchReport, select_move};
use crate::game::{Color, GameError, GameState, MoveRejection, PawnId, Position, color_at, sort_positions};
use fxhash::FxHashMap;
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("no game in progress, start one with 'new'")]
    NoGame,
    #[error("nothing to undo")]
    NoHistory,
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("invalid value '{value}' for option {name}")]
    InvalidOptionValue { name: String, value: String },
    #[error(transparent)]
    Game(#[from] GameError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

type PerftTable = FxHashMap<(GameState, usize), u64>;

/// Holds the game in progress for a front-end. The only state it keeps
/// besides the current position is the one before it, for a single undo.
pub struct GameController {
    pub game: Option<GameState>,
    pub difficulty: Difficulty,
    pub limits: SearchLimits,
    previous: Option<GameState>,
    last_report: Option<SearchReport>,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl GameController {
    pub fn new() -> Self {
        Self {
            game: None,
            difficulty: Difficulty::default(),
            limits: SearchLimits::default(),
            previous: None,
            last_report: None,
        }
    }

    pub fn game(&self) -> Result<&GameState, CommandError> {
        self.game.as_ref().ok_or(CommandError::NoGame)
    }

    pub fn last_report(&self) -> Option<&SearchReport> {
        self.last_report.as_ref()
    }

    /// Parses player letters such as `rgyb`.
    pub fn parse_players(letters: &str) -> Result<Vec<Color>, GameError> {
        letters
            .chars()
            .map(|c| Color::from_char(c).ok_or_else(|| GameError::Parse(letters.to_string())))
            .collect()
    }

    pub fn new_game(&mut self, players: &[Color]) -> Result<&GameState, CommandError> {
        let state = GameState::new(players)?;

        self.previous = None;
        self.last_report = None;

        Ok(self.game.insert(state))
    }

    fn advance(&mut self, next: GameState) {
        self.previous = self.game.replace(next);
    }

    /// Destinations of a pawn in board order, rank by rank.
    pub fn get_pawn_moves(&self, pawn: &str) -> Result<Vec<Position>, CommandError> {
        let id = parse_pawn_id(pawn)?;
        let game = self.game()?;

        if game.pawn(id).is_none() {
            return Err(GameError::InvalidMove(MoveRejection::UnknownPawn(id)).into());
        }

        let mut moves = game.get_pawn_moves(id);
        sort_positions(&mut moves);

        Ok(moves)
    }

    pub fn try_move_piece(&mut self, pawn: &str, square: &str) -> Result<&GameState, CommandError> {
        let id = parse_pawn_id(pawn)?;
        let destination = Position::parse(square).ok_or_else(|| GameError::Parse(square.to_string()))?;

        let next = self.game()?.make_move(id, destination)?;
        self.advance(next);

        self.game()
    }

    /// Searches and plays a move for the player on turn.
    pub fn computer_move(&mut self) -> Result<&GameState, CommandError> {
        let game = *self.game()?;

        let report = Search::new(self.limits.clone()).run(&game)?;
        let next = select_move(&report, self.difficulty, &mut rand::rng()).state;

        self.last_report = Some(report);
        self.advance(next);

        self.game()
    }

    pub fn undo(&mut self) -> Result<&GameState, CommandError> {
        let previous = self.previous.take().ok_or(CommandError::NoHistory)?;
        self.game = Some(previous);

        self.game()
    }

    /// Static score plus a search report of the current position.
    pub fn evaluate(&mut self) -> Result<(Score, Option<SearchReport>), CommandError> {
        let game = *self.game()?;

        let report = match Search::new(self.limits.clone()).run(&game) {
            Ok(report) => Some(report),
            Err(GameError::NoMoves) => None,
            Err(e) => return Err(e.into()),
        };

        Ok((evaluate(&game), report))
    }

    /// Number of move sequences of length `depth` (shorter where the game
    /// ends early). The first ply is split across threads.
    pub fn perft(&self, depth: usize) -> Result<u64, CommandError> {
        Ok(perft(self.game()?, depth))
    }

    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), CommandError> {
        let invalid = || CommandError::InvalidOptionValue {
            name: name.to_string(),
            value: value.to_string(),
        };

        match name.to_lowercase().as_str() {
            "difficulty" => {
                self.difficulty = value.parse().map_err(|_| invalid())?;
            }
            "movetime" | "move time" => {
                let ms: u64 = value.parse().map_err(|_| invalid())?;
                self.limits.max_time_ms = Some(ms);
            }
            "depth" => {
                self.limits.max_depth = match value {
                    "" | "none" => None,
                    _ => Some(value.parse().map_err(|_| invalid())?),
                };
            }
            _ => return Err(CommandError::UnknownOption(name.to_string())),
        }

        log::info!("option {} set to {}", name, value);
        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<(), CommandError> {
        fs::write(path, self.game()?.to_json()?)?;
        Ok(())
    }

    pub fn load(&mut self, path: &Path) -> Result<&GameState, CommandError> {
        let state = GameState::from_json(&fs::read_to_string(path)?)?;

        self.previous = None;
        self.last_report = None;

        Ok(self.game.insert(state))
    }

    pub fn print(&self) -> Result<String, CommandError> {
        Ok(render(self.game()?, &[]))
    }

    pub fn print_with_moves(&self, pawn: &str) -> Result<String, CommandError> {
        let moves = self.get_pawn_moves(pawn)?;
        Ok(render(self.game()?, &moves))
    }
}

fn parse_pawn_id(pawn: &str) -> Result<PawnId, GameError> {
    pawn.parse().map_err(|_| GameError::Parse(pawn.to_string()))
}

pub fn perft(state: &GameState, depth: usize) -> u64 {
    if depth == 0 || state.is_game_over() {
        return 1;
    }

    state
        .get_next()
        .par_iter()
        .map(|child| {
            let mut table = PerftTable::default();
            perft_memo(child, depth - 1, &mut table)
        })
        .sum()
}

fn perft_memo(state: &GameState, depth: usize, table: &mut PerftTable) -> u64 {
    if depth == 0 || state.is_game_over() {
        return 1;
    }

    if let Some(&count) = table.get(&(*state, depth)) {
        return count;
    }

    let count = state
        .get_next()
        .iter()
        .map(|child| perft_memo(child, depth - 1, table))
        .sum();

    table.insert((*state, depth), count);
    count
}

/// Text board, rank 8 on top. Pawns show as owner and current role
/// (`Rn` is a red knight), empty squares as `.` and the square color,
/// squares outside the bounds stay blank.
pub fn render(state: &GameState, highlights: &[Position]) -> String {
    let bounds = state.bounds();
    let mut out = String::from("   a  b  c  d  e  f  g  h\n");

    for row in (0..8).rev() {
        out.push_str(&format!("{} ", row + 1));

        for col in 0..8 {
            let position = Position::new(row, col);

            let cell = match state.pawn_at(position) {
                Some(pawn) if position.is_in(highlights) => {
                    format!("x{}", pawn.player.to_char().to_ascii_uppercase())
                }
                Some(pawn) => format!(
                    "{}{}",
                    pawn.player.to_char().to_ascii_uppercase(),
                    pawn.role().to_char()
                ),
                None if position.is_in(highlights) => format!("*{}", color_at(position).to_char()),
                None if bounds.contains(position) => format!(".{}", color_at(position).to_char()),
                None => "  ".to_string(),
            };

            out.push_str(&cell);
            out.push(' ');
        }

        out.push_str(&format!("{}\n", row + 1));
    }

    out.push_str("   a  b  c  d  e  f  g  h\n");

    match state.winner() {
        Some(winner) => out.push_str(&format!("game over, {} wins\n", winner)),
        None => out.push_str(&format!("bounds {}, {} to move\n", bounds, state.current_player())),
    }

    for pawn in state.pawns().filter(|p| p.player == state.current_player()) {
        out.push_str(&format!(
            "  pawn {} on {} ({})\n",
            pawn.id,
            pawn.position,
            pawn.role()
        ));
    }

    out
}
