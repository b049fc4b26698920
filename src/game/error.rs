use super::board::Position;
use super::pieces::{Color, PawnId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveRejection {
    #[error("there is no pawn with id {0}")]
    UnknownPawn(PawnId),
    #[error("pawn {pawn} belongs to {owner}, but {player} is on turn")]
    NotOnTurn {
        pawn: PawnId,
        owner: Color,
        player: Color,
    },
    #[error("pawn {pawn} cannot move to {destination}")]
    IllegalDestination { pawn: PawnId, destination: Position },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("a game needs at least two players, {0} selected")]
    Setup(usize),
    #[error("invalid move: {0}")]
    InvalidMove(#[from] MoveRejection),
    #[error("no legal moves in this position")]
    NoMoves,
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
    #[error("cannot parse '{0}'")]
    Parse(String),
}
