pub mod board;
pub mod bounds;
pub mod error;
pub mod movegen;
pub mod pieces;
pub mod state;

pub use board::{BOARD, ColorBoard, Position, color_at, sort_positions};
pub use bounds::Bounds;
pub use error::{GameError, MoveRejection};
pub use movegen::MoveType;
pub use pieces::{Color, Pawn, PawnId, Role, TURN_ORDER, role_at};
pub use state::{GameSnapshot, GameState, create_game_state};
