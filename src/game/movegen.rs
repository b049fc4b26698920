use super::board::{ColorBoard, Position};
use super::bounds::Bounds;
use super::pieces::{Pawn, Role};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveType {
    Invalid, // outside the bounds or onto an own pawn
    Normal,  // onto an empty square
    Capture, // onto an opposing pawn
}

#[rustfmt::skip]
pub const KNIGHT_OFFSETS: [Position; 8] = [
    Position::new(1, 2),   Position::new(2, 1),
    Position::new(-1, 2),  Position::new(-2, 1),
    Position::new(1, -2),  Position::new(2, -1),
    Position::new(-1, -2), Position::new(-2, -1),
];

pub const DIAGONAL_DIRECTIONS: [Position; 4] = [
    Position::new(1, 1),
    Position::new(1, -1),
    Position::new(-1, 1),
    Position::new(-1, -1),
];

pub const ORTHOGONAL_DIRECTIONS: [Position; 4] = [
    Position::new(1, 0),
    Position::new(-1, 0),
    Position::new(0, 1),
    Position::new(0, -1),
];

pub fn classify(pawn: &Pawn, destination: Position, occupancy: &ColorBoard, bounds: &Bounds) -> MoveType {
    if !bounds.contains(destination) {
        return MoveType::Invalid;
    }

    match occupancy[destination.row as usize][destination.col as usize] {
        None => MoveType::Normal,
        Some(owner) if owner == pawn.player => MoveType::Invalid,
        Some(_) => MoveType::Capture,
    }
}

/// All legal destinations of `pawn` for the role of the square it stands on.
pub fn get_moves(pawn: &Pawn, occupancy: &ColorBoard, bounds: &Bounds) -> Vec<Position> {
    let mut moves = Vec::new();

    match pawn.role() {
        Role::Knight => add_knight_moves(pawn, occupancy, bounds, &mut moves),
        Role::Bishop => add_sliding_moves(pawn, &DIAGONAL_DIRECTIONS, occupancy, bounds, &mut moves),
        Role::Rook => add_sliding_moves(pawn, &ORTHOGONAL_DIRECTIONS, occupancy, bounds, &mut moves),
        Role::Queen => {
            add_sliding_moves(pawn, &DIAGONAL_DIRECTIONS, occupancy, bounds, &mut moves);
            add_sliding_moves(pawn, &ORTHOGONAL_DIRECTIONS, occupancy, bounds, &mut moves);
        }
    }

    moves
}

fn add_knight_moves(pawn: &Pawn, occupancy: &ColorBoard, bounds: &Bounds, moves: &mut Vec<Position>) {
    for offset in KNIGHT_OFFSETS {
        let destination = pawn.position + offset;

        if classify(pawn, destination, occupancy, bounds) != MoveType::Invalid {
            moves.push(destination);
        }
    }
}

fn add_sliding_moves(
    pawn: &Pawn,
    directions: &[Position],
    occupancy: &ColorBoard,
    bounds: &Bounds,
    moves: &mut Vec<Position>,
) {
    for &direction in directions {
        let mut destination = pawn.position + direction;

        loop {
            match classify(pawn, destination, occupancy, bounds) {
                MoveType::Invalid => break,
                MoveType::Normal => moves.push(destination),
                MoveType::Capture => {
                    moves.push(destination);
                    break;
                }
            }

            destination = destination + direction;
        }
    }
}
