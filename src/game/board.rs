use super::pieces::Color;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::ops::Add;

pub const BOARD_SIZE: i8 = 8;

const R: Color = Color::Red;
const G: Color = Color::Green;
const Y: Color = Color::Yellow;
const B: Color = Color::Blue;

/// Fixed square colors, indexed by `[row][col]`.
#[rustfmt::skip]
pub const BOARD: [[Color; 8]; 8] = [
    [R, G, R, G, R, G, R, G],
    [Y, B, Y, B, Y, B, Y, B],
    [R, G, R, G, R, G, R, G],
    [Y, B, Y, B, Y, B, Y, B],
    [R, G, R, G, R, G, R, G],
    [Y, B, Y, B, Y, B, Y, B],
    [R, G, R, G, R, G, R, G],
    [Y, B, Y, B, Y, B, Y, B],
];

/// Color of an on-board square.
pub fn color_at(position: Position) -> Color {
    debug_assert!(position.is_on_board(), "{:?} is off the board", position);
    BOARD[position.row as usize][position.col as usize]
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub const fn is_on_board(&self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    pub fn is_in(&self, positions: &[Position]) -> bool {
        positions.contains(self)
    }

    /// Parses `<file><rank>` notation, where the file `a`-`h` is the column
    /// and the rank `1`-`8` is the row.
    pub fn parse(string: &str) -> Option<Position> {
        let mut chars = string.chars();

        match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) if ('a'..='h').contains(&file) && ('1'..='8').contains(&rank) => {
                Some(Position::new((rank as u8 - b'1') as i8, (file as u8 - b'a') as i8))
            }
            _ => None,
        }
    }

    pub fn unparse(&self) -> String {
        format!(
            "{}{}",
            (self.col as u8 + b'a') as char,
            (self.row as u8 + b'1') as char
        )
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Self::Output {
        Position::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_on_board() {
            write!(f, "{}", self.unparse())
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

/// Row-major ordering, for comparing move lists independently of generation order.
pub fn sort_positions(positions: &mut [Position]) {
    positions.sort_unstable_by_key(|p| (p.row, p.col));
}

/// Occupancy grid of pawn owners, indexed by `[row][col]`.
pub type ColorBoard = [[Option<Color>; 8]; 8];
