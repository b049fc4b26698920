use super::board::{Position, color_at};
use serde::{Deserialize, Serialize};
use strum::EnumCount;
use strum_macros::{Display, EnumCount, EnumIter, EnumString, FromRepr};

/// Player and square colors. The discriminants give the cycle order used
/// for deriving roles.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumCount,
    FromRepr,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red = 0,
    Green = 1,
    Yellow = 2,
    Blue = 3,
}

/// Order in which players take turns.
pub const TURN_ORDER: [Color; Color::COUNT] = [Color::Red, Color::Blue, Color::Yellow, Color::Green];

impl Color {
    pub fn from_char(c: char) -> Option<Color> {
        match c.to_ascii_lowercase() {
            'r' => Some(Color::Red),
            'g' => Some(Color::Green),
            'y' => Some(Color::Yellow),
            'b' => Some(Color::Blue),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Color::Red    => 'r',
            Color::Green  => 'g',
            Color::Yellow => 'y',
            Color::Blue   => 'b',
        }
    }

    /// The player moving after this one when everybody is still alive.
    pub fn next_in_turn(self) -> Color {
        match self {
            Color::Red => Color::Blue,
            Color::Blue => Color::Yellow,
            Color::Yellow => Color::Green,
            Color::Green => Color::Red,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, EnumCount, FromRepr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Knight = 0,
    Queen = 1,
    Bishop = 2,
    Rook = 3,
}

impl Role {
    pub fn to_char(self) -> char {
        match self {
            Role::Knight => 'n',
            Role::Queen  => 'q',
            Role::Bishop => 'b',
            Role::Rook   => 'r',
        }
    }
}

const ROLE_CYCLE: [Role; Role::COUNT] = [Role::Knight, Role::Queen, Role::Bishop, Role::Rook];

const fn build_role_table() -> [[Role; Color::COUNT]; Color::COUNT] {
    let mut table = [[Role::Knight; Color::COUNT]; Color::COUNT];

    let mut knight_color = 0;
    while knight_color < Color::COUNT {
        let mut square_color = 0;
        while square_color < Color::COUNT {
            let offset = (square_color + Color::COUNT - knight_color) % Color::COUNT;
            table[knight_color][square_color] = ROLE_CYCLE[offset];
            square_color += 1;
        }
        knight_color += 1;
    }

    table
}

/// Role of a pawn indexed by `[knight color][square color]`.
pub const ROLE_TABLE: [[Role; Color::COUNT]; Color::COUNT] = build_role_table();

pub fn role_at(knight_color: Color, square_color: Color) -> Role {
    ROLE_TABLE[knight_color as usize][square_color as usize]
}

pub type PawnId = u8;

pub const MAX_PAWNS: usize = 16;
pub const PAWNS_PER_PLAYER: usize = 4;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pawn {
    pub id: PawnId,
    pub player: Color,
    pub knight_color: Color,
    pub position: Position,
}

impl Pawn {
    pub fn role(&self) -> Role {
        self.role_on(self.position)
    }

    /// Role this pawn would have standing on `position`.
    pub fn role_on(&self, position: Position) -> Role {
        role_at(self.knight_color, color_at(position))
    }
}

// Starting squares with the knight color of the pawn placed there, in
// `Color` discriminant order.
#[rustfmt::skip]
const STARTING_PAWNS: [[((i8, i8), Color); PAWNS_PER_PLAYER]; Color::COUNT] = [
    // red, lower left
    [((0, 0), Color::Yellow), ((0, 1), Color::Green), ((1, 0), Color::Red), ((1, 1), Color::Blue)],
    // green, upper left
    [((6, 0), Color::Yellow), ((6, 1), Color::Green), ((7, 0), Color::Red), ((7, 1), Color::Blue)],
    // yellow, upper right
    [((6, 6), Color::Red), ((6, 7), Color::Blue), ((7, 6), Color::Yellow), ((7, 7), Color::Green)],
    // blue, lower right
    [((0, 6), Color::Red), ((0, 7), Color::Blue), ((1, 6), Color::Yellow), ((1, 7), Color::Green)],
];

pub fn starting_pawns(player: Color) -> [Pawn; PAWNS_PER_PLAYER] {
    let mut index = 0;

    STARTING_PAWNS[player as usize].map(|((row, col), knight_color)| {
        let pawn = Pawn {
            id: (player as usize * PAWNS_PER_PLAYER + index) as PawnId,
            player,
            knight_color,
            position: Position::new(row, col),
        };
        index += 1;
        pawn
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn green_knight_color_roles() {
        assert_eq!(role_at(Color::Green, Color::Red), Role::Rook);
        assert_eq!(role_at(Color::Green, Color::Green), Role::Knight);
        assert_eq!(role_at(Color::Green, Color::Yellow), Role::Queen);
        assert_eq!(role_at(Color::Green, Color::Blue), Role::Bishop);
    }

    #[test]
    fn roles_are_a_bijection_per_knight_color() {
        for knight_color in Color::iter() {
            let mut roles: Vec<Role> = Color::iter().map(|c| role_at(knight_color, c)).collect();
            roles.dedup();
            assert_eq!(roles.len(), Role::COUNT);
            for role in Role::iter() {
                assert!(roles.contains(&role), "{:?} misses {:?}", knight_color, role);
            }
            assert_eq!(role_at(knight_color, knight_color), Role::Knight);
        }
    }

    #[test]
    fn roles_rotate_with_knight_color() {
        for knight_color in Color::iter() {
            let shifted = Color::from_repr((knight_color as usize + 1) % Color::COUNT).unwrap();
            for square_color in Color::iter() {
                let next_square = Color::from_repr((square_color as usize + 1) % Color::COUNT).unwrap();
                assert_eq!(
                    role_at(knight_color, square_color),
                    role_at(shifted, next_square)
                );
            }
        }
    }

    #[test]
    fn turn_order_follows_next_in_turn() {
        for (i, color) in TURN_ORDER.iter().enumerate() {
            assert_eq!(color.next_in_turn(), TURN_ORDER[(i + 1) % TURN_ORDER.len()]);
        }
    }

    #[test]
    fn starting_pawns_have_distinct_knight_colors_and_ids() {
        let mut ids = Vec::new();
        for player in Color::iter() {
            let pawns = starting_pawns(player);
            let mut knight_colors: Vec<Color> = pawns.iter().map(|p| p.knight_color).collect();
            knight_colors.sort();
            assert_eq!(knight_colors, Color::iter().collect::<Vec<_>>());

            let knights = pawns.iter().filter(|p| p.role() == Role::Knight).count();
            let bishops = pawns.iter().filter(|p| p.role() == Role::Bishop).count();
            assert_eq!((knights, bishops), (2, 2), "{:?}", player);

            ids.extend(pawns.iter().map(|p| p.id));
        }
        assert_eq!(ids, (0..MAX_PAWNS as PawnId).collect::<Vec<_>>());
    }

    #[test]
    fn color_text_forms() {
        assert_eq!(Color::Yellow.to_string(), "yellow");
        assert_eq!("blue".parse::<Color>().unwrap(), Color::Blue);
        assert_eq!(Color::from_char('G'), Some(Color::Green));
        assert_eq!(Color::from_char('x'), None);
    }
}
