use super::board::{BOARD_SIZE, Position};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Smallest allowed `max - min` on either axis, i.e. a 3×3 region.
pub const MIN_DIFF: i8 = 2;

/// Active playing area, inclusive on all four edges.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub min_row: i8,
    pub max_row: i8,
    pub min_col: i8,
    pub max_col: i8,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::FULL
    }
}

impl Bounds {
    pub const FULL: Bounds = Bounds::new(0, BOARD_SIZE - 1, 0, BOARD_SIZE - 1);

    pub const fn new(min_row: i8, max_row: i8, min_col: i8, max_col: i8) -> Self {
        Self {
            min_row,
            max_row,
            min_col,
            max_col,
        }
    }

    pub fn contains(&self, position: Position) -> bool {
        (self.min_row..=self.max_row).contains(&position.row)
            && (self.min_col..=self.max_col).contains(&position.col)
    }

    pub fn contains_bounds(&self, other: &Bounds) -> bool {
        self.min_row <= other.min_row
            && other.max_row <= self.max_row
            && self.min_col <= other.min_col
            && other.max_col <= self.max_col
    }

    pub fn is_smallest(&self) -> bool {
        self.max_row - self.min_row == MIN_DIFF && self.max_col - self.min_col == MIN_DIFF
    }

    /// Lies on the board and is at least 3×3.
    pub fn is_valid(&self) -> bool {
        Bounds::FULL.contains_bounds(self)
            && self.max_row - self.min_row >= MIN_DIFF
            && self.max_col - self.min_col >= MIN_DIFF
    }

    pub fn center(&self) -> Position {
        Position::new(self.min_row + 1, self.min_col + 1)
    }

    /// Shrinks `previous` to the box around `positions`, never below 3×3 and
    /// never outside `previous`. Once 3×3 the bounds stay put.
    pub fn update<I>(positions: I, previous: &Bounds) -> Bounds
    where
        I: IntoIterator<Item = Position>,
    {
        if previous.is_smallest() {
            return *previous;
        }

        let mut positions = positions.into_iter().peekable();
        if positions.peek().is_none() {
            return *previous;
        }

        let (mut min_row, mut max_row) = (i8::MAX, i8::MIN);
        let (mut min_col, mut max_col) = (i8::MAX, i8::MIN);

        for position in positions {
            min_row = min_row.min(position.row);
            max_row = max_row.max(position.row);
            min_col = min_col.min(position.col);
            max_col = max_col.max(position.col);
        }

        let last = BOARD_SIZE - 1;
        let (min_row, max_row) = widen(
            min_row.clamp(0, last),
            max_row.clamp(0, last),
            previous.min_row,
            previous.max_row,
        );
        let (min_col, max_col) = widen(
            min_col.clamp(0, last),
            max_col.clamp(0, last),
            previous.min_col,
            previous.max_col,
        );

        Bounds::new(min_row, max_row, min_col, max_col)
    }
}

// Grows [min, max] one step at a time, alternating max edge and min edge,
// without leaving [limit_min, limit_max].
fn widen(mut min: i8, mut max: i8, limit_min: i8, limit_max: i8) -> (i8, i8) {
    let mut grow_max = true;

    while max - min < MIN_DIFF {
        if max >= limit_max && min <= limit_min {
            break;
        }

        if grow_max {
            if max < limit_max {
                max += 1;
            }
        } else if min > limit_min {
            min -= 1;
        }

        grow_max = !grow_max;
    }

    (min, max)
}

impl Display for Bounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}",
            Position::new(self.min_row, self.min_col),
            Position::new(self.max_row, self.max_col)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_pawn_grows_symmetrically() {
        let bounds = Bounds::update([Position::new(3, 3)], &Bounds::FULL);
        assert_eq!(bounds, Bounds::new(2, 4, 2, 4));
        assert!(bounds.is_smallest());
        assert_eq!(bounds.center(), Position::new(3, 3));
    }

    #[test]
    fn tight_box_is_kept_when_large_enough() {
        let bounds = Bounds::update(
            [Position::new(1, 2), Position::new(5, 6), Position::new(3, 4)],
            &Bounds::FULL,
        );
        assert_eq!(bounds, Bounds::new(1, 5, 2, 6));
        assert!(!bounds.is_smallest());
    }

    #[test]
    fn growth_respects_previous_edges() {
        // Only the min edge may move when the max edge sits on the previous one.
        let previous = Bounds::new(0, 7, 0, 5);
        let bounds = Bounds::update([Position::new(7, 5)], &previous);
        assert_eq!(bounds, Bounds::new(5, 7, 3, 5));

        let bounds = Bounds::update([Position::new(0, 0), Position::new(0, 1)], &previous);
        assert_eq!(bounds, Bounds::new(0, 2, 0, 2));
    }

    #[test]
    fn one_axis_widens_independently() {
        let bounds = Bounds::update([Position::new(0, 0), Position::new(1, 7)], &Bounds::FULL);
        assert_eq!(bounds, Bounds::new(0, 2, 0, 7));
    }

    #[test]
    fn smallest_bounds_never_move() {
        let smallest = Bounds::new(4, 6, 1, 3);
        assert!(smallest.is_smallest());
        let bounds = Bounds::update([Position::new(5, 2), Position::new(6, 3)], &smallest);
        assert_eq!(bounds, smallest);
    }

    #[test]
    fn update_stays_within_previous_and_at_least_minimal() {
        let previous = Bounds::new(1, 6, 2, 7);
        for row in previous.min_row..=previous.max_row {
            for col in previous.min_col..=previous.max_col {
                let positions = [Position::new(row, col), Position::new(previous.min_row + 1, col)];
                let bounds = Bounds::update(positions, &previous);

                assert!(previous.contains_bounds(&bounds), "{} escapes {}", bounds, previous);
                assert!(bounds.is_valid());
                for p in positions {
                    assert!(bounds.contains(p));
                }
            }
        }
    }

    #[test]
    fn contains_is_inclusive() {
        let bounds = Bounds::new(2, 4, 3, 5);
        assert!(bounds.contains(Position::new(2, 3)));
        assert!(bounds.contains(Position::new(4, 5)));
        assert!(!bounds.contains(Position::new(1, 3)));
        assert!(!bounds.contains(Position::new(4, 6)));
    }

    #[test]
    fn validity() {
        assert!(Bounds::FULL.is_valid());
        assert!(!Bounds::new(0, 1, 0, 7).is_valid());
        assert!(!Bounds::new(-1, 3, 0, 7).is_valid());
        assert!(!Bounds::new(0, 8, 0, 7).is_valid());
    }
}
