use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Side length of the (fixed) Neutron board.
pub const BOARD_SIZE: i8 = 5;

/// A square on the board, `row` and `col` both in `0..BOARD_SIZE`.
///
/// Row 0 is White's home row (and goal row), row 4 is Black's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn in_bounds(self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    /// Row-major index into a 25-cell array. Only meaningful for in-bounds positions.
    #[inline]
    pub fn index(self) -> usize {
        debug_assert!(self.in_bounds());
        (self.row * BOARD_SIZE + self.col) as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        debug_assert!(idx < (BOARD_SIZE * BOARD_SIZE) as usize);
        let idx = idx as i8;
        Self::new(idx / BOARD_SIZE, idx % BOARD_SIZE)
    }

    /// All 25 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..(BOARD_SIZE * BOARD_SIZE) as usize).map(Position::from_index)
    }
}

/// A unit step `(d_row, d_col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Step {
    pub d_row: i8,
    pub d_col: i8,
}

impl Add<Step> for Position {
    type Output = Position;

    #[inline]
    fn add(self, rhs: Step) -> Position {
        Position::new(self.row + rhs.d_row, self.col + rhs.d_col)
    }
}

/// The 8 compass directions, in the order slides are scanned.
///
/// Move generation order (and therefore search tie-breaking) follows this order.
pub const DIRECTIONS: [Step; 8] = [
    Step { d_row: -1, d_col: -1 },
    Step { d_row: -1, d_col: 0 },
    Step { d_row: -1, d_col: 1 },
    Step { d_row: 0, d_col: -1 },
    Step { d_row: 0, d_col: 1 },
    Step { d_row: 1, d_col: -1 },
    Step { d_row: 1, d_col: 0 },
    Step { d_row: 1, d_col: 1 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrips_row_major() {
        for (i, p) in Position::all().enumerate() {
            assert_eq!(p.index(), i);
            assert_eq!(Position::from_index(i), p);
        }
        assert_eq!(Position::from_index(7), Position::new(1, 2));
    }

    #[test]
    fn stepping_off_the_edge_is_out_of_bounds() {
        let corner = Position::new(0, 4);
        assert!(!(corner + DIRECTIONS[2]).in_bounds());
        assert!((corner + DIRECTIONS[5]).in_bounds());
    }
}
