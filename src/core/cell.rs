use serde::{Deserialize, Serialize};

use crate::core::coord::BOARD_SIZE;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// The row this side wins on when the Neutron reaches it.
    #[inline]
    pub fn goal_row(self) -> i8 {
        match self {
            Side::White => 0,
            Side::Black => BOARD_SIZE - 1,
        }
    }

    /// The cell value marking this side's pieces.
    #[inline]
    pub fn piece(self) -> Cell {
        match self {
            Side::White => Cell::White,
            Side::Black => Cell::Black,
        }
    }
}

/// Contents of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    White,
    Black,
    Neutron,
}

impl Cell {
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::White => 'W',
            Cell::Black => 'B',
            Cell::Neutron => 'N',
        }
    }

    pub fn from_symbol(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'W' | 'w' => Some(Cell::White),
            'B' | 'b' => Some(Cell::Black),
            'N' | 'n' => Some(Cell::Neutron),
            _ => None,
        }
    }
}
