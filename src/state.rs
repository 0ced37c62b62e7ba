use std::fmt;

use crate::core::board::Board;
use crate::core::cell::{Cell, Side};
use crate::core::coord::Position;
use crate::error::NeutronError;

/// Pieces per side on every valid board.
pub const PIECES_PER_SIDE: usize = 5;

/// One game position.
///
/// States are immutable values: the fields are private and every transition builds a new
/// `State` (see [`crate::rules::apply::apply`]). `mover == None` marks a game that ended
/// with the Neutron reaching a goal row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct State {
    board: Board,
    neutron: Position,
    mover: Option<Side>,
}

/// The starting position: White on row 0, Black on row 4, Neutron at (2,2), White to move.
pub fn new_initial_state() -> State {
    State {
        board: Board::initial(),
        neutron: Position::new(2, 2),
        mover: Some(Side::White),
    }
}

impl State {
    /// Build a state from an arbitrary board.
    ///
    /// The board must hold exactly 5 White, 5 Black, and 1 Neutron. The Neutron position is
    /// read off the board.
    pub fn from_board(board: Board, mover: Side) -> Result<Self, NeutronError> {
        let whites = board.count(Cell::White);
        let blacks = board.count(Cell::Black);
        if whites != PIECES_PER_SIDE || blacks != PIECES_PER_SIDE {
            return Err(NeutronError::InvalidBoard {
                reason: format!(
                    "expected {PIECES_PER_SIDE} white and {PIECES_PER_SIDE} black pieces, \
                     got {whites} and {blacks}"
                ),
            });
        }

        let mut neutrons = board.positions_of(Cell::Neutron);
        let neutron = match (neutrons.next(), neutrons.next()) {
            (Some(p), None) => p,
            _ => {
                return Err(NeutronError::InvalidBoard {
                    reason: format!(
                        "expected exactly one neutron, got {}",
                        board.count(Cell::Neutron)
                    ),
                })
            }
        };

        Ok(Self {
            board,
            neutron,
            mover: Some(mover),
        })
    }

    /// Internal constructor for transitions; callers guarantee the invariants.
    pub(crate) fn from_parts(board: Board, neutron: Position, mover: Option<Side>) -> Self {
        debug_assert_eq!(board.get(neutron), Cell::Neutron);
        Self {
            board,
            neutron,
            mover,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn neutron(&self) -> Position {
        self.neutron
    }

    /// Side to move, or `None` once the Neutron has been moved onto a goal row.
    #[inline]
    pub fn mover(&self) -> Option<Side> {
        self.mover
    }

    /// True iff the cell counts are 5 White, 5 Black, 1 Neutron, 14 Empty and the Neutron
    /// field agrees with the grid.
    pub fn is_consistent(&self) -> bool {
        self.board.count(Cell::White) == PIECES_PER_SIDE
            && self.board.count(Cell::Black) == PIECES_PER_SIDE
            && self.board.count(Cell::Neutron) == 1
            && self.board.get(self.neutron) == Cell::Neutron
    }
}

impl Default for State {
    fn default() -> Self {
        new_initial_state()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        match self.mover {
            Some(side) => write!(f, "{side:?} to move"),
            None => write!(f, "game over"),
        }
    }
}
