use serde::{Deserialize, Serialize};

use crate::core::cell::Cell;
use crate::core::coord::Position;
use crate::observer::{NoObserver, SearchObserver};
use crate::rules::slides::slides;
use crate::state::State;

/// Relocation of one of the mover's own pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceMove {
    pub from: Position,
    pub to: Position,
}

/// A full turn: a Neutron slide, then (unless the Neutron landed on the mover's goal row)
/// a slide of one of the mover's pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub neutron_to: Position,
    pub piece: Option<PieceMove>,
}

impl Move {
    /// Neutron onto the mover's goal row; the game ends before any piece moves.
    pub const fn winning(neutron_to: Position) -> Self {
        Self {
            neutron_to,
            piece: None,
        }
    }

    pub const fn with_piece(neutron_to: Position, from: Position, to: Position) -> Self {
        Self {
            neutron_to,
            piece: Some(PieceMove { from, to }),
        }
    }
}

/// Every legal move for the side to move, in generation order.
///
/// Order: Neutron destinations in direction order; for each, the mover's pieces in row-major
/// order; for each piece, its destinations in direction order. Search tie-breaking depends on
/// this order, so it must stay stable.
///
/// A decided state (`mover == None`) has no moves.
pub fn legal_moves(state: &State) -> Vec<Move> {
    legal_moves_observed(state, &mut NoObserver)
}

/// [`legal_moves`], reporting the generated list to `observer`.
pub fn legal_moves_observed<O: SearchObserver + ?Sized>(state: &State, observer: &mut O) -> Vec<Move> {
    let Some(mover) = state.mover() else {
        return Vec::new();
    };
    let board = state.board();
    let own = mover.piece();

    let mut out = Vec::new();
    for nm in slides(state.neutron(), board) {
        if nm.row == mover.goal_row() {
            out.push(Move::winning(nm));
            continue;
        }

        let snapshot = board.with_moved(state.neutron(), nm);
        debug_assert_eq!(snapshot.get(nm), Cell::Neutron);
        for from in snapshot.positions_of(own) {
            for to in slides(from, &snapshot) {
                out.push(Move::with_piece(nm, from, to));
            }
        }
    }

    observer.moves_generated(state, &out);
    out
}
