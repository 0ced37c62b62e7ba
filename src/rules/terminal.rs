use serde::{Deserialize, Serialize};

use crate::core::cell::Side;
use crate::core::coord::Position;
use crate::rules::slides::{can_slide, slides};
use crate::state::State;

/// Whether a game is still running, and who won if not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Ongoing,
    Won(Side),
}

impl Outcome {
    #[inline]
    pub fn is_over(self) -> bool {
        matches!(self, Outcome::Won(_))
    }

    #[inline]
    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::Ongoing => None,
            Outcome::Won(side) => Some(side),
        }
    }
}

/// Decide `state`, checking in priority order:
/// 1. Neutron on row 0: White wins.
/// 2. Neutron on row 4: Black wins.
/// 3. The Neutron cannot slide at all: the mover loses.
/// 4. No full legal move exists: the mover loses.
///
/// A goal-row Neutron decides the game on its own, whatever else holds on the board.
pub fn outcome(state: &State) -> Outcome {
    let row = state.neutron().row;
    if row == Side::White.goal_row() {
        return Outcome::Won(Side::White);
    }
    if row == Side::Black.goal_row() {
        return Outcome::Won(Side::Black);
    }

    // `mover == None` is only produced by a goal-row Neutron move, handled above.
    let Some(mover) = state.mover() else {
        unreachable!("state without a mover must have the neutron on a goal row");
    };

    if !can_slide(state.neutron(), state.board()) {
        return Outcome::Won(mover.other());
    }
    if !has_legal_move(state) {
        return Outcome::Won(mover.other());
    }
    Outcome::Ongoing
}

/// Equivalent to `!legal_moves(state).is_empty()`, stopping at the first move found.
pub fn has_legal_move(state: &State) -> bool {
    let Some(mover) = state.mover() else {
        return false;
    };
    let board = state.board();
    slides(state.neutron(), board).into_iter().any(|nm| {
        if nm.row == mover.goal_row() {
            return true;
        }
        let snapshot = board.with_moved(state.neutron(), nm);
        Position::all().any(|p| snapshot.get(p) == mover.piece() && can_slide(p, &snapshot))
    })
}

/// True iff the Neutron sits on either goal row (the game is decided by that alone).
#[inline]
pub fn neutron_on_goal_row(state: &State) -> bool {
    let row = state.neutron().row;
    row == Side::White.goal_row() || row == Side::Black.goal_row()
}

/// `(terminal, winner)` form of [`outcome`].
pub fn is_terminal(state: &State) -> (bool, Option<Side>) {
    let o = outcome(state);
    (o.is_over(), o.winner())
}
