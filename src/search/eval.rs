//! Static scoring.

use crate::core::cell::Side;
use crate::core::coord::BOARD_SIZE;
use crate::rules::terminal::{outcome, Outcome};
use crate::state::State;

/// Search score, always from the point of view of one evaluating side.
pub type Score = i32;

/// Score of a won terminal state. Strictly above every heuristic score.
pub const SCORE_WIN: Score = Score::MAX;

/// Score of a lost terminal state. Strictly below every heuristic score, and the exact
/// negation of [`SCORE_WIN`].
pub const SCORE_LOSS: Score = -Score::MAX;

/// Score `state` for `side`.
///
/// Decided states score [`SCORE_WIN`] / [`SCORE_LOSS`]. Otherwise the score is how far the
/// Neutron has travelled towards `side`'s goal row (0 on the opponent's goal row, 4 on
/// `side`'s), regardless of who is to move.
pub fn evaluate(state: &State, side: Side) -> Score {
    match outcome(state) {
        Outcome::Won(winner) if winner == side => SCORE_WIN,
        Outcome::Won(_) => SCORE_LOSS,
        Outcome::Ongoing => heuristic(state, side),
    }
}

/// The positional term of [`evaluate`], without the terminal check.
#[inline]
pub fn heuristic(state: &State, side: Side) -> Score {
    let row = state.neutron().row as Score;
    match side {
        Side::White => (BOARD_SIZE - 1) as Score - row,
        Side::Black => row,
    }
}
