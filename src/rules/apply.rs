use crate::core::cell::Cell;
use crate::error::NeutronError;
use crate::rules::movegen::{legal_moves, Move};
use crate::state::State;

/// Play `mv` on `state`, returning the successor.
///
/// The move must be one of [`legal_moves`]`(state)`; anything else (including any move from a
/// decided state) is rejected with [`NeutronError::InvalidMove`] before a board is built.
/// `state` itself is never modified.
pub fn apply(state: &State, mv: &Move) -> Result<State, NeutronError> {
    if !legal_moves(state).contains(mv) {
        return Err(NeutronError::InvalidMove { mv: *mv });
    }
    Ok(apply_unchecked(state, mv))
}

/// Transition without the legality check. Only for moves taken from `legal_moves(state)`.
pub(crate) fn apply_unchecked(state: &State, mv: &Move) -> State {
    let mover = state
        .mover()
        .expect("legal moves only exist for states with a mover");

    let mut board = state.board().with_moved(state.neutron(), mv.neutron_to);
    let next_mover = match mv.piece {
        Some(pm) => {
            debug_assert_eq!(board.get(pm.from), mover.piece());
            debug_assert_eq!(board.get(pm.to), Cell::Empty);
            board = board.with_moved(pm.from, pm.to);
            Some(mover.other())
        }
        None => None,
    };

    State::from_parts(board, mv.neutron_to, next_mover)
}
