//! Exhaustive minimax without pruning.
//!
//! Visits every node to the given depth. It exists as the reference [`super::alphabeta`] is
//! checked against, and shares its move order and tie-breaking exactly.

use crate::core::cell::Side;
use crate::rules::apply::apply_unchecked;
use crate::rules::movegen::legal_moves;
use crate::rules::terminal::neutron_on_goal_row;
use crate::search::alphabeta::SearchResult;
use crate::search::eval::{evaluate, SCORE_LOSS, SCORE_WIN};
use crate::state::State;

pub fn minimax(state: &State, depth: u32, ai_side: Side) -> SearchResult {
    let moves = if depth == 0 || neutron_on_goal_row(state) {
        Vec::new()
    } else {
        legal_moves(state)
    };

    if moves.is_empty() {
        return SearchResult {
            score: evaluate(state, ai_side),
            best_move: None,
        };
    }

    let maximizing = state.mover() == Some(ai_side);
    let mut best_score = if maximizing { SCORE_LOSS } else { SCORE_WIN };
    let mut best_move = None;
    for mv in moves {
        let child = apply_unchecked(state, &mv);
        let v = minimax(&child, depth - 1, ai_side).score;
        let improves = if maximizing { v > best_score } else { v < best_score };
        if improves {
            best_score = v;
            best_move = Some(mv);
        }
    }

    SearchResult {
        score: best_score,
        best_move,
    }
}
