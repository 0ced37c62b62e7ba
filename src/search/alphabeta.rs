//! Depth-limited minimax with alpha-beta pruning.

use serde::{Deserialize, Serialize};

use crate::core::cell::Side;
use crate::error::NeutronError;
use crate::observer::{NoObserver, SearchObserver};
use crate::rules::apply::apply_unchecked;
use crate::rules::movegen::{legal_moves, legal_moves_observed, Move};
use crate::rules::terminal::{neutron_on_goal_row, outcome};
use crate::search::eval::{evaluate, Score, SCORE_LOSS, SCORE_WIN};
use crate::state::State;

/// Result of a search: the backed-up score (from the searching side's point of view) and
/// the chosen move, if the root was expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub score: Score,
    pub best_move: Option<Move>,
}

impl SearchResult {
    #[inline]
    fn leaf(score: Score) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

/// Search `depth` plies from `state` on behalf of `ai_side`.
///
/// Nodes where `ai_side` is to move maximize, the others minimize. A decided state or
/// `depth == 0` is scored with [`evaluate`] and returns no move.
///
/// The running best starts at the worst sentinel for the node ([`SCORE_LOSS`] when
/// maximizing, [`SCORE_WIN`] when minimizing) with no move. Moves are tried in
/// [`legal_moves`] order and only a strictly better score replaces the best, so the earliest
/// of equally scored moves is kept, and a root where every move scores the sentinel returns
/// `best_move == None`. Pruning only skips work: the result equals
/// [`crate::search::minimax::minimax`] for the same arguments.
pub fn search(state: &State, depth: u32, ai_side: Side) -> SearchResult {
    search_observed(state, depth, ai_side, &mut NoObserver)
}

/// [`search`], reporting nodes, leaves, move lists, and cutoffs to `observer`.
pub fn search_observed<O: SearchObserver + ?Sized>(
    state: &State,
    depth: u32,
    ai_side: Side,
    observer: &mut O,
) -> SearchResult {
    alphabeta(state, depth, ai_side, SCORE_LOSS, SCORE_WIN, observer)
}

fn alphabeta<O: SearchObserver + ?Sized>(
    state: &State,
    depth: u32,
    ai_side: Side,
    mut alpha: Score,
    mut beta: Score,
    observer: &mut O,
) -> SearchResult {
    observer.node_entered(state, depth);

    let moves = if depth == 0 || neutron_on_goal_row(state) {
        Vec::new()
    } else {
        legal_moves_observed(state, observer)
    };
    if moves.is_empty() {
        let score = evaluate(state, ai_side);
        observer.leaf_scored(state, score);
        return SearchResult::leaf(score);
    }

    let maximizing = state.mover() == Some(ai_side);
    let mut best_score = if maximizing { SCORE_LOSS } else { SCORE_WIN };
    let mut best_move = None;

    for mv in moves {
        let child = apply_unchecked(state, &mv);
        let v = alphabeta(&child, depth - 1, ai_side, alpha, beta, observer).score;

        if maximizing {
            if v > best_score {
                best_score = v;
                best_move = Some(mv);
            }
            alpha = alpha.max(v);
        } else {
            if v < best_score {
                best_score = v;
                best_move = Some(mv);
            }
            beta = beta.min(v);
        }
        if beta <= alpha {
            observer.cutoff(state, depth, alpha, beta);
            break;
        }
    }

    SearchResult {
        score: best_score,
        best_move,
    }
}

/// The move `side` should play from `state`, searching `depth` plies (at least one).
///
/// When every move scores as a loss, [`search`] returns no move; this still plays the first
/// legal move. Fails with [`NeutronError::NoLegalMove`] if the game is already decided.
pub fn best_move(state: &State, depth: u32, side: Side) -> Result<Move, NeutronError> {
    best_move_observed(state, depth, side, &mut NoObserver)
}

pub fn best_move_observed<O: SearchObserver + ?Sized>(
    state: &State,
    depth: u32,
    side: Side,
    observer: &mut O,
) -> Result<Move, NeutronError> {
    if outcome(state).is_over() {
        return Err(NeutronError::NoLegalMove);
    }
    match search_observed(state, depth.max(1), side, observer).best_move {
        Some(mv) => Ok(mv),
        None => legal_moves(state)
            .first()
            .copied()
            .ok_or(NeutronError::NoLegalMove),
    }
}
