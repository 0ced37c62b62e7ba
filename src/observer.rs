//! Observation hooks for move generation and search.
//!
//! The rules engine and the search never print. Anything that wants to watch them (a trace
//! log, node counters, a GUI preview) implements [`SearchObserver`] and is passed in
//! explicitly. Every hook has an empty default, so observers only override what they need.

use log::{debug, log_enabled, trace, Level};
use serde::{Deserialize, Serialize};

use crate::rules::movegen::Move;
use crate::search::eval::Score;
use crate::state::State;

pub trait SearchObserver {
    /// Called after `legal_moves` built the move list for `state`.
    #[inline]
    fn moves_generated(&mut self, _state: &State, _moves: &[Move]) {}

    /// Called when the search enters a node with `depth` plies remaining.
    #[inline]
    fn node_entered(&mut self, _state: &State, _depth: u32) {}

    /// Called when a node is scored statically (terminal or depth limit).
    #[inline]
    fn leaf_scored(&mut self, _state: &State, _score: Score) {}

    /// Called when a node stops scanning its moves because `beta <= alpha`.
    #[inline]
    fn cutoff(&mut self, _state: &State, _depth: u32, _alpha: Score, _beta: Score) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoObserver;
impl SearchObserver for NoObserver {}

impl<O: SearchObserver + ?Sized> SearchObserver for &mut O {
    fn moves_generated(&mut self, state: &State, moves: &[Move]) {
        (**self).moves_generated(state, moves)
    }

    fn node_entered(&mut self, state: &State, depth: u32) {
        (**self).node_entered(state, depth)
    }

    fn leaf_scored(&mut self, state: &State, score: Score) {
        (**self).leaf_scored(state, score)
    }

    fn cutoff(&mut self, state: &State, depth: u32, alpha: Score, beta: Score) {
        (**self).cutoff(state, depth, alpha, beta)
    }
}

/// Fan out to two observers.
impl<A: SearchObserver, B: SearchObserver> SearchObserver for (A, B) {
    fn moves_generated(&mut self, state: &State, moves: &[Move]) {
        self.0.moves_generated(state, moves);
        self.1.moves_generated(state, moves);
    }

    fn node_entered(&mut self, state: &State, depth: u32) {
        self.0.node_entered(state, depth);
        self.1.node_entered(state, depth);
    }

    fn leaf_scored(&mut self, state: &State, score: Score) {
        self.0.leaf_scored(state, score);
        self.1.leaf_scored(state, score);
    }

    fn cutoff(&mut self, state: &State, depth: u32, alpha: Score, beta: Score) {
        self.0.cutoff(state, depth, alpha, beta);
        self.1.cutoff(state, depth, alpha, beta);
    }
}

/// Forwards events to the `log` facade (target `neutron::search`).
///
/// Move lists and leaf scores are `trace`, cutoffs are `debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl SearchObserver for LogObserver {
    fn moves_generated(&mut self, state: &State, moves: &[Move]) {
        if !log_enabled!(target: "neutron::search", Level::Trace) {
            return;
        }
        let listed: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
        trace!(
            target: "neutron::search",
            "{} legal moves from neutron {} ({:?} to move): [{}]",
            moves.len(),
            state.neutron(),
            state.mover(),
            listed.join("; ")
        );
    }

    fn leaf_scored(&mut self, state: &State, score: Score) {
        trace!(
            target: "neutron::search",
            "leaf: neutron {} scored {score}",
            state.neutron()
        );
    }

    fn cutoff(&mut self, state: &State, depth: u32, alpha: Score, beta: Score) {
        debug!(
            target: "neutron::search",
            "cutoff at depth {depth} (neutron {}): alpha={alpha} beta={beta}",
            state.neutron()
        );
    }
}

/// Counts search work.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    pub nodes: u64,
    pub leaves: u64,
    pub cutoffs: u64,
    pub moves_generated: u64,
}

impl SearchObserver for SearchStats {
    fn moves_generated(&mut self, _state: &State, moves: &[Move]) {
        self.moves_generated += moves.len() as u64;
    }

    fn node_entered(&mut self, _state: &State, _depth: u32) {
        self.nodes += 1;
    }

    fn leaf_scored(&mut self, _state: &State, _score: Score) {
        self.leaves += 1;
    }

    fn cutoff(&mut self, _state: &State, _depth: u32, _alpha: Score, _beta: Score) {
        self.cutoffs += 1;
    }
}
