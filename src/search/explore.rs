//! Breadth-first exploration of the reachable state space.
//!
//! Used for sanity checks (piece-count invariants, move-generator regressions) and by the
//! `explore` binary.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::cell::Side;
use crate::error::NeutronError;
use crate::rules::apply::apply_unchecked;
use crate::rules::movegen::legal_moves;
use crate::rules::terminal::{neutron_on_goal_row, outcome, Outcome};
use crate::search::resources::{ResourceCounts, ResourceLimits, ResourceTracker};
use crate::state::State;

/// Distinct states first reached at one ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlyCounts {
    pub ply: u32,
    pub states: usize,
    pub white_wins: usize,
    pub black_wins: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReachCounts {
    pub plies: Vec<PlyCounts>,
    pub resources: ResourceCounts,
}

impl ReachCounts {
    pub fn total_states(&self) -> usize {
        self.plies.iter().map(|p| p.states).sum()
    }
}

/// Walk every state reachable from `start` in up to `plies` moves.
///
/// Each ply's frontier holds the distinct states at exactly that many moves from `start`
/// (a state reached at several plies is counted once per ply). Decided states are counted
/// and not expanded further.
pub fn explore(
    start: &State,
    plies: u32,
    limits: ResourceLimits,
) -> Result<ReachCounts, NeutronError> {
    let mut tracker = ResourceTracker::new(limits);
    let mut frontier: FxHashSet<State> = FxHashSet::default();
    frontier.insert(*start);
    tracker.bump_states("explore", 1)?;

    let mut out = vec![ply_counts(0, &frontier)];

    for ply in 1..=plies {
        let mut next: FxHashSet<State> = FxHashSet::default();
        for s in frontier.iter() {
            if outcome(s).is_over() {
                continue;
            }
            let moves = legal_moves(s);
            tracker.bump_edges("explore", moves.len())?;
            tracker.try_reserve_set("explore", &mut next, moves.len())?;
            for mv in moves {
                if next.insert(apply_unchecked(s, &mv)) {
                    tracker.bump_states("explore", 1)?;
                }
            }
        }

        out.push(ply_counts(ply, &next));
        if next.is_empty() {
            break;
        }
        frontier = next;
    }

    Ok(ReachCounts {
        plies: out,
        resources: tracker.counts(),
    })
}

fn ply_counts(ply: u32, states: &FxHashSet<State>) -> PlyCounts {
    let mut white_wins = 0;
    let mut black_wins = 0;
    for s in states {
        match outcome(s) {
            Outcome::Won(Side::White) => white_wins += 1,
            Outcome::Won(Side::Black) => black_wins += 1,
            Outcome::Ongoing => {}
        }
    }
    PlyCounts {
        ply,
        states: states.len(),
        white_wins,
        black_wins,
    }
}

/// Number of move sequences of exactly `depth` plies from `state`.
///
/// Sequences that end the game early are not counted.
pub fn perft(state: &State, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    if neutron_on_goal_row(state) {
        return 0;
    }
    let moves = legal_moves(state);
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .iter()
        .map(|mv| perft(&apply_unchecked(state, mv), depth - 1))
        .sum()
}
