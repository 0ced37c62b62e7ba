//! Budgets for state-space exploration.
//!
//! Exploration grows exponentially with the number of plies. Counter-based budgets turn a
//! runaway walk into a [`NeutronError::LimitExceeded`] instead of an OOM abort, and
//! `try_reserve` wrappers surface allocation failures the same way.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::NeutronError;

/// Exploration budgets. Counts are approximate proxies for memory and time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLimits {
    /// Distinct states admitted across all plies.
    pub max_states: usize,
    /// Generated moves (edges) across all plies.
    pub max_edges: u64,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_states: 2_000_000,
            max_edges: 50_000_000,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceCounts {
    pub states: u64,
    pub edges: u64,
}

#[derive(Debug, Clone)]
pub struct ResourceTracker {
    limits: ResourceLimits,
    counts: ResourceCounts,
}

impl ResourceTracker {
    #[inline]
    pub fn new(limits: ResourceLimits) -> Self {
        Self {
            limits,
            counts: ResourceCounts::default(),
        }
    }

    #[inline]
    pub fn counts(&self) -> ResourceCounts {
        self.counts
    }

    #[inline]
    pub fn bump_states(&mut self, stage: &'static str, delta: usize) -> Result<(), NeutronError> {
        let limit = self.limits.max_states as u64;
        Self::bump(&mut self.counts.states, stage, "states", delta as u64, limit)
    }

    #[inline]
    pub fn bump_edges(&mut self, stage: &'static str, delta: usize) -> Result<(), NeutronError> {
        let limit = self.limits.max_edges;
        Self::bump(&mut self.counts.edges, stage, "edges", delta as u64, limit)
    }

    fn bump(
        counter: &mut u64,
        stage: &'static str,
        metric: &'static str,
        delta: u64,
        limit: u64,
    ) -> Result<(), NeutronError> {
        *counter = counter.saturating_add(delta);
        if *counter > limit {
            return Err(NeutronError::LimitExceeded {
                stage,
                metric,
                limit,
                observed: *counter,
            });
        }
        Ok(())
    }

    pub fn try_reserve_set<K>(
        &self,
        stage: &'static str,
        set: &mut FxHashSet<K>,
        additional: usize,
    ) -> Result<(), NeutronError>
    where
        K: std::hash::Hash + Eq,
    {
        set.try_reserve(additional)
            .map_err(|_| NeutronError::LimitExceeded {
                stage,
                metric: "allocation",
                limit: self.limits.max_states as u64,
                observed: (set.len() + additional) as u64,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exceeding_a_budget_reports_the_metric() {
        let mut t = ResourceTracker::new(ResourceLimits {
            max_states: 3,
            max_edges: 100,
        });
        t.bump_states("test", 3).unwrap();
        match t.bump_states("test", 1) {
            Err(NeutronError::LimitExceeded {
                metric, observed, ..
            }) => {
                assert_eq!(metric, "states");
                assert_eq!(observed, 4);
            }
            other => panic!("expected LimitExceeded, got {other:?}"),
        }
        assert_eq!(t.counts().edges, 0);
    }
}
