//! Error types for the Neutron crate.

use std::path::PathBuf;

use thiserror::Error;

use crate::rules::movegen::Move;

/// Errors surfaced by the rules engine, search helpers, and front-end plumbing.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum NeutronError {
    /// `apply` was given a move that `legal_moves` does not produce for the state.
    #[error("illegal move: {mv}")]
    InvalidMove { mv: Move },

    /// A move was requested from a state where the game is already decided.
    #[error("no legal move available: the game is over")]
    NoLegalMove,

    /// A board violates the piece-count invariants.
    #[error("invalid board: {reason}")]
    InvalidBoard { reason: String },

    #[error("cannot parse '{input}': {reason}")]
    Parse { input: String, reason: String },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// A configured exploration budget was exceeded.
    #[error("limit exceeded at {stage}: {metric} (limit={limit}, observed={observed})")]
    LimitExceeded {
        stage: &'static str,
        metric: &'static str,
        limit: u64,
        observed: u64,
    },

    #[error("io error for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
