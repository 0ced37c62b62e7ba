//! Game-tree search: static evaluation, alpha-beta, and state-space exploration.

pub mod alphabeta;
pub mod eval;
pub mod explore;
pub mod minimax;
pub mod resources;
