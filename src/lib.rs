//! Rules engine and alpha-beta player for the board game Neutron.
//!
//! Two sides share a single Neutron on a 5x5 board. A turn slides the Neutron, then one of
//! the mover's own pieces; every slide runs as far as it can. Moving the Neutron onto your
//! own home row wins, and so does leaving the opponent without a legal turn.
//!
//! The API is value based: a [`State`] is never modified, [`apply`] returns a new one.

pub mod config;
pub mod core;
pub mod error;
pub mod notation;
pub mod observer;
pub mod rules;
pub mod search;
pub mod state;

pub use crate::core::board::Board;
pub use crate::core::cell::{Cell, Side};
pub use crate::core::coord::Position;
pub use crate::error::NeutronError;
pub use crate::rules::apply::apply;
pub use crate::rules::movegen::{legal_moves, Move, PieceMove};
pub use crate::rules::slides::slides;
pub use crate::rules::terminal::{is_terminal, outcome, Outcome};
pub use crate::search::alphabeta::{best_move, search, SearchResult};
pub use crate::search::eval::{evaluate, Score, SCORE_LOSS, SCORE_WIN};
pub use crate::state::{new_initial_state, State};
