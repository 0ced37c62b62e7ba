//! Neutron rules: slide geometry, move generation, terminal detection, and transitions.

pub mod apply;
pub mod movegen;
pub mod slides;
pub mod terminal;
