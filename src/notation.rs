//! Text notation for squares and moves, as typed at the console.
//!
//! - A square is `row,col`, e.g. `1,2`.
//! - A move is the Neutron target, then the piece's origin and target:
//!   `1,1 0,0 1,0`. A move that puts the Neutron on the mover's goal row is just the
//!   Neutron target: `0,2`.
//!
//! Parsing only checks the shape of the text. Whether the move is legal is decided by
//! [`crate::rules::apply::apply`].

use std::fmt;
use std::str::FromStr;

use crate::core::coord::Position;
use crate::error::NeutronError;
use crate::rules::movegen::{Move, PieceMove};

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl fmt::Display for PieceMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.from, self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.piece {
            Some(pm) => write!(f, "{} {}", self.neutron_to, pm),
            None => write!(f, "{}", self.neutron_to),
        }
    }
}

fn parse_error(input: &str, reason: impl Into<String>) -> NeutronError {
    NeutronError::Parse {
        input: input.to_string(),
        reason: reason.into(),
    }
}

impl FromStr for Position {
    type Err = NeutronError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (r, c) = s
            .trim()
            .split_once(',')
            .ok_or_else(|| parse_error(s, "expected row,col"))?;
        let row: i8 = r
            .trim()
            .parse()
            .map_err(|_| parse_error(s, format!("bad row '{}'", r.trim())))?;
        let col: i8 = c
            .trim()
            .parse()
            .map_err(|_| parse_error(s, format!("bad column '{}'", c.trim())))?;

        let pos = Position::new(row, col);
        if !pos.in_bounds() {
            return Err(parse_error(s, "square is off the board"));
        }
        Ok(pos)
    }
}

impl FromStr for Move {
    type Err = NeutronError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        match parts.as_slice() {
            [n] => Ok(Move::winning(n.parse()?)),
            [n, from, to] => Ok(Move::with_piece(n.parse()?, from.parse()?, to.parse()?)),
            _ => Err(parse_error(
                s,
                format!("expected 1 or 3 squares, got {}", parts.len()),
            )),
        }
    }
}
