use std::fmt;
use std::str::FromStr;

use crate::core::cell::Cell;
use crate::core::coord::{Position, BOARD_SIZE};
use crate::error::NeutronError;

const CELLS: usize = (BOARD_SIZE * BOARD_SIZE) as usize;

/// A 5x5 grid of cells stored row-major.
///
/// `Board` is a plain `Copy` value: "moving" a piece means editing a copy, so a board
/// held by one search frame can never be disturbed by another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            cells: [Cell::Empty; CELLS],
        }
    }

    /// White on row 0, Black on row 4, Neutron in the centre.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for col in 0..BOARD_SIZE {
            board.set(Position::new(0, col), Cell::White);
            board.set(Position::new(BOARD_SIZE - 1, col), Cell::Black);
        }
        board.set(Position::new(2, 2), Cell::Neutron);
        board
    }

    #[inline]
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    #[inline]
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.index()] = cell;
    }

    /// True iff `pos` is on the board and holds nothing.
    #[inline]
    pub fn is_open(&self, pos: Position) -> bool {
        pos.in_bounds() && self.get(pos).is_empty()
    }

    /// Copy of this board with the piece on `from` relocated to `to`.
    pub fn with_moved(&self, from: Position, to: Position) -> Self {
        let mut next = *self;
        let cell = next.get(from);
        next.set(from, Cell::Empty);
        next.set(to, cell);
        next
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Squares holding `cell`, in row-major order.
    pub fn positions_of(&self, cell: Cell) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(move |&p| self.get(p) == cell)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(BOARD_SIZE as usize)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

/// Renders the console grid:
///
/// ```text
///   0 1 2 3 4
/// 0 W W W W W
/// 1 . . . . .
/// ```
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {col}")?;
        }
        for (r, row) in self.rows().enumerate() {
            write!(f, "\n{r}")?;
            for cell in row {
                write!(f, " {}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

/// Parses five rows of `W`, `B`, `N`, `.` separated by `/` or newlines.
///
/// Whitespace inside a row is ignored, so `"W W W W W"` and `"WWWWW"` are the same row.
/// Only the shape is checked here; piece counts are validated by
/// [`crate::state::State::from_board`].
impl FromStr for Board {
    type Err = NeutronError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = |reason: String| NeutronError::Parse {
            input: s.to_string(),
            reason,
        };

        let rows: Vec<&str> = s
            .split(|c: char| c == '/' || c == '\n')
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .collect();
        if rows.len() != BOARD_SIZE as usize {
            return Err(parse_err(format!(
                "expected {BOARD_SIZE} rows, got {}",
                rows.len()
            )));
        }

        let mut board = Board::empty();
        for (r, row) in rows.iter().enumerate() {
            let cells: Vec<char> = row.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != BOARD_SIZE as usize {
                return Err(parse_err(format!(
                    "row {r} has {} cells, expected {BOARD_SIZE}",
                    cells.len()
                )));
            }
            for (c, ch) in cells.into_iter().enumerate() {
                let cell = Cell::from_symbol(ch)
                    .ok_or_else(|| parse_err(format!("unknown cell '{ch}' in row {r}")))?;
                board.set(Position::new(r as i8, c as i8), cell);
            }
        }
        Ok(board)
    }
}
