use crate::core::board::Board;
use crate::core::coord::{Position, DIRECTIONS};

/// Maximal slides from `from`: for each of the 8 directions (in [`DIRECTIONS`] order), the
/// farthest empty square reached before a piece or the edge.
///
/// A direction whose first square is blocked contributes nothing, so the result has at most
/// 8 entries and never contains intermediate squares.
pub fn slides(from: Position, board: &Board) -> Vec<Position> {
    let mut out = Vec::with_capacity(DIRECTIONS.len());
    for step in DIRECTIONS {
        let mut last = None;
        let mut cur = from + step;
        while board.is_open(cur) {
            last = Some(cur);
            cur = cur + step;
        }
        if let Some(dst) = last {
            out.push(dst);
        }
    }
    out
}

/// True iff a piece on `from` has at least one slide.
pub fn can_slide(from: Position, board: &Board) -> bool {
    DIRECTIONS.iter().any(|&step| board.is_open(from + step))
}
