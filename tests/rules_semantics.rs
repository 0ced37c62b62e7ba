use neutron::rules::movegen::legal_moves;
use neutron::rules::slides::slides;
use neutron::rules::terminal::{has_legal_move, is_terminal, outcome, Outcome};
use neutron::{apply, new_initial_state, Board, Cell, Move, NeutronError, Position, Side, State};

fn state(rows: &str, mover: Side) -> State {
    let board: Board = rows.parse().expect("board text");
    State::from_board(board, mover).expect("valid board")
}

fn p(row: i8, col: i8) -> Position {
    Position::new(row, col)
}

#[test]
fn initial_neutron_slides_stop_short_of_home_rows() {
    let s = new_initial_state();
    assert_eq!(s.neutron(), p(2, 2));
    assert_eq!(s.mover(), Some(Side::White));

    let got = slides(s.neutron(), s.board());
    assert_eq!(
        got,
        vec![
            p(1, 1),
            p(1, 2),
            p(1, 3),
            p(2, 0),
            p(2, 4),
            p(3, 1),
            p(3, 2),
            p(3, 3),
        ]
    );
    assert!(got.iter().all(|d| d.row != 0 && d.row != 4));
    assert!(legal_moves(&s).iter().all(|m| m.piece.is_some()));
}

#[test]
fn slides_are_maximal_not_stepwise() {
    let s = new_initial_state();
    // The piece on (0,0) next to a Neutron on (1,1) runs down column 0 until Black's row.
    let first = legal_moves(&s)[0];
    assert_eq!(first, Move::with_piece(p(1, 1), p(0, 0), p(3, 0)));
    assert!(!legal_moves(&s).contains(&Move::with_piece(p(1, 1), p(0, 0), p(2, 0))));
}

#[test]
fn legal_moves_follow_direction_then_piece_order() {
    let s = new_initial_state();
    let moves = legal_moves(&s);
    assert_eq!(moves.len(), 95);

    let expected_prefix = [
        Move::with_piece(p(1, 1), p(0, 0), p(3, 0)),
        Move::with_piece(p(1, 1), p(0, 1), p(1, 0)),
        Move::with_piece(p(1, 1), p(0, 1), p(3, 4)),
        Move::with_piece(p(1, 1), p(0, 2), p(3, 2)),
        Move::with_piece(p(1, 1), p(0, 2), p(2, 4)),
    ];
    assert_eq!(&moves[..5], &expected_prefix);

    // Neutron destinations appear grouped, in slide order.
    let mut targets: Vec<Position> = moves.iter().map(|m| m.neutron_to).collect();
    targets.dedup();
    assert_eq!(targets, slides(s.neutron(), s.board()));
}

#[test]
fn reaching_the_goal_row_is_a_bare_winning_move() {
    let s = state(".WWWW/W..../..N../...../BBBBB", Side::White);
    let moves = legal_moves(&s);
    assert_eq!(moves[0], Move::winning(p(0, 0)));
    // No piece moves are generated for the winning Neutron square.
    assert!(moves
        .iter()
        .filter(|m| m.neutron_to == p(0, 0))
        .all(|m| m.piece.is_none()));

    let next = apply(&s, &moves[0]).unwrap();
    assert_eq!(next.mover(), None);
    assert_eq!(next.neutron(), p(0, 0));
    assert!(next.is_consistent());
    assert_eq!(is_terminal(&next), (true, Some(Side::White)));
}

#[test]
fn opponent_goal_row_is_not_a_winning_square() {
    let s = state("WWWWW/BBBBB/..N../...../.....", Side::Black);
    let moves = legal_moves(&s);
    assert!(moves.iter().any(|m| *m == Move::winning(p(4, 2))));

    // White may push the Neutron onto row 4, but must then move a piece.
    let s = state("WWWWW/...../..N../B..../BBBB.", Side::White);
    let onto_black_row: Vec<Move> = legal_moves(&s)
        .into_iter()
        .filter(|m| m.neutron_to.row == 4)
        .collect();
    assert!(!onto_black_row.is_empty());
    assert!(onto_black_row.iter().all(|m| m.piece.is_some()));
}

#[test]
fn surrounded_neutron_loses_for_the_mover() {
    let rows = "WWW../WNB../BBW../...../...BB";
    for mover in [Side::White, Side::Black] {
        let s = state(rows, mover);
        assert!(slides(s.neutron(), s.board()).is_empty());
        assert!(legal_moves(&s).is_empty());
        assert_eq!(is_terminal(&s), (true, Some(mover.other())));
    }
}

#[test]
fn mover_without_piece_moves_loses() {
    // The Neutron has five slides, but White's home row is sealed by Black.
    let s = state("WWWWW/BBBBB/..N../...../.....", Side::White);
    assert_eq!(slides(s.neutron(), s.board()).len(), 5);
    assert!(legal_moves(&s).is_empty());
    assert_eq!(outcome(&s), Outcome::Won(Side::Black));

    // Same board, Black to move: Black can move and is not lost.
    let s = state("WWWWW/BBBBB/..N../...../.....", Side::Black);
    assert_eq!(legal_moves(&s).len(), 25);
    assert_eq!(is_terminal(&s), (false, None));
}

#[test]
fn goal_row_takes_priority_over_blocked_neutron() {
    // Neutron on White's goal row with no slides: White wins even with White to move.
    let s = state("WNWWW/WBB../...../...../BBB..", Side::White);
    assert!(slides(s.neutron(), s.board()).is_empty());
    assert_eq!(is_terminal(&s), (true, Some(Side::White)));
}

#[test]
fn apply_is_pure_and_switches_sides() {
    let s = new_initial_state();
    let before = s;
    let mv = legal_moves(&s)[10];

    let next = apply(&s, &mv).unwrap();
    assert_eq!(s, before);
    assert_eq!(next.mover(), Some(Side::Black));
    assert_eq!(next.neutron(), mv.neutron_to);
    let pm = mv.piece.unwrap();
    assert_eq!(next.board().get(pm.from), Cell::Empty);
    assert_eq!(next.board().get(pm.to), Cell::White);
    assert_eq!(next.board().get(p(2, 2)), Cell::Empty);
    assert!(next.is_consistent());

    assert_eq!(legal_moves(&s), legal_moves(&s));
}

#[test]
fn apply_rejects_moves_outside_the_generator() {
    let s = new_initial_state();

    // Destination empty, but not the end of the slide.
    let short = Move::with_piece(p(1, 1), p(0, 0), p(2, 0));
    // Moving an opponent piece.
    let foreign = Move::with_piece(p(1, 1), p(4, 0), p(3, 0));
    // Neutron target not on any slide line.
    let teleport = Move::with_piece(p(1, 0), p(0, 4), p(3, 4));
    // A bare Neutron move that does not win.
    let bare = Move::winning(p(1, 2));

    for mv in [short, foreign, teleport, bare] {
        match apply(&s, &mv) {
            Err(NeutronError::InvalidMove { mv: rejected }) => assert_eq!(rejected, mv),
            other => panic!("{mv} should be rejected, got {other:?}"),
        }
    }
}

#[test]
fn no_moves_are_accepted_once_the_game_is_decided() {
    let s = state(".WWWW/W..../..N../...../BBBBB", Side::White);
    let won = apply(&s, &Move::winning(p(0, 0))).unwrap();
    assert!(legal_moves(&won).is_empty());
    assert!(apply(&won, &Move::with_piece(p(1, 1), p(0, 1), p(1, 0))).is_err());
}

#[test]
fn has_legal_move_agrees_with_the_generator() {
    let sealed = state("WWWWW/BBBBB/..N../...../.....", Side::White);
    assert!(!has_legal_move(&sealed));

    let mut frontier = vec![new_initial_state()];
    for _ in 0..2 {
        let mut next = Vec::new();
        for s in &frontier {
            let moves = legal_moves(s);
            assert_eq!(has_legal_move(s), !moves.is_empty());
            for mv in moves {
                next.push(apply(s, &mv).unwrap());
            }
        }
        frontier = next;
    }
}
