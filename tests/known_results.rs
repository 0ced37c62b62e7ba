use neutron::rules::movegen::legal_moves;
use neutron::search::explore::{explore, perft};
use neutron::search::resources::ResourceLimits;
use neutron::{apply, new_initial_state, Cell, NeutronError, State};

#[test]
fn perft_from_the_initial_position() {
    let s = new_initial_state();
    assert_eq!(perft(&s, 0), 1);
    assert_eq!(perft(&s, 1), 95);
    assert_eq!(perft(&s, 2), 4_836);
}

#[test]
fn distinct_states_in_the_first_two_plies() {
    let counts = explore(&new_initial_state(), 2, ResourceLimits::default()).unwrap();
    assert_eq!(counts.plies.len(), 3);

    assert_eq!(counts.plies[0].states, 1);
    assert_eq!(counts.plies[1].states, 95);
    assert_eq!(counts.plies[2].states, 2_096);

    // Black can push the Neutron onto White's goal row, which hands White the game.
    assert_eq!(counts.plies[1].white_wins, 0);
    assert_eq!(counts.plies[2].white_wins, 146);
    assert_eq!(counts.plies[2].black_wins, 0);
    assert_eq!(counts.total_states(), 1 + 95 + 2_096);
    assert_eq!(counts.resources.edges, 95 + 4_836);
}

#[test]
fn exploration_respects_the_state_budget() {
    let limits = ResourceLimits {
        max_states: 500,
        ..ResourceLimits::default()
    };
    match explore(&new_initial_state(), 2, limits) {
        Err(NeutronError::LimitExceeded { metric, limit, .. }) => {
            assert_eq!(metric, "states");
            assert_eq!(limit, 500);
        }
        other => panic!("expected LimitExceeded, got {other:?}"),
    }
}

#[test]
fn piece_counts_hold_on_every_reachable_state() {
    // Every state within two plies, reached through the public `apply`.
    let start = new_initial_state();
    let mut frontier: Vec<State> = vec![start];
    for _ in 0..2 {
        let mut next = Vec::new();
        for s in &frontier {
            for mv in legal_moves(s) {
                let after = apply(s, &mv).expect("generated moves are legal");
                next.push(after);
            }
        }
        for s in &next {
            let b = s.board();
            assert_eq!(b.count(Cell::White), 5);
            assert_eq!(b.count(Cell::Black), 5);
            assert_eq!(b.count(Cell::Neutron), 1);
            assert_eq!(b.count(Cell::Empty), 14);
            assert_eq!(b.get(s.neutron()), Cell::Neutron);
        }
        frontier = next;
    }
    assert_eq!(frontier.len(), 4_836);
}
