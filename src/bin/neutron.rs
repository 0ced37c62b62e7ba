use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use log::{debug, info};

use neutron::config::{PlayConfig, Player};
use neutron::observer::{LogObserver, SearchStats};
use neutron::search::alphabeta::best_move_observed;
use neutron::{apply, legal_moves, new_initial_state, outcome, Move, NeutronError, Outcome, Side, State};

#[derive(Parser, Debug)]
#[command(name = "neutron", about = "Play Neutron on the console")]
struct Args {
    /// JSON play configuration; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Let the computer play White, searching this many plies
    #[arg(long, value_name = "DEPTH")]
    white_ai: Option<u32>,

    /// Let the computer play Black, searching this many plies
    #[arg(long, value_name = "DEPTH")]
    black_ai: Option<u32>,

    /// Black is played by a human (overrides the configured computer)
    #[arg(long, conflicts_with = "black_ai")]
    human_black: bool,

    /// Stop after this many plies
    #[arg(long)]
    max_plies: Option<u32>,

    /// Log search internals (use with RUST_LOG=neutron=trace)
    #[arg(long)]
    trace_search: bool,
}

fn build_config(args: &Args) -> Result<PlayConfig, NeutronError> {
    let mut cfg = match &args.config {
        Some(path) => PlayConfig::load(path)?,
        None => PlayConfig::default(),
    };

    if let Some(depth) = args.white_ai {
        cfg.white = Player::Computer { depth };
    }
    if let Some(depth) = args.black_ai {
        cfg.black = Player::Computer { depth };
    }
    if args.human_black {
        cfg.black = Player::Human;
    }
    if args.max_plies.is_some() {
        cfg.max_plies = args.max_plies;
    }
    cfg.trace_search |= args.trace_search;

    cfg.validate()?;
    Ok(cfg)
}

fn list_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Read moves until one is legal. `Ok(None)` on end of input.
fn human_turn(state: &State, input: &mut impl BufRead) -> Result<Option<State>, NeutronError> {
    println!("Neutron at {}", state.neutron());
    println!("Move format: neutron_row,col piece_row,col target_row,col  (e.g. 1,1 0,0 1,0)");

    loop {
        print!("Enter move: ");
        io::stdout().flush().map_err(|source| NeutronError::Io {
            path: PathBuf::from("<stdout>"),
            source,
        })?;

        let mut line = String::new();
        let read = input.read_line(&mut line).map_err(|source| NeutronError::Io {
            path: PathBuf::from("<stdin>"),
            source,
        })?;
        if read == 0 {
            return Ok(None);
        }

        let mv: Move = match line.parse() {
            Ok(mv) => mv,
            Err(e) => {
                println!("Invalid input format: {e}");
                continue;
            }
        };

        match apply(state, &mv) {
            Ok(next) => return Ok(Some(next)),
            Err(NeutronError::InvalidMove { .. }) => {
                println!("Invalid move! Available moves: {}", list_moves(&legal_moves(state)));
            }
            Err(e) => return Err(e),
        }
    }
}

fn computer_turn(state: &State, side: Side, depth: u32, trace: bool) -> Result<State, NeutronError> {
    let mut stats = SearchStats::default();
    let mv = if trace {
        best_move_observed(state, depth, side, &mut (LogObserver, &mut stats))?
    } else {
        best_move_observed(state, depth, side, &mut stats)?
    };
    debug!(
        "{side:?} searched depth {depth}: {} nodes, {} leaves, {} cutoffs",
        stats.nodes, stats.leaves, stats.cutoffs
    );
    println!("{side:?} plays {mv}");
    apply(state, &mv)
}

fn play(cfg: &PlayConfig) -> Result<(), NeutronError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut state = new_initial_state();
    let mut ply: u32 = 0;

    loop {
        println!("\n{}", state.board());

        if let Outcome::Won(winner) = outcome(&state) {
            println!("\nGame over! Winner: {winner:?}");
            info!("game decided after {ply} plies, winner {winner:?}");
            return Ok(());
        }
        if cfg.max_plies.is_some_and(|max| ply >= max) {
            println!("\nStopped after {ply} plies.");
            return Ok(());
        }
        let Some(mover) = state.mover() else {
            return Ok(());
        };

        println!("--- {mover:?} to move ---");
        state = match cfg.player(mover) {
            Player::Human => match human_turn(&state, &mut input)? {
                Some(next) => next,
                None => {
                    println!();
                    info!("input closed, leaving the game");
                    return Ok(());
                }
            },
            Player::Computer { depth } => computer_turn(&state, mover, depth, cfg.trace_search)?,
        };
        ply += 1;
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let cfg = match build_config(&args) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            std::process::exit(2);
        }
    };
    info!("white: {:?}, black: {:?}", cfg.white, cfg.black);

    if let Err(e) = play(&cfg) {
        eprintln!("Game aborted: {e}");
        std::process::exit(1);
    }
}
