use clap::Parser;
use log::info;

use neutron::search::explore::{explore, perft};
use neutron::search::resources::ResourceLimits;
use neutron::{new_initial_state, Board, Side, State};

#[derive(Parser, Debug)]
#[command(
    name = "explore",
    about = "Count reachable Neutron positions and print them as JSON"
)]
struct Args {
    /// Plies to explore
    #[arg(long, default_value_t = 2)]
    plies: u32,

    /// Also count move sequences (perft) to this depth
    #[arg(long)]
    perft: Option<u32>,

    /// Budget on distinct states
    #[arg(long, default_value_t = ResourceLimits::default().max_states)]
    max_states: usize,

    /// Start position as five rows, e.g. "WWWWW/...../..N../...../BBBBB"
    #[arg(long)]
    board: Option<String>,

    /// Side to move in --board
    #[arg(long, default_value = "white", value_parser = parse_side)]
    mover: Side,
}

fn parse_side(s: &str) -> Result<Side, String> {
    match s.to_ascii_lowercase().as_str() {
        "white" | "w" => Ok(Side::White),
        "black" | "b" => Ok(Side::Black),
        _ => Err(format!("unknown side '{s}' (expected white or black)")),
    }
}

fn start_state(args: &Args) -> Result<State, neutron::NeutronError> {
    match &args.board {
        None => Ok(new_initial_state()),
        Some(text) => {
            let board: Board = text.parse()?;
            State::from_board(board, args.mover)
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let start = match start_state(&args) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Invalid start position: {e}");
            std::process::exit(2);
        }
    };

    let limits = ResourceLimits {
        max_states: args.max_states,
        ..ResourceLimits::default()
    };
    info!("exploring {} plies (max_states={})", args.plies, limits.max_states);

    let counts = match explore(&start, args.plies, limits) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Exploration failed: {e}");
            std::process::exit(1);
        }
    };

    let perft_count = args.perft.map(|depth| perft(&start, depth));

    let out = serde_json::json!({
        "start": start.board().to_string(),
        "mover": start.mover(),
        "counts": counts,
        "perft": args.perft.zip(perft_count).map(|(depth, nodes)| {
            serde_json::json!({ "depth": depth, "nodes": nodes })
        }),
    });
    match serde_json::to_string_pretty(&out) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Failed to encode results: {e}");
            std::process::exit(1);
        }
    }
}
