use anyhow::bail;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

use seabattle::{init_logging, random_board, AutoPlayer, Game, ShotOutcome, Side, TurnEvent};

#[derive(Serialize)]
struct SideSummary {
    shots: usize,
    hits: usize,
    ships_left: usize,
}

#[derive(Serialize)]
struct MatchSummary {
    winner: &'static str,
    player1: SideSummary,
    player2: SideSummary,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <board-seed> <play-seed>", args[0]);
        std::process::exit(1);
    }
    let board_seed: u64 = args[1].parse()?;
    let play_seed: u64 = args[2].parse()?;

    let mut board_rng = SmallRng::seed_from_u64(board_seed);
    let mut play_rng = SmallRng::seed_from_u64(play_seed);

    let mut game = Game::new(
        Box::new(AutoPlayer::new()),
        random_board(&mut board_rng, false),
        Box::new(AutoPlayer::new()),
        random_board(&mut board_rng, false),
    );

    let mut shots = [0usize; 2];
    let mut hits = [0usize; 2];
    while let Some(event) = game.step(&mut play_rng) {
        if let TurnEvent::Resolved { by, outcome, .. } = event {
            let i = match by {
                Side::One => 0,
                Side::Two => 1,
            };
            shots[i] += 1;
            if outcome != ShotOutcome::Miss {
                hits[i] += 1;
            }
        }
    }

    let winner = match game.winner() {
        Some(Side::One) => "player1",
        Some(Side::Two) => "player2",
        None => bail!("game ended without a winner"),
    };

    let summary = MatchSummary {
        winner,
        player1: SideSummary {
            shots: shots[0],
            hits: hits[0],
            ships_left: game.board(Side::One).ships_alive(),
        },
        player2: SideSummary {
            shots: shots[1],
            hits: hits[1],
            ships_left: game.board(Side::Two).ships_alive(),
        },
    };
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
