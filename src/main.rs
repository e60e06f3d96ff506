use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::{
    format_target, greet, init_logging, print_board, random_board, AutoPlayer, Game, GameState,
    HumanPlayer, InputError, MoveError, ShotOutcome, Side, StdinInput, TurnEvent,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the computer.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch the computer play both sides.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Play { seed } => play(seed),
        Commands::Auto { seed } => auto(seed),
    }
}

fn rng_from(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn play(seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = rng_from(seed);
    greet();

    let mut game = Game::new(
        Box::new(HumanPlayer::new(StdinInput)),
        random_board(&mut rng, false),
        Box::new(AutoPlayer::new()),
        random_board(&mut rng, true),
    );

    loop {
        match game.state() {
            GameState::Finished(winner) => {
                println!("\nEnemy waters:");
                print_board(game.board(Side::Two));
                println!("\nYour waters:");
                print_board(game.board(Side::One));
                match winner {
                    Side::One => println!("\nYou win! The enemy fleet is destroyed."),
                    Side::Two => println!("\nYou lose. Your fleet is destroyed."),
                }
                return Ok(());
            }
            GameState::AwaitingMove(Side::One) => {
                println!("\nEnemy waters:");
                print_board(game.board(Side::Two));
                println!("\nYour waters:");
                print_board(game.board(Side::One));
            }
            GameState::AwaitingMove(Side::Two) => {}
        }

        let Some(event) = game.step(&mut rng) else {
            continue;
        };
        match event {
            TurnEvent::Rejected { by: Side::One, error } => {
                if matches!(error, MoveError::Input(InputError::Closed)) {
                    bail!("input stream closed before the game finished");
                }
                println!("Invalid move: {}", error);
            }
            TurnEvent::Rejected { by: Side::Two, error } => {
                // The machine re-rolls a fresh target on its next step.
                log::debug!("machine move rejected: {}", error);
            }
            TurnEvent::Resolved { by, target, outcome } => {
                let target = format_target(target);
                match (by, outcome) {
                    (Side::One, ShotOutcome::Hit) => {
                        println!("Hit at {}! Shoot again.", target)
                    }
                    (Side::One, ShotOutcome::Sunk) => {
                        println!("Enemy ship sunk at {}! Shoot again.", target)
                    }
                    (Side::One, ShotOutcome::Miss) => println!("Miss at {}.", target),
                    (Side::Two, ShotOutcome::Hit) => {
                        println!("The enemy hit your ship at {}.", target)
                    }
                    (Side::Two, ShotOutcome::Sunk) => {
                        println!("The enemy sank your ship at {}.", target)
                    }
                    (Side::Two, ShotOutcome::Miss) => {
                        println!("The enemy missed at {}.", target)
                    }
                }
            }
        }
    }
}

fn auto(seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = rng_from(seed);
    let mut game = Game::new(
        Box::new(AutoPlayer::new()),
        random_board(&mut rng, false),
        Box::new(AutoPlayer::new()),
        random_board(&mut rng, false),
    );

    while let Some(event) = game.step(&mut rng) {
        if let TurnEvent::Resolved { by, target, outcome } = event {
            let label = match by {
                Side::One => "Player 1",
                Side::Two => "Player 2",
            };
            println!("{} fires at {}: {:?}", label, format_target(target), outcome);
        }
    }

    let winner = game.winner().context("game ended without a winner")?;
    println!("\nBoard of player 1:");
    print_board(game.board(Side::One));
    println!("\nBoard of player 2:");
    print_board(game.board(Side::Two));
    match winner {
        Side::One => println!("\nPlayer 1 wins."),
        Side::Two => println!("\nPlayer 2 wins."),
    }
    Ok(())
}
