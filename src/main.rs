use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    coord_to_string, init_logging, AiPlayer, CliPlayer, Match, MatchConfig, Side, TurnRecord,
    DEFAULT_GRID_SIZE,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer.
    Play {
        #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
        size: usize,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Show the computer's fleet")]
        reveal: bool,
    },
    /// Watch two computer players fight it out.
    Auto {
        #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
        size: usize,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn greet(size: usize) {
    println!("Welcome to Sea Battle!\n");
    println!("Enter shot coordinates as X and Y separated by a space.");
    println!("X is the column number, Y is the row number (1 to {}).\n", size);
    println!("O open water  ■ your vessel  X hit  T miss  . next to a destroyed vessel\n");
}

fn print_boards(game: &Match, user_label: &str, opponent_label: &str) {
    println!("{}", "-".repeat(20));
    println!("{}:\n{}", user_label, game.user_grid());
    println!("{}", "-".repeat(20));
    println!("{}:\n{}", opponent_label, game.opponent_grid());
    println!("{}", "-".repeat(20));
}

fn side_label(side: Side) -> &'static str {
    match side {
        Side::User => "Player",
        Side::Opponent => "Computer",
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { size, seed, reveal } => {
            let config = MatchConfig::new(size)
                .context("invalid grid size")?
                .with_revealed_opponent(reveal);
            let rng = make_rng(seed);
            greet(size);
            let mut game = Match::new(
                &config,
                Box::new(CliPlayer::new()),
                Box::new(AiPlayer::new()),
                rng,
            );
            while let Some(side) = game.state().to_move() {
                print_boards(&game, "Your board", "Computer board");
                match side {
                    Side::User => println!("Your move"),
                    Side::Opponent => println!("Computer's move"),
                }
                game.step()?;
            }
            print_boards(&game, "Your board", "Computer board");
            match game.state().winner() {
                Some(Side::User) => println!("You won! All enemy vessels are destroyed."),
                Some(Side::Opponent) => println!("The computer won. Your fleet is gone."),
                None => {}
            }
        }
        Commands::Auto { size, seed } => {
            let config = MatchConfig::new(size)
                .context("invalid grid size")?
                .with_revealed_opponent(true);
            let rng = make_rng(seed);
            let mut game = Match::new(
                &config,
                Box::new(AiPlayer::new()),
                Box::new(AiPlayer::new()),
                rng,
            );
            print_boards(&game, "Player board", "Computer board");
            while !game.state().is_terminal() {
                let TurnRecord { side, shot, .. } = game.step()?;
                println!(
                    "{} fires at {} -> {:?} ({} rejected)",
                    side_label(side),
                    coord_to_string(shot.target),
                    shot.result,
                    shot.rejected
                );
            }
            print_boards(&game, "Player board", "Computer board");
            let summary = game.summary();
            if let Some(winner) = summary.winner {
                println!(
                    "{} won after {} turns ({} vs {} vessels destroyed)",
                    side_label(winner),
                    summary.turns,
                    summary.user_destroyed,
                    summary.opponent_destroyed
                );
            }
        }
    }
    Ok(())
}
