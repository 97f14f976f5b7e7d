use std::io;

use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use salvo::{cli::run_hotseat, init_logging, play_out, ui::render_board, GameEngine, PlayerId};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Two players take turns at the same terminal.
    Hotseat {
        #[arg(long, help = "Fix RNG seed for reproducible fleets (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Both sides fire at random until one fleet is sunk.
    Auto {
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

fn print_final_boards(engine: &GameEngine) {
    for player in [PlayerId::One, PlayerId::Two] {
        println!("\n{}'s fleet:", player);
        print!("{}", render_board(engine.board(player), true));
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Hotseat { seed } => {
            let mut rng = make_rng(seed);
            let mut engine = GameEngine::new();
            engine.setup(&mut rng)?;
            let stdin = io::stdin();
            run_hotseat(&mut engine, stdin.lock(), io::stdout())?;
            print_final_boards(&engine);
        }
        Commands::Auto { seed } => {
            let mut rng = make_rng(seed);
            let mut engine = GameEngine::new();
            engine.setup(&mut rng)?;
            let winner = play_out(&mut engine, &mut rng)?;
            println!(
                "{} wins after {} shots. All {}'s ships are sunk.",
                winner,
                engine.turns_taken(winner),
                winner.opponent()
            );
            print_final_boards(&engine);
        }
    }
    Ok(())
}
