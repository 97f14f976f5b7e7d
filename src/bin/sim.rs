use rand::{rngs::SmallRng, SeedableRng};
use salvo::{init_logging, play_out, GameEngine, PlayerId};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut engine = GameEngine::new();
    engine.setup(&mut rng)?;
    let winner = play_out(&mut engine, &mut rng)?;

    let result = json!({
        "seed": seed,
        "winner": winner,
        "shots": {
            "player1": engine.turns_taken(PlayerId::One),
            "player2": engine.turns_taken(PlayerId::Two),
        },
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
