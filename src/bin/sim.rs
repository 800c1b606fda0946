use battleship::init_logging;
use battleship::prelude::*;
use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};

/// Play one AI-vs-AI game and print its summary as JSON.
#[derive(Parser)]
struct Args {
    seed: u64,
    #[arg(value_enum, default_value_t = Variant::Spaced)]
    variant: Variant,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let rules = Rules::for_variant(args.variant);
    let mut rng = SmallRng::seed_from_u64(args.seed);

    let mut game = Game::with_random_fleets(rules, ["player1", "player2"], &mut rng)?;
    let mut players: [Box<dyn Player>; 2] = [Box::new(AiPlayer::new()), Box::new(AiPlayer::new())];
    game.play(&mut players, &mut rng)?;

    let summary = game.summary();
    let value = serde_json::json!({
        "seed": args.seed,
        "summary": summary,
    });
    println!("{}", serde_json::to_string(&value)?);
    Ok(())
}
