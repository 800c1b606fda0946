use std::io::{self, Write};

use battleship::{
    init_logging, ui, AiPlayer, CliPlayer, Game, GameError, Player, Rules, ShotOutcome, Variant,
};
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer on this console.
    Play {
        #[arg(long, value_enum, default_value_t = Variant::Spaced)]
        variant: Variant,
        #[arg(long, default_value = "Player1")]
        name: String,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch two computer players fight it out.
    Watch {
        #[arg(long, value_enum, default_value_t = Variant::Spaced)]
        variant: Variant,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            variant,
            name,
            seed,
        } => play(Rules::for_variant(variant), &name, seed),
        Commands::Watch { variant, seed } => watch(Rules::for_variant(variant), seed),
    }
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

/// Print `prompt` and read one line. `None` means stdin is closed.
fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn print_intro(rules: &Rules) {
    let g = &rules.glyphs;
    let how = match rules.variant {
        Variant::Classic => "Enter the row, then the column, each 0-5.",
        Variant::Spaced => "Enter 2 numbers on one line: row, space, column (0-5 each).",
    };
    println!("\nWelcome to Battleship ({:?} rules).", rules.variant);
    println!("{}", how);
    println!("  miss = \"{}\"", g.miss);
    println!("  ship afloat = \"{}\"", g.ship);
    println!("  damaged ship = \"{}\"", g.hit);
    println!("  sunk ship = \"{}\"", g.destroyed);
    println!("A hit earns another shot. Sink all ships! Good luck!\n");
}

fn print_final(game: &Game, winner: usize) {
    let glyphs = &game.rules().glyphs;
    let winner_side = game.participant(winner);
    let loser_side = game.participant(1 - winner);
    println!("All ships are sunk! {} wins!", winner_side.name());
    println!(
        "Winner - final position:\n{}",
        ui::render_board(winner_side.board(), glyphs, true)
    );
    println!(
        "Loser - final position:\n{}",
        ui::render_board(loser_side.board(), glyphs, true)
    );
}

fn play(rules: Rules, name: &str, seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);
    print_intro(&rules);
    loop {
        let mut game = match Game::with_random_fleets(rules, [name, "AI"], &mut rng) {
            Ok(game) => game,
            Err(e) => {
                println!("{}", e);
                println!("Instructions: Restart the game.");
                if read_line("Press Enter to restart...")?.is_none() {
                    return Ok(());
                }
                continue;
            }
        };

        // The console player holds the stdin lock; it must be dropped before
        // the play-again prompt reads stdin directly.
        let result = {
            let mut players: [Box<dyn Player>; 2] = [
                Box::new(CliPlayer::stdio(name, rules.input)),
                Box::new(AiPlayer::new()),
            ];
            game.play(&mut players, &mut rng)
        };
        match result {
            Ok(winner) => print_final(&game, winner),
            Err(GameError::InputClosed) => {
                println!("\nInput closed, leaving the game.");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }

        let again = read_line("Do you want to play again? (y/n): ")?;
        if !matches!(again.as_deref().map(str::trim), Some("y") | Some("Y")) {
            println!("Thanks for playing!");
            return Ok(());
        }
    }
}

fn watch(rules: Rules, seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);
    let mut game = Game::with_random_fleets(rules, ["AI-1", "AI-2"], &mut rng)?;
    let mut players: [Box<dyn Player>; 2] = [Box::new(AiPlayer::new()), Box::new(AiPlayer::new())];

    while !game.is_over() {
        let report = game.play_turn(&mut players, &mut rng)?;
        let shooter = game.participant(report.shooter).name();
        let (row, col) = report.target;
        match report.outcome {
            ShotOutcome::Kill(ship) => {
                println!("{} fires at ({}, {}): sunk {}", shooter, row, col, ship)
            }
            other => println!("{} fires at ({}, {}): {:?}", shooter, row, col, other),
        }
    }
    if let Some(winner) = game.winner() {
        print_final(&game, winner);
    }
    Ok(())
}
