use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use salvo::{init_logging, AiMatch, Gameboard, STANDARD_FLEET};
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one AI-versus-AI match and print the result as JSON.
    Match {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, value_delimiter = ',', default_values_t = STANDARD_FLEET)]
        fleet: Vec<usize>,
    },
    /// Print a random fleet layout as JSON.
    Layout {
        #[arg(long, help = "Fix RNG seed for reproducible layouts")]
        seed: Option<u64>,
        #[arg(long, value_delimiter = ',', default_values_t = STANDARD_FLEET)]
        fleet: Vec<usize>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Match { seed, fleet } => {
            let mut rng = make_rng(seed);
            let mut game = AiMatch::with_random_fleets(&fleet, &mut rng)?;
            let report = game.run(&mut rng)?;
            let result = json!({
                "seed": seed,
                "fleet": fleet,
                "report": report,
            });
            println!("{}", serde_json::to_string(&result)?);
        }
        Commands::Layout { seed, fleet } => {
            let mut rng = make_rng(seed);
            let positions = Gameboard::random_ship_positions(&fleet, &mut rng)?;
            println!("{}", serde_json::to_string(&positions)?);
        }
    }
    Ok(())
}
