#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_duel::{init_logging, run_session, ConsoleSource, GameState, ScriptedSource};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Two players take turns at the same console.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible fleets (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Show the active player's own ships before each prompt")]
        reveal: bool,
    },
    /// Feed target tokens from a file, one per line, and print a JSON summary.
    Replay {
        #[arg(long)]
        moves: std::path::PathBuf,
        #[arg(long, help = "Fix RNG seed for reproducible fleets (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, reveal } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (fleets will be reproducible)", s);
            }
            let mut rng = make_rng(seed);
            let mut state =
                GameState::with_random_fleets(&mut rng).map_err(|e| anyhow::anyhow!(e))?;

            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let mut source = ConsoleSource::new(stdin.lock(), stdout.lock());
            if reveal {
                source = source.revealing(
                    state.boards(battleship_duel::PlayerId::One).ship_grid,
                    state.boards(battleship_duel::PlayerId::Two).ship_grid,
                );
            }
            let summary =
                run_session(&mut state, &mut source).map_err(|e| anyhow::anyhow!(e))?;
            if summary.winner.is_none() {
                eprintln!("Input ended before the game was decided.");
            }
        }
        Commands::Replay { moves, seed } => {
            let text = std::fs::read_to_string(&moves)?;
            let mut rng = make_rng(seed);
            let mut state =
                GameState::with_random_fleets(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
            let mut source = ScriptedSource::new(text.lines());
            let summary =
                run_session(&mut state, &mut source).map_err(|e| anyhow::anyhow!(e))?;
            println!("{}", serde_json::to_string(&summary)?);
        }
    }
    Ok(())
}
