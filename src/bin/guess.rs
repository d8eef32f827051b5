//! Guess the secret number, with optional higher/lower hints.

use std::io;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use parlour::GuessingGame;
use parlour::console::{Console, ConsoleError, play_guessing};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Lowest possible secret.
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    start: i64,
    /// Highest possible secret.
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    end: i64,
    /// Only say whether a guess is right, not which way to go.
    #[arg(long)]
    no_hints: bool,
    /// Seed for the secret; defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut game = match GuessingGame::new(args.start, args.end, !args.no_hints, &mut rng) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    match play_guessing(&mut console, &mut game) {
        Ok(_) | Err(ConsoleError::Closed) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
