//! Interactive blackjack for up to seven players against the dealer.

use std::io;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use parlour::console::{Console, play_blackjack, seat_players};
use parlour::{Game, GameOptions};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for shuffling; defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,
    /// Number of players; asked for when omitted.
    #[arg(long)]
    players: Option<usize>,
    /// Starting chips for every player; asked for when omitted.
    #[arg(long)]
    chips: Option<usize>,
    /// Largest table allowed, from 1 to 7.
    #[arg(long, default_value_t = 7, value_parser = clap::value_parser!(u8).range(1..=7))]
    max_players: u8,
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
    log::debug!("shuffling with seed {seed}");

    let options = GameOptions::default().with_max_players(usize::from(args.max_players));
    let mut game = Game::new(options, seed);
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());

    let session = match seat_players(&mut console, &mut game, args.players, args.chips) {
        Ok(()) => play_blackjack(&mut console, &mut game),
        Err(err) => Err(err),
    };

    match session {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
