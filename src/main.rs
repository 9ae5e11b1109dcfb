//! Ethan CLI: plays one game in the terminal and prints the final state.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use ethan::{Game, GameOptions, Outcome, RunError};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "ethan")]
#[command(about = "Roll two dice against Ethan until somebody has every chip")]
struct Args {
    /// Turn on the Ethan eyes rule: double ones lose the player everything
    #[arg(short = 'e', long = "eyes")]
    eyes: bool,

    /// Autoplay, no need to hit enter between turns
    #[arg(short = 'a', long = "auto")]
    auto_play: bool,

    /// Number of chips each player starts with, 1 to 1000
    #[arg(short = 'c', long = "chips", default_value_t = 5)]
    starting_chips: u32,

    /// Number of players other than Ethan, 1 to 50
    #[arg(short = 'p', long = "players", default_value_t = 5)]
    players: usize,

    /// Dice seed (defaults to the current time)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Enable debug logging from the engine
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn play(mut game: Game) -> Result<(Game, Outcome), RunError> {
    if game.state.auto_play {
        game.spawn().join()
    } else {
        let outcome = game.run()?;
        Ok((game, outcome))
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let options = GameOptions::default()
        .with_starting_chips(args.starting_chips)
        .with_players(args.players)
        .with_eyes_rule(args.eyes)
        .with_auto_play(args.auto_play);

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    let game = match Game::new(options, seed) {
        Ok(game) => game,
        Err(err) => {
            error!("failed to init ethan: {err}");
            return ExitCode::FAILURE;
        }
    };
    info!(seed, players = args.players, chips = args.starting_chips, "starting game");

    let (mut game, outcome) = match play(game) {
        Ok(finished) => finished,
        Err(err) => {
            error!("failed to play ethan: {err}");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(?outcome, turns = game.state.turn_count, "game over");

    if let Err(err) = game.print_final_summary() {
        error!("failed to print final ethan structure: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
