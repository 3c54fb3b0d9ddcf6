//! Console twenty-one against the dealer.

use std::io;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{Level, error, info};
use twentyone::{Console, Game, GameOptions};

fn main() -> ExitCode {
    // Game text owns stdout; logs go to stderr and stay quiet unless
    // something goes wrong.
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(io::stderr)
        .init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default();
    info!(seed, "starting");

    let mut console = Console::new(io::stdin().lock(), io::stdout()).with_pacing(options.pacing);
    let mut game = Game::new(options, seed);

    match game.run(&mut console) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, rounds = game.rounds_played(), "game aborted");
            ExitCode::FAILURE
        }
    }
}
