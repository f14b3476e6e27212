//! MorseRoom - Main entry point
//!
//! Wires the process-wide pieces together:
//! 1. Logging to stderr (prompts own stdout)
//! 2. SIGINT handler → penalty guard
//! 3. Session loop on the foreground thread

use std::io::{stdin, stdout};
use std::process;

use anyhow::{Context, Result};

use morse_room::{MorsePlayer, Outcome, PenaltyGuard, PuzzleConfig, Session};

// Process-wide so the signal handler can reach it.
static PENALTY_GUARD: PenaltyGuard = PenaltyGuard::new();

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("MorseRoom v{}", env!("CARGO_PKG_VERSION"));

    ctrlc::set_handler(|| PENALTY_GUARD.notify_interrupt())
        .context("failed to install interrupt handler")?;

    let config = PuzzleConfig::default();
    let player = MorsePlayer::new(config);
    let mut session = Session::new(config, player, &PENALTY_GUARD, stdin().lock(), stdout());

    match session.run()? {
        Outcome::Solved => Ok(()),
        Outcome::Reset => {
            // Hard exit, skipping normal shutdown. No audio is open here.
            process::exit(1);
        }
    }
}
