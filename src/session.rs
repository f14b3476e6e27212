//! Session state machine.
//!
//! Drives the whole puzzle: phrase entry, readiness gating, playback,
//! and the guess loop. Stages are explicit; `run` performs one
//! transition per iteration and serves any pending interrupt penalty at
//! the top of each iteration.

use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::Result;

use crate::config::PuzzleConfig;
use crate::guard::PenaltyGuard;
use crate::playback::Player;
use crate::term;

/// Typing this as a guess hard-resets the whole program.
pub const RESET_KEYWORD: &str = "playingfiddle";

/// Typing this as a guess replays the phrase.
pub const REPLAY_KEYWORD: &str = "restart";

const PHRASE_PROMPT: &str = "Enter a phrase to encode: ";
const READY_PROMPT: &str = "The phrase has been loaded. Once you are ready, press Enter.";
const GUESS_PROMPT: &str =
    "What was the encoded message? \nIf you need to listen to the Morse Code again, type Restart. \n";

/// Session stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Waiting for the operator to enter the secret phrase.
    AwaitingPhrase,
    /// Waiting for the solver to confirm readiness. Any input advances.
    AwaitingReady,
    /// Play the phrase, then move to guessing.
    Played,
    /// Waiting for a transcription guess.
    AwaitingGuess,
}

/// How the session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Correct guess; normal exit.
    Solved,
    /// Reset keyword entered; caller should terminate with a non-zero
    /// code. No audio is open at this point.
    Reset,
}

/// Session driver.
///
/// Generic over the player and both ends of the terminal so tests can
/// run it against in-memory buffers and a silent player.
pub struct Session<'a, P, R, W> {
    config: PuzzleConfig,
    player: P,
    guard: &'a PenaltyGuard,
    input: R,
    out: W,
    stage: Stage,
    phrase: String,
}

impl<'a, P, R, W> Session<'a, P, R, W>
where
    P: Player,
    R: BufRead,
    W: Write,
{
    pub fn new(config: PuzzleConfig, player: P, guard: &'a PenaltyGuard, input: R, out: W) -> Self {
        Self {
            config,
            player,
            guard,
            input,
            out,
            stage: Stage::AwaitingPhrase,
            phrase: String::new(),
        }
    }

    /// The phrase as entered by the operator. Never mutated after entry.
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Run the session to completion.
    pub fn run(&mut self) -> Result<Outcome> {
        loop {
            self.serve_penalty()?;

            tracing::debug!(stage = ?self.stage, "session step");
            match self.stage {
                Stage::AwaitingPhrase => self.enter_phrase()?,
                Stage::AwaitingReady => self.await_ready()?,
                Stage::Played => self.play_phrase()?,
                Stage::AwaitingGuess => {
                    if let Some(outcome) = self.handle_guess()? {
                        return Ok(outcome);
                    }
                }
            }
        }
    }

    /// Checkpoint: block the foreground for the cooldown if an
    /// interrupt tripped the guard since the last check.
    fn serve_penalty(&mut self) -> Result<()> {
        if self.guard.is_penalizing() {
            writeln!(
                self.out,
                "\nCtrl+C detected! Waiting {} seconds...",
                self.config.penalty.as_secs()
            )?;
            self.out.flush()?;
            self.pause(self.config.penalty);
            self.guard.rearm();
        }
        Ok(())
    }

    fn enter_phrase(&mut self) -> Result<()> {
        // Any characters accepted; unsupported ones drop out at encode time.
        self.phrase = term::read_line(&mut self.input, &mut self.out, PHRASE_PROMPT)?;
        term::clear(&mut self.out)?;
        self.pause(self.config.load_pause);
        self.stage = Stage::AwaitingReady;
        Ok(())
    }

    fn await_ready(&mut self) -> Result<()> {
        // Empty and non-empty input both advance.
        let _ = term::read_line_retry(&mut self.input, &mut self.out, READY_PROMPT)?;
        term::clear(&mut self.out)?;
        self.stage = Stage::Played;
        Ok(())
    }

    fn play_phrase(&mut self) -> Result<()> {
        // Interrupts are discarded outright for the duration of playback.
        {
            let _suspend = self.guard.suspend();
            self.player.play(&self.phrase)?;
        }
        self.stage = Stage::AwaitingGuess;
        Ok(())
    }

    fn handle_guess(&mut self) -> Result<Option<Outcome>> {
        let guess = term::read_line_retry(&mut self.input, &mut self.out, GUESS_PROMPT)?
            .to_lowercase();

        if guess == RESET_KEYWORD {
            term::clear(&mut self.out)?;
            writeln!(self.out, "Reset activated, restarting program...")?;
            return Ok(Some(Outcome::Reset));
        }

        if guess == REPLAY_KEYWORD {
            term::clear(&mut self.out)?;
            self.pause(self.config.replay_pause);
            self.stage = Stage::Played;
            return Ok(None);
        }

        // The guess is lowercased, the stored phrase is not: a phrase
        // entered with uppercase letters can never be matched.
        if guess == self.phrase {
            term::clear(&mut self.out)?;
            writeln!(self.out, "Correct! The code for this room is [CODE].")?;
            return Ok(Some(Outcome::Solved));
        }

        term::clear(&mut self.out)?;
        writeln!(self.out, "Incorrect. Please try again.")?;
        self.out.flush()?;
        self.pause(self.config.retry_pause);
        Ok(None)
    }

    fn pause(&self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}
