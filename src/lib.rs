//! # MorseRoom
//!
//! Escape-room Morse code listening puzzle.
//!
//! ## Architecture
//!
//! Data flows one way: phrase text → Morse pattern → timed tone/silence
//! segments → audio sink. Each layer is pure except the sink:
//! - [`morse`]: character table and text encoder
//! - [`audio`]: sine/silence synthesis, RAII output sink
//! - [`playback`]: pattern → segment schedule, rendering engine
//! - [`guard`]: Armed/Penalizing interrupt penalty state machine
//! - [`session`]: explicit four-stage puzzle loop
//!
//! The only asynchronous entity is the SIGINT handler, which forwards
//! into [`guard::PenaltyGuard`]; the session serves penalties at its
//! own checkpoints.

pub mod audio;
pub mod config;
pub mod guard;
pub mod morse;
pub mod playback;
pub mod session;
pub mod term;

pub use config::PuzzleConfig;
pub use guard::{GuardState, PenaltyGuard};
pub use playback::{MorsePlayer, Player, Segment};
pub use session::{Outcome, Session, Stage};
