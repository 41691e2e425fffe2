//! # Replay Cast Spectator
//!
//! Runtime that plays an analyzed match into a live spectator client:
//! - Polls the on-screen match clock and classifies playback state
//! - Drives focus and panel commands from the precomputed timelines
//! - Publishes decisions and live stats on the event bus
//! - Runs a queue of matches, surviving failures of any single one

pub mod director;
pub mod error;
pub mod io;
pub mod loops;
pub mod playback;
pub mod retry;
pub mod session;

pub use director::{Director, MatchReport};
pub use error::{Error, Result};
pub use session::SpectatorSession;
