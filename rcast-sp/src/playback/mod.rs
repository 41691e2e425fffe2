//! Playback state tracking for the spectated client

mod clock;
mod state;

pub use clock::{runtime_clock, ClockView, ClockWriter, RuntimeClock};
pub use state::PlaybackClassifier;
