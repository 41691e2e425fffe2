//! # Replay Cast Common Library
//!
//! Shared code for the replay-cast crates including:
//! - Match data model (participants, units, team and input events)
//! - Director configuration loading and validation
//! - Event types broadcast by the spectator runtime
//! - Match-clock helpers

pub mod config;
pub mod error;
pub mod events;
pub mod match_data;
pub mod time;

pub use config::DirectorConfig;
pub use error::{Error, Result};
pub use match_data::MatchTimeline;
pub use time::MatchSecond;
