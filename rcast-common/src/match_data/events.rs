//! Timestamped team-level and input-style events

use serde::{Deserialize, Serialize};

use super::{Seat, TeamId};
use crate::time::MatchSecond;

/// Mercenary camp tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampKind {
    Regular,
    Boss,
}

/// Team-level tracked event payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TeamEventKind {
    /// Map objective captured, optionally credited to one participant
    ObjectiveCaptured {
        #[serde(default)]
        participant: Option<Seat>,
    },
    /// Objective tracker fired for a participant (turn-in, channel, ...)
    ObjectiveTracked { participant: Seat, value: u32 },
    /// Team reached a talent tier
    TalentTierReached { tier: u8 },
    /// Mercenary camp captured by the team
    CampCaptured { camp: CampKind },
}

impl TeamEventKind {
    /// Participant explicitly named by the event, if any
    pub fn participant(&self) -> Option<Seat> {
        match self {
            TeamEventKind::ObjectiveCaptured { participant } => *participant,
            TeamEventKind::ObjectiveTracked { participant, .. } => Some(*participant),
            TeamEventKind::TalentTierReached { .. } | TeamEventKind::CampCaptured { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamEvent {
    pub at: MatchSecond,
    pub team: TeamId,
    pub kind: TeamEventKind,
}

/// Input-style event payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputKind {
    Ping,
    AbilityCast { ability: String },
    /// Raw command issued by the player (emote, dance, taunt, move...)
    Command { command: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputEvent {
    pub at: MatchSecond,
    pub participant: Seat,
    pub kind: InputKind,
}
