//! Focus decision reporting types

use serde::{Deserialize, Serialize};

use crate::match_data::Seat;
use crate::time::MatchSecond;

/// Calculator family that produced a candidate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SourceTag {
    Objective,
    Camp,
    Kill,
    Death,
    Proximity,
    Taunt,
    Idle,
}

impl SourceTag {
    /// Kill and death decisions are the ones temporal smoothing spreads
    pub fn is_combat(&self) -> bool {
        matches!(self, SourceTag::Kill | SourceTag::Death)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceTag::Objective => "objective",
            SourceTag::Camp => "camp",
            SourceTag::Kill => "kill",
            SourceTag::Death => "death",
            SourceTag::Proximity => "proximity",
            SourceTag::Taunt => "taunt",
            SourceTag::Idle => "idle",
        }
    }
}

impl std::fmt::Display for SourceTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of the decision log handed to reporting/telemetry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DecisionLogEntry {
    pub second: MatchSecond,
    pub source: SourceTag,
    /// Short reason tag, e.g. `"triple_kill"` or `"near_enemy_core"`
    pub reason: String,
    pub participant: Seat,
    pub score: f64,
}

/// Running per-seat combat tally published by the auxiliary loop
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ParticipantStats {
    pub seat: Seat,
    pub kills: u32,
    pub deaths: u32,
}
