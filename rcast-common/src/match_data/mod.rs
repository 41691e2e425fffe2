//! Match data model
//!
//! Immutable, already-parsed facts about one recorded match. The replay
//! parser that produces this lives outside this workspace; here the model is
//! loaded from its JSON export and then only ever read.
//!
//! All timestamps are whole elapsed match seconds ([`MatchSecond`]).

mod events;
mod units;

pub use events::{CampKind, InputEvent, InputKind, TeamEvent, TeamEventKind};
pub use units::{PositionSample, Unit, UnitId, UnitKind};

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::time::MatchSecond;
use crate::{Error, Result};

/// Team identifier (two teams per match, but nothing here assumes it)
pub type TeamId = u8;

/// Participant seat index, stable `0..N` for the whole match
pub type Seat = usize;

/// One player seat in the match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    /// Stable seat index used by focus commands
    pub seat: Seat,
    /// Unique participant identifier from the replay (toon handle or similar)
    pub id: String,
    pub name: String,
    /// Hero played in this match
    pub hero: String,
    pub team: TeamId,
}

/// 2D map coordinate
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Position) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// A team's core building location
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoreLocation {
    pub team: TeamId,
    pub position: Position,
}

/// Static map facts needed by proximity scoring and panel preconditions
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MapInfo {
    pub name: String,
    #[serde(default)]
    pub cores: Vec<CoreLocation>,
    /// Contested map objective locations
    #[serde(default)]
    pub objectives: Vec<Position>,
    /// Whether players carry objectives on this map (coins, gems, skulls...)
    #[serde(default)]
    pub has_carried_objectives: bool,
}

impl MapInfo {
    /// Core position for a team, if the map defines one
    pub fn core_of(&self, team: TeamId) -> Option<Position> {
        self.cores.iter().find(|c| c.team == team).map(|c| c.position)
    }

    /// Core positions of every team other than `team`
    pub fn enemy_cores_of(&self, team: TeamId) -> impl Iterator<Item = Position> + '_ {
        self.cores
            .iter()
            .filter(move |c| c.team != team)
            .map(|c| c.position)
    }
}

/// Complete pre-extracted timeline of one match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchTimeline {
    /// Match length in whole seconds; the analysis domain is `[0, duration_secs)`
    pub duration_secs: MatchSecond,
    pub map: MapInfo,
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub units: Vec<Unit>,
    #[serde(default)]
    pub team_events: Vec<TeamEvent>,
    #[serde(default)]
    pub input_events: Vec<InputEvent>,
}

impl MatchTimeline {
    /// Decode and validate a match exported as JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        let timeline: MatchTimeline = serde_json::from_str(json)?;
        timeline.validate()?;
        Ok(timeline)
    }

    /// Load a match JSON export from disk
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let timeline = Self::from_json_str(&contents)?;
        tracing::debug!(
            path = %path.display(),
            duration_secs = timeline.duration_secs,
            participants = timeline.participants.len(),
            units = timeline.units.len(),
            "Loaded match timeline"
        );
        Ok(timeline)
    }

    /// Check structural rules every consumer relies on.
    ///
    /// Seats must be exactly `0..N` (they index focus commands) and every seat
    /// referenced by a unit or event must exist. Facts that are merely
    /// incomplete (a death without a killer, a unit without positions) are
    /// valid; consumers skip them.
    pub fn validate(&self) -> Result<()> {
        if self.participants.is_empty() {
            return Err(Error::InvalidInput("match has no participants".to_string()));
        }

        let mut seats: Vec<Seat> = self.participants.iter().map(|p| p.seat).collect();
        seats.sort_unstable();
        for (expected, seat) in seats.iter().enumerate() {
            if *seat != expected {
                return Err(Error::InvalidInput(format!(
                    "participant seats must be 0..{} without gaps or duplicates (found seat {})",
                    self.participants.len(),
                    seat
                )));
            }
        }

        let mut unit_ids = HashSet::new();
        for unit in &self.units {
            if !unit_ids.insert(unit.id) {
                return Err(Error::InvalidInput(format!("duplicate unit id {}", unit.id)));
            }
            for seat in [unit.owner, unit.killer].into_iter().flatten() {
                self.check_seat(seat, &format!("unit {}", unit.id))?;
            }
            if let Some(died_at) = unit.died_at {
                if died_at < unit.born_at {
                    return Err(Error::InvalidInput(format!(
                        "unit {} dies at {} before it is born at {}",
                        unit.id, died_at, unit.born_at
                    )));
                }
            }
        }

        for event in &self.team_events {
            if let Some(seat) = event.kind.participant() {
                self.check_seat(seat, "team event")?;
            }
        }
        for event in &self.input_events {
            self.check_seat(event.participant, "input event")?;
        }

        Ok(())
    }

    fn check_seat(&self, seat: Seat, context: &str) -> Result<()> {
        if seat >= self.participants.len() {
            return Err(Error::InvalidInput(format!(
                "{} references unknown seat {}",
                context, seat
            )));
        }
        Ok(())
    }

    /// Number of participant seats
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Participant by seat
    pub fn participant(&self, seat: Seat) -> Option<&Participant> {
        self.participants.iter().find(|p| p.seat == seat)
    }

    /// Team of a seat
    pub fn team_of(&self, seat: Seat) -> Option<TeamId> {
        self.participant(seat).map(|p| p.team)
    }

    /// Unit by id
    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == id)
    }
}
