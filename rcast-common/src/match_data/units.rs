//! Units: every trackable entity with a lifespan

use serde::{Deserialize, Serialize};

use super::{Position, Seat, TeamId};
use crate::time::MatchSecond;

/// Unit identifier, unique within a match
pub type UnitId = u32;

/// Classification of a unit, as decided by the replay parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    /// A participant's hero
    Hero,
    /// Towers, forts, keeps, gates
    Structure,
    /// A team's core (losing it ends the match)
    Core,
    /// Regular mercenary camp creature
    CampMercenary,
    /// Boss camp creature
    BossMercenary,
    /// Map objective entity (shrines, altars, payloads, ...)
    MapObjective,
    Minion,
    Other,
}

/// Sampled unit position at a given second
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionSample {
    pub at: MatchSecond,
    pub x: f64,
    pub y: f64,
}

impl PositionSample {
    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// A unit with its lifespan and attribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    #[serde(default)]
    pub name: String,
    pub kind: UnitKind,
    /// Owning team, when the unit belongs to one
    #[serde(default)]
    pub team: Option<TeamId>,
    /// Controlling participant (heroes)
    #[serde(default)]
    pub owner: Option<Seat>,
    pub born_at: MatchSecond,
    #[serde(default)]
    pub died_at: Option<MatchSecond>,
    /// Participant credited with the kill, when the replay recorded one
    #[serde(default)]
    pub killer: Option<Seat>,
    /// Position trail, sorted by `at` ascending
    #[serde(default)]
    pub positions: Vec<PositionSample>,
}

impl Unit {
    /// Hero unit owned by `owner`, alive from `born_at`
    pub fn hero(id: UnitId, owner: Seat, born_at: MatchSecond) -> Self {
        Self {
            id,
            name: String::new(),
            kind: UnitKind::Hero,
            team: None,
            owner: Some(owner),
            born_at,
            died_at: None,
            killer: None,
            positions: Vec::new(),
        }
    }

    /// Non-hero unit of `kind` belonging to `team`
    pub fn of_kind(id: UnitId, kind: UnitKind, team: Option<TeamId>, born_at: MatchSecond) -> Self {
        Self {
            id,
            name: String::new(),
            kind,
            team,
            owner: None,
            born_at,
            died_at: None,
            killer: None,
            positions: Vec::new(),
        }
    }

    /// Last sampled position at or before `second`
    ///
    /// Samples are expected sorted; unsorted trails still return the latest
    /// qualifying sample, just without the early exit.
    pub fn position_at(&self, second: MatchSecond) -> Option<Position> {
        self.positions
            .iter()
            .filter(|s| s.at <= second)
            .max_by_key(|s| s.at)
            .map(|s| s.position())
    }

    /// True when the killer is the unit's own controller
    pub fn is_self_inflicted(&self) -> bool {
        matches!((self.owner, self.killer), (Some(owner), Some(killer)) if owner == killer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_at_picks_latest_sample_not_after_second() {
        let mut unit = Unit::hero(1, 0, 0);
        unit.positions = vec![
            PositionSample { at: 0, x: 1.0, y: 1.0 },
            PositionSample { at: 10, x: 5.0, y: 5.0 },
            PositionSample { at: 20, x: 9.0, y: 9.0 },
        ];
        assert_eq!(unit.position_at(15), Some(Position::new(5.0, 5.0)));
        assert_eq!(unit.position_at(20), Some(Position::new(9.0, 9.0)));
    }

    #[test]
    fn test_position_before_first_sample_is_unknown() {
        let mut unit = Unit::hero(1, 0, 5);
        unit.positions = vec![PositionSample { at: 5, x: 0.0, y: 0.0 }];
        assert_eq!(unit.position_at(4), None);
    }

    #[test]
    fn test_self_inflicted() {
        let mut unit = Unit::hero(1, 3, 0);
        unit.killer = Some(3);
        assert!(unit.is_self_inflicted());
        unit.killer = Some(4);
        assert!(!unit.is_self_inflicted());
        unit.killer = None;
        assert!(!unit.is_self_inflicted());
    }

    #[test]
    fn test_unit_kind_serde_names() {
        let kind: UnitKind = serde_json::from_str("\"boss_mercenary\"").unwrap();
        assert_eq!(kind, UnitKind::BossMercenary);
    }
}
