//! Fixtures shared by unit tests

use rcast_common::match_data::{MapInfo, Participant, Seat, TeamEvent, TeamEventKind, TeamId, Unit, UnitId};
use rcast_common::{MatchSecond, MatchTimeline};

/// 120 second match, seats 0-4 on team 0 and 5-9 on team 1
pub fn match_with_units(units: Vec<Unit>) -> MatchTimeline {
    MatchTimeline {
        duration_secs: 120,
        map: MapInfo::default(),
        participants: (0..10)
            .map(|seat| Participant {
                seat,
                id: format!("p{}", seat),
                name: format!("Player {}", seat),
                hero: "Hero".to_string(),
                team: if seat < 5 { 0 } else { 1 },
            })
            .collect(),
        units,
        team_events: Vec::new(),
        input_events: Vec::new(),
    }
}

pub fn dead_hero(id: UnitId, owner: Seat, died_at: MatchSecond, killer: Option<Seat>) -> Unit {
    let mut unit = Unit::hero(id, owner, 0);
    unit.died_at = Some(died_at);
    unit.killer = killer;
    unit
}

pub fn team_event(at: MatchSecond, team: TeamId, kind: TeamEventKind) -> TeamEvent {
    TeamEvent { at, team, kind }
}
