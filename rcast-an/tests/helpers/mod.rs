//! Test Helper Utilities
//!
//! Match builders shared by the rcast-an integration tests

#![allow(dead_code)]

use rcast_common::match_data::{
    CampKind, CoreLocation, InputEvent, InputKind, MapInfo, Participant, Position, PositionSample,
    Seat, TeamEvent, TeamEventKind, TeamId, Unit, UnitId, UnitKind,
};
use rcast_common::{MatchSecond, MatchTimeline};

/// Fluent builder for small synthetic matches.
///
/// Seats `0..per_team` are team 0, the rest team 1. Every seat gets a hero
/// unit (id = seat + 1) alive for the whole match unless killed.
pub struct MatchBuilder {
    timeline: MatchTimeline,
    next_unit: UnitId,
}

impl MatchBuilder {
    pub fn new(duration_secs: MatchSecond, seats: usize) -> Self {
        let per_team = (seats + 1) / 2;
        let participants: Vec<Participant> = (0..seats)
            .map(|seat| Participant {
                seat,
                id: format!("player-{}", seat),
                name: format!("Player {}", seat),
                hero: format!("Hero {}", seat),
                team: if seat < per_team { 0 } else { 1 },
            })
            .collect();
        let units = (0..seats)
            .map(|seat| Unit::hero(seat as UnitId + 1, seat, 0))
            .collect();

        Self {
            timeline: MatchTimeline {
                duration_secs,
                map: MapInfo {
                    name: "Test Map".to_string(),
                    cores: vec![
                        CoreLocation { team: 0, position: Position::new(0.0, 0.0) },
                        CoreLocation { team: 1, position: Position::new(200.0, 0.0) },
                    ],
                    objectives: vec![Position::new(100.0, 100.0)],
                    has_carried_objectives: false,
                },
                participants,
                units,
                team_events: Vec::new(),
                input_events: Vec::new(),
            },
            next_unit: 1000,
        }
    }

    /// Hero unit id for a seat
    pub fn hero_of(seat: Seat) -> UnitId {
        seat as UnitId + 1
    }

    /// Kill `victim`'s hero at `at`
    pub fn death(mut self, victim: Seat, at: MatchSecond, killer: Option<Seat>) -> Self {
        let id = Self::hero_of(victim);
        if let Some(unit) = self.timeline.units.iter_mut().find(|u| u.id == id) {
            unit.died_at = Some(at);
            unit.killer = killer;
        }
        self
    }

    pub fn unit(mut self, kind: UnitKind, team: Option<TeamId>, died_at: Option<MatchSecond>, killer: Option<Seat>) -> Self {
        let mut unit = Unit::of_kind(self.next_unit, kind, team, 0);
        unit.died_at = died_at;
        unit.killer = killer;
        self.next_unit += 1;
        self.timeline.units.push(unit);
        self
    }

    pub fn position(mut self, seat: Seat, at: MatchSecond, x: f64, y: f64) -> Self {
        let id = Self::hero_of(seat);
        if let Some(unit) = self.timeline.units.iter_mut().find(|u| u.id == id) {
            unit.positions.push(PositionSample { at, x, y });
        }
        self
    }

    pub fn team_event(mut self, at: MatchSecond, team: TeamId, kind: TeamEventKind) -> Self {
        self.timeline.team_events.push(TeamEvent { at, team, kind });
        self
    }

    pub fn camp_capture(self, at: MatchSecond, team: TeamId, camp: CampKind) -> Self {
        self.team_event(at, team, TeamEventKind::CampCaptured { camp })
    }

    pub fn command(mut self, at: MatchSecond, participant: Seat, command: &str, times: usize) -> Self {
        for _ in 0..times {
            self.timeline.input_events.push(InputEvent {
                at,
                participant,
                kind: InputKind::Command { command: command.to_string() },
            });
        }
        self
    }

    pub fn carried_objectives(mut self) -> Self {
        self.timeline.map.has_carried_objectives = true;
        self
    }

    pub fn build(self) -> MatchTimeline {
        self.timeline
    }
}

/// A busier match exercising every calculator family
pub fn eventful_match() -> MatchTimeline {
    MatchBuilder::new(300, 10)
        .death(2, 40, Some(5))
        .death(3, 44, Some(5))
        .death(7, 44, Some(1))
        .death(8, 90, None)
        .death(4, 120, Some(4))
        .unit(UnitKind::Structure, Some(1), Some(150), Some(0))
        .unit(UnitKind::BossMercenary, None, Some(195), Some(6))
        .camp_capture(200, 1, CampKind::Boss)
        .camp_capture(230, 0, CampKind::Regular)
        .team_event(60, 0, TeamEventKind::TalentTierReached { tier: 1 })
        .team_event(61, 1, TeamEventKind::TalentTierReached { tier: 1 })
        .team_event(250, 0, TeamEventKind::ObjectiveTracked { participant: 1, value: 3 })
        .position(0, 0, 190.0, 0.0)
        .position(5, 0, 195.0, 0.0)
        .command(170, 9, "dance", 5)
        .build()
}
