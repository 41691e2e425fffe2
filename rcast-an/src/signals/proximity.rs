//! Map-control proximity facts for alive heroes

use rcast_common::config::ProximityConfig;
use rcast_common::match_data::{MatchTimeline, Position, Seat, TeamId, UnitId};
use rcast_common::MatchSecond;

use super::predicates::{is_alive_in_window, is_hero, team_of_unit};

/// Alive hero with a known position at a second
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroPosition {
    pub seat: Seat,
    pub team: TeamId,
    pub unit: UnitId,
    pub position: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProximityKind {
    EnemyCore,
    OwnCore,
    EnemyHero,
    Objective,
}

impl ProximityKind {
    pub fn reason(&self) -> &'static str {
        match self {
            ProximityKind::EnemyCore => "near_enemy_core",
            ProximityKind::OwnCore => "near_own_core",
            ProximityKind::EnemyHero => "near_enemy_hero",
            ProximityKind::Objective => "near_objective",
        }
    }
}

/// One satisfied distance condition for one hero
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityFact {
    pub seat: Seat,
    pub unit: UnitId,
    pub kind: ProximityKind,
    pub distance: f64,
}

/// Heroes alive at `second` that have a position sample at or before it,
/// in seat order
pub fn hero_positions(timeline: &MatchTimeline, second: MatchSecond) -> Vec<HeroPosition> {
    let mut heroes: Vec<HeroPosition> = timeline
        .units
        .iter()
        .filter(|u| is_hero(u) && is_alive_in_window(u, second, second))
        .filter_map(|u| {
            Some(HeroPosition {
                seat: u.owner?,
                team: team_of_unit(timeline, u)?,
                unit: u.id,
                position: u.position_at(second)?,
            })
        })
        .collect();
    heroes.sort_by_key(|h| (h.seat, h.unit));
    heroes
}

/// Every distance condition met at `second`, at most one fact per
/// (hero, kind); the closest qualifying target is reported.
pub fn proximity_facts(
    timeline: &MatchTimeline,
    second: MatchSecond,
    thresholds: &ProximityConfig,
) -> Vec<ProximityFact> {
    let heroes = hero_positions(timeline, second);
    let mut facts = Vec::new();

    for hero in &heroes {
        let mut push = |kind: ProximityKind, distance: Option<f64>, limit: f64| {
            if let Some(distance) = distance.filter(|d| *d <= limit) {
                facts.push(ProximityFact {
                    seat: hero.seat,
                    unit: hero.unit,
                    kind,
                    distance,
                });
            }
        };

        let enemy_core = closest(
            timeline.map.enemy_cores_of(hero.team),
            &hero.position,
        );
        push(ProximityKind::EnemyCore, enemy_core, thresholds.enemy_core);

        let own_core = timeline
            .map
            .core_of(hero.team)
            .map(|core| core.distance_to(&hero.position));
        push(ProximityKind::OwnCore, own_core, thresholds.own_core);

        let enemy_hero = closest(
            heroes
                .iter()
                .filter(|other| other.team != hero.team)
                .map(|other| other.position),
            &hero.position,
        );
        push(ProximityKind::EnemyHero, enemy_hero, thresholds.enemy_hero);

        let objective = closest(timeline.map.objectives.iter().copied(), &hero.position);
        push(ProximityKind::Objective, objective, thresholds.objective);
    }

    facts
}

fn closest(targets: impl Iterator<Item = Position>, from: &Position) -> Option<f64> {
    targets
        .map(|p| p.distance_to(from))
        .fold(None, |best: Option<f64>, d| Some(best.map_or(d, |b| b.min(d))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rcast_common::match_data::{CoreLocation, MapInfo, Participant, PositionSample, Unit};

    fn hero_at(id: UnitId, owner: Seat, x: f64, y: f64) -> Unit {
        let mut unit = Unit::hero(id, owner, 0);
        unit.positions = vec![PositionSample { at: 0, x, y }];
        unit
    }

    fn timeline(units: Vec<Unit>) -> MatchTimeline {
        MatchTimeline {
            duration_secs: 60,
            map: MapInfo {
                name: "Test Map".to_string(),
                cores: vec![
                    CoreLocation { team: 0, position: Position::new(0.0, 0.0) },
                    CoreLocation { team: 1, position: Position::new(100.0, 0.0) },
                ],
                objectives: vec![Position::new(50.0, 50.0)],
                has_carried_objectives: false,
            },
            participants: (0..2)
                .map(|seat| Participant {
                    seat,
                    id: format!("p{}", seat),
                    name: format!("Player {}", seat),
                    hero: "Hero".to_string(),
                    team: seat as u8,
                })
                .collect(),
            units,
            team_events: Vec::new(),
            input_events: Vec::new(),
        }
    }

    #[test]
    fn test_enemy_core_and_hero_proximity() {
        let t = timeline(vec![hero_at(1, 0, 90.0, 0.0), hero_at(2, 1, 95.0, 0.0)]);
        let facts = proximity_facts(&t, 10, &ProximityConfig::default());

        let seat0: Vec<ProximityKind> = facts.iter().filter(|f| f.seat == 0).map(|f| f.kind).collect();
        assert!(seat0.contains(&ProximityKind::EnemyCore));
        assert!(seat0.contains(&ProximityKind::EnemyHero));
        assert!(!seat0.contains(&ProximityKind::OwnCore));

        let seat1: Vec<ProximityKind> = facts.iter().filter(|f| f.seat == 1).map(|f| f.kind).collect();
        assert!(seat1.contains(&ProximityKind::OwnCore));
    }

    #[test]
    fn test_dead_or_unplaced_heroes_ignored() {
        let mut dead = hero_at(1, 0, 50.0, 50.0);
        dead.died_at = Some(5);
        let unplaced = Unit::hero(2, 1, 0);

        let t = timeline(vec![dead, unplaced]);
        assert!(hero_positions(&t, 10).is_empty());
        assert!(proximity_facts(&t, 10, &ProximityConfig::default()).is_empty());
    }

    #[test]
    fn test_objective_threshold_is_inclusive() {
        let t = timeline(vec![hero_at(1, 0, 50.0, 40.0)]);
        let facts = proximity_facts(&t, 0, &ProximityConfig::default());
        assert!(facts.iter().any(|f| f.kind == ProximityKind::Objective));
    }
}
