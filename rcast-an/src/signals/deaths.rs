//! Unit death streams: hero deaths, structure losses, mercenary kills

use rcast_common::match_data::{CampKind, MatchTimeline, Seat, UnitId, UnitKind};
use rcast_common::MatchSecond;
use tracing::debug;

use super::predicates::{died_in_window, is_camp_unit, is_hero, is_objective_unit, is_structure};

/// A hero dying in the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroDeath {
    pub second: MatchSecond,
    pub unit: UnitId,
    pub victim: Seat,
    pub killer: Option<Seat>,
}

impl HeroDeath {
    pub fn is_self_inflicted(&self) -> bool {
        self.killer == Some(self.victim)
    }

    /// Killer seat for a death that counts as a kill
    pub fn credited_killer(&self) -> Option<Seat> {
        self.killer.filter(|_| !self.is_self_inflicted())
    }
}

/// A structure, core or map objective destroyed in the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructureLoss {
    pub second: MatchSecond,
    pub unit: UnitId,
    pub kind: UnitKind,
    pub killer: Option<Seat>,
}

/// A camp or boss mercenary killed in the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MercenaryDeath {
    pub second: MatchSecond,
    pub unit: UnitId,
    pub camp: CampKind,
    pub killer: Option<Seat>,
}

/// Hero deaths in `[start, end]`, ordered by second then unit id
pub fn hero_deaths(timeline: &MatchTimeline, start: MatchSecond, end: MatchSecond) -> Vec<HeroDeath> {
    let mut deaths: Vec<HeroDeath> = timeline
        .units
        .iter()
        .filter(|u| is_hero(u) && died_in_window(u, start, end))
        .filter_map(|u| {
            let Some(victim) = u.owner else {
                debug!(unit = u.id, "Hero death without an owning participant, skipping");
                return None;
            };
            Some(HeroDeath {
                second: u.died_at?,
                unit: u.id,
                victim,
                killer: u.killer,
            })
        })
        .collect();
    deaths.sort_by_key(|d| (d.second, d.unit));
    deaths
}

/// Kills credited to `killer` in `[start, end]`
pub fn kills_by(timeline: &MatchTimeline, killer: Seat, start: MatchSecond, end: MatchSecond) -> usize {
    hero_deaths(timeline, start, end)
        .iter()
        .filter(|d| d.credited_killer() == Some(killer))
        .count()
}

/// Structures, cores and map objectives destroyed in `[start, end]`
pub fn structure_losses(
    timeline: &MatchTimeline,
    start: MatchSecond,
    end: MatchSecond,
) -> Vec<StructureLoss> {
    let mut losses: Vec<StructureLoss> = timeline
        .units
        .iter()
        .filter(|u| (is_structure(u) || is_objective_unit(u)) && died_in_window(u, start, end))
        .filter_map(|u| {
            Some(StructureLoss {
                second: u.died_at?,
                unit: u.id,
                kind: u.kind,
                killer: u.killer,
            })
        })
        .collect();
    losses.sort_by_key(|l| (l.second, l.unit));
    losses
}

/// Mercenaries of either tier killed in `[start, end]`
pub fn mercenary_deaths(
    timeline: &MatchTimeline,
    start: MatchSecond,
    end: MatchSecond,
) -> Vec<MercenaryDeath> {
    let mut deaths: Vec<MercenaryDeath> = timeline
        .units
        .iter()
        .filter(|u| died_in_window(u, start, end))
        .filter_map(|u| {
            let camp = if is_camp_unit(u, CampKind::Boss) {
                CampKind::Boss
            } else if is_camp_unit(u, CampKind::Regular) {
                CampKind::Regular
            } else {
                return None;
            };
            Some(MercenaryDeath {
                second: u.died_at?,
                unit: u.id,
                camp,
                killer: u.killer,
            })
        })
        .collect();
    deaths.sort_by_key(|d| (d.second, d.unit));
    deaths
}
