//! Shared classification predicates
//!
//! Every extractor and calculator asks these questions the same way; none of
//! them keeps a private copy.

use rcast_common::match_data::{CampKind, MatchTimeline, TeamId, Unit, UnitKind};
use rcast_common::MatchSecond;

pub fn is_hero(unit: &Unit) -> bool {
    unit.kind == UnitKind::Hero
}

/// Buildings whose loss is scored as a structure
pub fn is_structure(unit: &Unit) -> bool {
    unit.kind == UnitKind::Structure
}

/// Cores and map objectives, scored at the objective tier
pub fn is_objective_unit(unit: &Unit) -> bool {
    matches!(unit.kind, UnitKind::Core | UnitKind::MapObjective)
}

/// Mercenary camp unit of the given tier
pub fn is_camp_unit(unit: &Unit, camp: CampKind) -> bool {
    match camp {
        CampKind::Regular => unit.kind == UnitKind::CampMercenary,
        CampKind::Boss => unit.kind == UnitKind::BossMercenary,
    }
}

/// Alive for the whole of `[start, end]`: born at or before `start` and
/// either never dies or dies after `end`.
pub fn is_alive_in_window(unit: &Unit, start: MatchSecond, end: MatchSecond) -> bool {
    unit.born_at <= start && unit.died_at.map_or(true, |died| died > end)
}

/// Died somewhere in `[start, end]`
pub fn died_in_window(unit: &Unit, start: MatchSecond, end: MatchSecond) -> bool {
    unit.died_at.is_some_and(|died| died >= start && died <= end)
}

/// Team a unit fights for; heroes inherit their owner's team
pub fn team_of_unit(timeline: &MatchTimeline, unit: &Unit) -> Option<TeamId> {
    unit.team
        .or_else(|| unit.owner.and_then(|seat| timeline.team_of(seat)))
}

/// Start of a trailing window of `length` seconds ending at `end`
pub fn window_start(end: MatchSecond, length: u32) -> MatchSecond {
    end.saturating_sub(length)
}
