//! Statistics overlay decisions
//!
//! [`PanelTimeline`] marks the seconds where a match event forces an
//! overlay; [`PanelScheduler`] decides what is actually on screen.

mod scheduler;

pub use scheduler::PanelScheduler;

use std::collections::BTreeMap;

use rcast_common::events::PanelKind;
use rcast_common::{MatchSecond, MatchTimeline};
use serde::Serialize;

use crate::signals::{hero_deaths, talent_picks};

/// Sparse second → forced panel table
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PanelTimeline {
    forced: BTreeMap<MatchSecond, PanelKind>,
}

impl PanelTimeline {
    /// Talent picks force `Talents`, credited kills force
    /// `KillsDeathsAssists`; talents win a shared second.
    pub fn build(timeline: &MatchTimeline) -> Self {
        let mut forced = BTreeMap::new();
        let end = timeline.duration_secs.saturating_sub(1);

        for death in hero_deaths(timeline, 0, end) {
            if death.credited_killer().is_some() {
                forced.insert(death.second, PanelKind::KillsDeathsAssists);
            }
        }
        for pick in talent_picks(timeline, 0, end) {
            forced.insert(pick.second, PanelKind::Talents);
        }

        Self { forced }
    }

    pub fn forced_at(&self, second: MatchSecond) -> Option<PanelKind> {
        self.forced.get(&second).copied()
    }

    /// Forced panel to act on for seconds in `(after, through]`
    ///
    /// A high priority panel in the range wins over later low priority
    /// ones; otherwise the latest entry wins.
    pub fn forced_between(&self, after: Option<MatchSecond>, through: MatchSecond) -> Option<(MatchSecond, PanelKind)> {
        let start = match after {
            Some(after) if after >= through => return None,
            Some(after) => after + 1,
            None => 0,
        };
        self.forced
            .range(start..=through)
            .map(|(second, panel)| (*second, *panel))
            .max_by_key(|(second, panel)| (panel.is_high_priority(), *second))
    }

    pub fn len(&self) -> usize {
        self.forced.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forced.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (MatchSecond, PanelKind)> + '_ {
        self.forced.iter().map(|(s, p)| (*s, *p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{dead_hero, match_with_units, team_event};
    use rcast_common::match_data::TeamEventKind;

    #[test]
    fn test_build_marks_kills_and_talents() {
        let mut timeline = match_with_units(vec![
            dead_hero(1, 2, 40, Some(5)),
            dead_hero(2, 3, 50, Some(6)),
            dead_hero(3, 4, 60, None),
        ]);
        timeline.team_events = vec![team_event(50, 0, TeamEventKind::TalentTierReached { tier: 2 })];

        let panels = PanelTimeline::build(&timeline);
        assert_eq!(panels.forced_at(40), Some(PanelKind::KillsDeathsAssists));
        assert_eq!(panels.forced_at(50), Some(PanelKind::Talents));
        assert_eq!(panels.forced_at(60), None);
        assert_eq!(panels.len(), 2);
    }

    #[test]
    fn test_forced_between_prefers_talents() {
        let mut timeline = match_with_units(vec![dead_hero(1, 2, 12, Some(5))]);
        timeline.team_events = vec![team_event(10, 0, TeamEventKind::TalentTierReached { tier: 1 })];
        let panels = PanelTimeline::build(&timeline);

        assert_eq!(panels.forced_between(Some(9), 12), Some((10, PanelKind::Talents)));
        assert_eq!(panels.forced_between(Some(10), 12), Some((12, PanelKind::KillsDeathsAssists)));
        assert_eq!(panels.forced_between(Some(12), 20), None);
        assert_eq!(panels.forced_between(None, 10), Some((10, PanelKind::Talents)));
        assert_eq!(panels.forced_between(Some(12), 12), None);
    }
}
