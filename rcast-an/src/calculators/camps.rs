use rcast_common::config::{CampConfig, WeightsConfig};
use rcast_common::events::SourceTag;
use rcast_common::match_data::CampKind;
use rcast_common::{MatchSecond, MatchTimeline};
use tracing::debug;

use super::{Candidate, FocusCalculator};
use crate::signals::predicates::window_start;
use crate::signals::{camp_captures, mercenary_deaths};

/// Credits a camp capture to whoever on the capturing team landed the last
/// mercenary kill of that tier in the correlation window.
pub struct CampCalculator {
    weights: WeightsConfig,
    camps: CampConfig,
}

impl CampCalculator {
    pub fn new(weights: WeightsConfig, camps: CampConfig) -> Self {
        Self { weights, camps }
    }
}

impl FocusCalculator for CampCalculator {
    fn source(&self) -> SourceTag {
        SourceTag::Camp
    }

    fn candidates(&self, second: MatchSecond, timeline: &MatchTimeline) -> Vec<Candidate> {
        let captures = camp_captures(timeline, second, second);
        if captures.is_empty() {
            return Vec::new();
        }

        let start = window_start(second, self.camps.correlation_secs);
        let deaths = mercenary_deaths(timeline, start, second);

        captures
            .into_iter()
            .filter_map(|capture| {
                let matched = deaths.iter().rev().find_map(|death| {
                    let killer = death.killer?;
                    (death.camp == capture.camp && timeline.team_of(killer) == Some(capture.team))
                        .then_some((death.unit, killer))
                });
                let Some((unit, killer)) = matched else {
                    debug!(
                        second,
                        team = capture.team,
                        camp = ?capture.camp,
                        "Camp capture without a correlated mercenary kill"
                    );
                    return None;
                };
                let (score, reason) = match capture.camp {
                    CampKind::Boss => (self.weights.boss_camp, "boss_captured"),
                    CampKind::Regular => (self.weights.regular_camp, "camp_captured"),
                };
                Some(Candidate::new(SourceTag::Camp, killer, score, reason).with_unit(unit))
            })
            .collect()
    }
}
