use rcast_common::config::WeightsConfig;
use rcast_common::events::SourceTag;
use rcast_common::match_data::UnitKind;
use rcast_common::{MatchSecond, MatchTimeline};
use tracing::debug;

use super::{Candidate, FocusCalculator};
use crate::signals::{objective_events, structure_losses};

/// Structure, core and objective losses plus objective capture/tracker events
pub struct ObjectiveCalculator {
    weights: WeightsConfig,
}

impl ObjectiveCalculator {
    pub fn new(weights: WeightsConfig) -> Self {
        Self { weights }
    }
}

impl FocusCalculator for ObjectiveCalculator {
    fn source(&self) -> SourceTag {
        SourceTag::Objective
    }

    fn candidates(&self, second: MatchSecond, timeline: &MatchTimeline) -> Vec<Candidate> {
        let mut found = Vec::new();

        for loss in structure_losses(timeline, second, second) {
            let Some(killer) = loss.killer else {
                debug!(unit = loss.unit, second, "Structure lost without a credited participant");
                continue;
            };
            let (score, reason) = match loss.kind {
                UnitKind::Structure => (self.weights.structure, "structure_destroyed"),
                _ => (self.weights.objective, "objective_destroyed"),
            };
            found.push(Candidate::new(SourceTag::Objective, killer, score, reason).with_unit(loss.unit));
        }

        for event in objective_events(timeline, second, second) {
            let reason = if event.tracked {
                "objective_tracked"
            } else {
                "objective_captured"
            };
            found.push(Candidate::new(
                SourceTag::Objective,
                event.participant,
                self.weights.objective,
                reason,
            ));
        }

        found
    }
}
