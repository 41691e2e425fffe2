use rcast_common::config::{TauntConfig, WeightsConfig};
use rcast_common::events::SourceTag;
use rcast_common::{MatchSecond, MatchTimeline};

use super::{Candidate, FocusCalculator};
use crate::signals::taunts;

/// Flavor-only score for repeated commands and configured abilities
pub struct TauntCalculator {
    weights: WeightsConfig,
    taunts: TauntConfig,
}

impl TauntCalculator {
    pub fn new(weights: WeightsConfig, taunts: TauntConfig) -> Self {
        Self { weights, taunts }
    }
}

impl FocusCalculator for TauntCalculator {
    fn source(&self) -> SourceTag {
        SourceTag::Taunt
    }

    fn candidates(&self, second: MatchSecond, timeline: &MatchTimeline) -> Vec<Candidate> {
        taunts(timeline, second, second, &self.taunts)
            .iter()
            .map(|taunt| Candidate::new(SourceTag::Taunt, taunt.participant, self.weights.taunt, taunt.reason()))
            .collect()
    }
}
