use rcast_common::config::WeightsConfig;
use rcast_common::events::SourceTag;
use rcast_common::{MatchSecond, MatchTimeline};

use super::{Candidate, FocusCalculator};
use crate::signals::hero_deaths;

/// Scores the victim of each hero death and, when one was recorded, the
/// killer with `killer_bias` applied.
pub struct DeathCalculator {
    weights: WeightsConfig,
}

impl DeathCalculator {
    pub fn new(weights: WeightsConfig) -> Self {
        Self { weights }
    }
}

impl FocusCalculator for DeathCalculator {
    fn source(&self) -> SourceTag {
        SourceTag::Death
    }

    fn candidates(&self, second: MatchSecond, timeline: &MatchTimeline) -> Vec<Candidate> {
        let mut found = Vec::new();
        for death in hero_deaths(timeline, second, second) {
            if death.is_self_inflicted() {
                continue;
            }
            found.push(
                Candidate::new(SourceTag::Death, death.victim, self.weights.death, "death")
                    .with_unit(death.unit),
            );
            if let Some(killer) = death.killer {
                found.push(
                    Candidate::new(
                        SourceTag::Death,
                        killer,
                        self.weights.death * self.weights.killer_bias,
                        "killer",
                    )
                    .with_unit(death.unit),
                );
            }
        }
        found
    }
}
