use rcast_common::config::{ProximityConfig, WeightsConfig};
use rcast_common::events::SourceTag;
use rcast_common::{MatchSecond, MatchTimeline};

use super::{Candidate, FocusCalculator};
use crate::signals::{proximity_facts, ProximityKind};

/// Low continuous-presence score for heroes near cores, enemies and objectives
pub struct ProximityCalculator {
    weights: WeightsConfig,
    thresholds: ProximityConfig,
}

impl ProximityCalculator {
    pub fn new(weights: WeightsConfig, thresholds: ProximityConfig) -> Self {
        Self { weights, thresholds }
    }

    fn weight(&self, kind: ProximityKind) -> f64 {
        match kind {
            ProximityKind::EnemyCore => self.weights.near_enemy_core,
            ProximityKind::OwnCore => self.weights.near_own_core,
            ProximityKind::EnemyHero => self.weights.near_enemy_hero,
            ProximityKind::Objective => self.weights.near_objective,
        }
    }
}

impl FocusCalculator for ProximityCalculator {
    fn source(&self) -> SourceTag {
        SourceTag::Proximity
    }

    fn candidates(&self, second: MatchSecond, timeline: &MatchTimeline) -> Vec<Candidate> {
        proximity_facts(timeline, second, &self.thresholds)
            .into_iter()
            .map(|fact| {
                Candidate::new(SourceTag::Proximity, fact.seat, self.weight(fact.kind), fact.kind.reason())
                    .with_unit(fact.unit)
            })
            .collect()
    }
}
