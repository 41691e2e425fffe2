use rcast_common::config::{KillStreakConfig, WeightsConfig};
use rcast_common::events::SourceTag;
use rcast_common::{MatchSecond, MatchTimeline};

use super::{Candidate, FocusCalculator};
use crate::signals::predicates::window_start;
use crate::signals::{hero_deaths, kills_by};

const STREAK_REASONS: [&str; 5] = [
    "single_kill",
    "double_kill",
    "triple_kill",
    "quad_kill",
    "penta_kill",
];

/// Scores the killer at the second of each credited hero kill, scaled by
/// the streak level reached in the trailing windows.
pub struct KillCalculator {
    weights: WeightsConfig,
    streaks: KillStreakConfig,
}

impl KillCalculator {
    pub fn new(weights: WeightsConfig, streaks: KillStreakConfig) -> Self {
        Self { weights, streaks }
    }

    /// Highest level L in 5..=1 with at least L kills in the level's window
    fn streak_level(&self, timeline: &MatchTimeline, killer: usize, second: MatchSecond) -> u32 {
        (1..=5u32)
            .rev()
            .find(|&level| {
                let start = window_start(second, self.streaks.window_for_level(level));
                kills_by(timeline, killer, start, second) >= level as usize
            })
            .unwrap_or(1)
    }
}

impl FocusCalculator for KillCalculator {
    fn source(&self) -> SourceTag {
        SourceTag::Kill
    }

    fn candidates(&self, second: MatchSecond, timeline: &MatchTimeline) -> Vec<Candidate> {
        hero_deaths(timeline, second, second)
            .into_iter()
            .filter_map(|death| {
                let killer = death.credited_killer()?;
                let level = self.streak_level(timeline, killer, second);
                let score =
                    self.weights.kill * (1.0 + self.weights.multi_kill_step * (level - 1) as f64);
                Some(
                    Candidate::new(SourceTag::Kill, killer, score, STREAK_REASONS[level as usize - 1])
                        .with_unit(death.unit),
                )
            })
            .collect()
    }
}
