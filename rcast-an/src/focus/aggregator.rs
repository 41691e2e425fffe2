//! Candidate reduction across the whole match
//!
//! Each second is decided independently on the rayon pool. Candidates for
//! a second are collected first and then folded in calculator order, so an
//! exact score tie always goes to the earlier calculator no matter how the
//! pool schedules work.

use rayon::prelude::*;
use rcast_common::{Error, MatchSecond, MatchTimeline, Result};
use tracing::{debug, info};

use super::{FocusDecision, FocusTimeline};
use crate::calculators::{Candidate, CalculatorSet};

pub struct FocusAggregator {
    calculators: CalculatorSet,
}

impl FocusAggregator {
    pub fn new(calculators: CalculatorSet) -> Self {
        Self { calculators }
    }

    pub fn calculators(&self) -> &CalculatorSet {
        &self.calculators
    }

    /// Highest-scoring candidate for one second, first evaluated on ties
    pub fn decide(&self, second: MatchSecond, timeline: &MatchTimeline) -> Option<FocusDecision> {
        let candidates = self.calculators.candidates_at(second, timeline);
        let winner = reduce(candidates, timeline, second)?;
        let event_second = winner.source.is_combat().then_some(second);

        Some(FocusDecision {
            second,
            source: winner.source,
            unit: winner.unit,
            participant: winner.participant,
            score: winner.score,
            reason: winner.reason,
            slot: winner.participant,
            event_second,
        })
    }

    /// Decide every second of `[0, duration)`.
    ///
    /// Fails only when some second ends up with no candidate at all, which
    /// the standard calculator set rules out for any match with participants.
    pub fn aggregate(&self, timeline: &MatchTimeline) -> Result<FocusTimeline> {
        let duration = timeline.duration_secs;

        let decided: Vec<Option<FocusDecision>> = (0..duration)
            .into_par_iter()
            .map(|second| self.decide(second, timeline))
            .collect();

        let mut decisions = Vec::with_capacity(decided.len());
        for (second, decision) in decided.into_iter().enumerate() {
            match decision {
                Some(decision) => decisions.push(decision),
                None => {
                    return Err(Error::InvalidInput(format!(
                        "no focus candidate at second {}",
                        second
                    )))
                }
            }
        }

        info!(
            duration_secs = duration,
            calculators = self.calculators.len(),
            "Focus timeline aggregated"
        );
        Ok(FocusTimeline::from_decisions(decisions))
    }
}

/// Sequential fold keeping the first strictly-highest valid candidate
fn reduce(candidates: Vec<Candidate>, timeline: &MatchTimeline, second: MatchSecond) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;
    for candidate in candidates {
        if !candidate.score.is_finite() {
            debug!(second, source = %candidate.source, "Dropping candidate with non-finite score");
            continue;
        }
        if timeline.participant(candidate.participant).is_none() {
            debug!(
                second,
                source = %candidate.source,
                participant = candidate.participant,
                "Dropping candidate for unknown participant"
            );
            continue;
        }
        let better = best.as_ref().map_or(true, |b| candidate.score > b.score);
        if better {
            best = Some(candidate);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::FocusCalculator;
    use crate::test_support::match_with_units;
    use rcast_common::events::SourceTag;

    struct Fixed {
        source: SourceTag,
        participant: usize,
        score: f64,
    }

    impl FocusCalculator for Fixed {
        fn source(&self) -> SourceTag {
            self.source
        }

        fn candidates(&self, _second: MatchSecond, _timeline: &MatchTimeline) -> Vec<Candidate> {
            vec![Candidate::new(self.source, self.participant, self.score, "fixed")]
        }
    }

    fn aggregator(calcs: Vec<Fixed>) -> FocusAggregator {
        FocusAggregator::new(CalculatorSet::from_calculators(
            calcs
                .into_iter()
                .map(|c| Box::new(c) as Box<dyn FocusCalculator>)
                .collect(),
        ))
    }

    #[test]
    fn test_exact_tie_goes_to_first_calculator() {
        let agg = aggregator(vec![
            Fixed { source: SourceTag::Objective, participant: 1, score: 10.0 },
            Fixed { source: SourceTag::Camp, participant: 2, score: 10.0 },
        ]);
        let timeline = agg.aggregate(&match_with_units(Vec::new())).unwrap();
        assert!(timeline.iter().all(|d| d.participant == 1 && d.source == SourceTag::Objective));
    }

    #[test]
    fn test_highest_score_wins() {
        let agg = aggregator(vec![
            Fixed { source: SourceTag::Objective, participant: 1, score: 10.0 },
            Fixed { source: SourceTag::Taunt, participant: 2, score: 11.0 },
        ]);
        let decision = agg.decide(0, &match_with_units(Vec::new())).unwrap();
        assert_eq!(decision.participant, 2);
        assert_eq!(decision.slot, 2);
        assert_eq!(decision.event_second, None);
    }

    #[test]
    fn test_nan_and_unknown_seats_dropped() {
        let agg = aggregator(vec![
            Fixed { source: SourceTag::Objective, participant: 1, score: f64::NAN },
            Fixed { source: SourceTag::Camp, participant: 42, score: 99.0 },
            Fixed { source: SourceTag::Idle, participant: 0, score: 0.0 },
        ]);
        let decision = agg.decide(3, &match_with_units(Vec::new())).unwrap();
        assert_eq!(decision.source, SourceTag::Idle);
    }

    #[test]
    fn test_missing_candidates_is_an_error() {
        let agg = aggregator(Vec::new());
        assert!(agg.aggregate(&match_with_units(Vec::new())).is_err());
    }
}
