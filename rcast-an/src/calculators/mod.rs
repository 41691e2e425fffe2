//! Focus calculators
//!
//! Each calculator scores one family of moments for a single second and
//! proposes zero or more [`Candidate`]s. Calculators never fail: a fact that
//! is missing what the calculator needs is skipped.
//!
//! Evaluation order is fixed by [`CalculatorSet::standard`]; the aggregator
//! breaks exact score ties in favour of the earlier calculator.

mod camps;
mod deaths;
mod idle;
mod kills;
mod objectives;
mod proximity;
mod taunts;

pub use camps::CampCalculator;
pub use deaths::DeathCalculator;
pub use idle::IdleCalculator;
pub use kills::KillCalculator;
pub use objectives::ObjectiveCalculator;
pub use proximity::ProximityCalculator;
pub use taunts::TauntCalculator;

use rcast_common::events::SourceTag;
use rcast_common::match_data::{Seat, UnitId};
use rcast_common::{DirectorConfig, MatchSecond, MatchTimeline};

/// One calculator's scored proposal for a single second
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub source: SourceTag,
    /// Unit the moment is about (victim, structure, camp), if any
    pub unit: Option<UnitId>,
    /// Participant the camera should follow
    pub participant: Seat,
    pub score: f64,
    pub reason: &'static str,
}

impl Candidate {
    pub fn new(source: SourceTag, participant: Seat, score: f64, reason: &'static str) -> Self {
        Self {
            source,
            unit: None,
            participant,
            score,
            reason,
        }
    }

    pub fn with_unit(mut self, unit: UnitId) -> Self {
        self.unit = Some(unit);
        self
    }
}

/// Scorer for one family of moments
pub trait FocusCalculator: Send + Sync {
    /// Family tag recorded on every candidate this calculator emits
    fn source(&self) -> SourceTag;

    /// Candidates for `second`; an empty vec means nothing notable
    fn candidates(&self, second: MatchSecond, timeline: &MatchTimeline) -> Vec<Candidate>;
}

/// Ordered calculator list
pub struct CalculatorSet {
    calculators: Vec<Box<dyn FocusCalculator>>,
}

impl CalculatorSet {
    /// Objective, Camp, Kill, Death, Proximity, Taunt, Idle
    pub fn standard(config: &DirectorConfig) -> Self {
        Self::from_calculators(vec![
            Box::new(ObjectiveCalculator::new(config.weights.clone())),
            Box::new(CampCalculator::new(config.weights.clone(), config.camps.clone())),
            Box::new(KillCalculator::new(config.weights.clone(), config.kill_streak.clone())),
            Box::new(DeathCalculator::new(config.weights.clone())),
            Box::new(ProximityCalculator::new(config.weights.clone(), config.proximity.clone())),
            Box::new(TauntCalculator::new(config.weights.clone(), config.taunts.clone())),
            Box::new(IdleCalculator::new(config.weights.idle_rotation_secs)),
        ])
    }

    pub fn from_calculators(calculators: Vec<Box<dyn FocusCalculator>>) -> Self {
        Self { calculators }
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn FocusCalculator> {
        self.calculators.iter().map(|c| c.as_ref())
    }

    pub fn len(&self) -> usize {
        self.calculators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calculators.is_empty()
    }

    /// Every candidate for `second`, in calculator order
    pub fn candidates_at(&self, second: MatchSecond, timeline: &MatchTimeline) -> Vec<Candidate> {
        self.iter()
            .flat_map(|calculator| calculator.candidates(second, timeline))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_order() {
        let set = CalculatorSet::standard(&DirectorConfig::default());
        let order: Vec<SourceTag> = set.iter().map(|c| c.source()).collect();
        assert_eq!(
            order,
            vec![
                SourceTag::Objective,
                SourceTag::Camp,
                SourceTag::Kill,
                SourceTag::Death,
                SourceTag::Proximity,
                SourceTag::Taunt,
                SourceTag::Idle,
            ]
        );
    }
}
