//! Per-second focus decisions
//!
//! [`FocusAggregator`] reduces calculator candidates into one
//! [`FocusDecision`] for every second of the match; [`smoothing`] then
//! spreads kill and death moments over their lead-in and hold seconds.

mod aggregator;
pub mod smoothing;

pub use aggregator::FocusAggregator;
pub use smoothing::{smooth, smooth_decisions};

use std::collections::BTreeSet;

use rcast_common::events::{DecisionLogEntry, SourceTag};
use rcast_common::match_data::{Seat, UnitId};
use rcast_common::MatchSecond;
use serde::Serialize;

/// Winning candidate for one second
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FocusDecision {
    pub second: MatchSecond,
    pub source: SourceTag,
    pub unit: Option<UnitId>,
    pub participant: Seat,
    pub score: f64,
    pub reason: &'static str,
    /// Seat index used by focus commands
    pub slot: Seat,
    /// Second the underlying kill or death happened; set only for combat
    /// decisions, and kept when smoothing copies the decision elsewhere
    pub event_second: Option<MatchSecond>,
}

impl FocusDecision {
    /// Same decision placed at another second
    pub fn moved_to(&self, second: MatchSecond) -> Self {
        Self {
            second,
            ..self.clone()
        }
    }

    /// Combat decision sitting on its own event second
    pub fn is_combat_anchor(&self) -> bool {
        self.source.is_combat() && self.event_second == Some(self.second)
    }

    pub fn log_entry(&self) -> DecisionLogEntry {
        DecisionLogEntry {
            second: self.second,
            source: self.source,
            reason: self.reason.to_string(),
            participant: self.participant,
            score: self.score,
        }
    }
}

/// Dense second → decision table covering `[0, duration)`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FocusTimeline {
    decisions: Vec<FocusDecision>,
    /// Units whose death has already been smoothed
    #[serde(skip)]
    smoothed_units: BTreeSet<UnitId>,
}

impl FocusTimeline {
    /// Wrap decisions indexed by second; `decisions[i].second` must equal `i`
    pub(crate) fn from_decisions(decisions: Vec<FocusDecision>) -> Self {
        Self {
            decisions,
            smoothed_units: BTreeSet::new(),
        }
    }

    pub fn get(&self, second: MatchSecond) -> Option<&FocusDecision> {
        self.decisions.get(second as usize)
    }

    /// Slot to focus at `second`
    pub fn slot_at(&self, second: MatchSecond) -> Option<Seat> {
        self.get(second).map(|d| d.slot)
    }

    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FocusDecision> {
        self.decisions.iter()
    }

    pub fn decisions(&self) -> &[FocusDecision] {
        &self.decisions
    }

    /// `(second, reason, participant, score)` rows for reporting
    pub fn decision_log(&self) -> Vec<DecisionLogEntry> {
        self.decisions.iter().map(FocusDecision::log_entry).collect()
    }

    /// Seconds whose decision came from `source`
    pub fn count_source(&self, source: SourceTag) -> usize {
        self.decisions.iter().filter(|d| d.source == source).count()
    }
}
