//! # Replay Cast Analysis
//!
//! Offline decision engine: turns a [`MatchTimeline`] into a per-second
//! [`FocusTimeline`] and a sparse [`PanelTimeline`] before playback starts.
//!
//! Pipeline: signal extractors → focus calculators → aggregator →
//! smoothing, plus the panel timeline built from the same signals. Given
//! the same match and configuration the output is identical run to run.

pub mod calculators;
pub mod focus;
pub mod panels;
pub mod signals;

#[cfg(test)]
pub(crate) mod test_support;

pub use calculators::{Candidate, CalculatorSet, FocusCalculator};
pub use focus::{FocusAggregator, FocusDecision, FocusTimeline};
pub use panels::{PanelScheduler, PanelTimeline};

use rcast_common::events::DecisionLogEntry;
use rcast_common::{DirectorConfig, MatchSecond, MatchTimeline, Result};
use serde::Serialize;
use tracing::info;

/// Lookup tables the spectator runtime plays back
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub focus: FocusTimeline,
    pub panels: PanelTimeline,
}

/// Serializable summary written by the `analyze` command
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub duration_secs: MatchSecond,
    pub decisions: Vec<DecisionLogEntry>,
    pub forced_panels: PanelTimeline,
}

impl Analysis {
    pub fn report(&self, duration_secs: MatchSecond) -> AnalysisReport {
        AnalysisReport {
            duration_secs,
            decisions: self.focus.decision_log(),
            forced_panels: self.panels.clone(),
        }
    }
}

/// Run the full offline pass with the standard calculator set
pub fn analyze(timeline: &MatchTimeline, config: &DirectorConfig) -> Result<Analysis> {
    timeline.validate()?;

    let aggregator = FocusAggregator::new(CalculatorSet::standard(config));
    let mut focus = aggregator.aggregate(timeline)?;
    let overwritten = focus::smooth(&mut focus, &config.smoothing);
    let panels = PanelTimeline::build(timeline);

    info!(
        duration_secs = timeline.duration_secs,
        smoothed_seconds = overwritten,
        forced_panels = panels.len(),
        "Match analysis complete"
    );

    Ok(Analysis { focus, panels })
}
