//! Lead-in and hold smoothing around kills and deaths
//!
//! Anchors are combat decisions still sitting on their own event second,
//! visited in chronological order, each dead unit once. For an anchor at
//! `t` with score `s`:
//!
//! - `t-k` for `k` in `1..=past_context_secs` takes the anchor when its
//!   current score is below `s`.
//! - `t+k` for `k` in `1..=present_context_secs` takes the anchor when its
//!   current score is below `s` and it does not hold a kill or death of a
//!   different unit whose event second is `t+k` or later.
//!
//! Copies keep the anchor's event second, so they never become anchors
//! themselves and a second pass over a smoothed table changes nothing.
//! Scores only ever go up.

use std::collections::BTreeSet;

use rcast_common::config::SmoothingConfig;
use rcast_common::match_data::UnitId;
use rcast_common::MatchSecond;
use tracing::{debug, info};

use super::{FocusDecision, FocusTimeline};

/// Smooth a timeline in place, skipping units smoothed by an earlier call.
/// Returns the number of seconds overwritten.
pub fn smooth(timeline: &mut FocusTimeline, config: &SmoothingConfig) -> usize {
    let overwritten = smooth_decisions(&mut timeline.decisions, config, &mut timeline.smoothed_units);
    info!(
        overwritten,
        smoothed_units = timeline.smoothed_units.len(),
        "Focus smoothing pass complete"
    );
    overwritten
}

/// Smooth a dense decision slice indexed by second.
///
/// `smoothed` records units already handled; units found there are left
/// alone.
pub fn smooth_decisions(
    decisions: &mut [FocusDecision],
    config: &SmoothingConfig,
    smoothed: &mut BTreeSet<UnitId>,
) -> usize {
    let anchors: Vec<FocusDecision> = decisions
        .iter()
        .filter(|d| d.is_combat_anchor())
        .cloned()
        .collect();

    let mut overwritten = 0;
    for anchor in anchors {
        let Some(unit) = anchor.unit else {
            continue;
        };
        if !smoothed.insert(unit) {
            debug!(second = anchor.second, unit, "Unit already smoothed, skipping");
            continue;
        }
        let t = anchor.second;
        for k in 1..=config.past_context_secs {
            let Some(second) = t.checked_sub(k) else {
                break;
            };
            let slot = &mut decisions[second as usize];
            if slot.score < anchor.score {
                *slot = anchor.moved_to(second);
                overwritten += 1;
            }
        }

        for k in 1..=config.present_context_secs {
            let second = t + k;
            let Some(slot) = decisions.get_mut(second as usize) else {
                break;
            };
            if slot.score < anchor.score && !holds_upcoming_death(slot, unit, second) {
                *slot = anchor.moved_to(second);
                overwritten += 1;
            }
        }
    }

    overwritten
}

/// Kill or death of another unit that has not happened yet at `second`
fn holds_upcoming_death(occupant: &FocusDecision, unit: UnitId, second: MatchSecond) -> bool {
    occupant.source.is_combat()
        && occupant.unit != Some(unit)
        && occupant.event_second.is_some_and(|event| event >= second)
}
