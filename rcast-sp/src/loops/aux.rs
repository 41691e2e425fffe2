//! Auxiliary loop: decision log and live stat snapshots on the event bus
//!
//! Only ever emits with `emit_lossy`, so a slow consumer cannot hold up
//! playback.

use rcast_an::signals::hero_deaths;
use rcast_common::events::{DirectorEvent, ParticipantStats};
use rcast_common::{MatchSecond, MatchTimeline};
use tracing::debug;

use super::{next_tick, ticker, LoopContext};
use crate::playback::ClockView;

pub async fn aux_loop(ctx: LoopContext, clock: ClockView) {
    let mut ticker = ticker(ctx.config.runtime.aux_poll_ms);
    let stats_every = ctx.config.runtime.stats_every_secs.max(1);
    let mut last_logged: Option<MatchSecond> = None;
    let mut next_stats_at: MatchSecond = 0;

    while next_tick(&mut ticker, &ctx.cancel).await {
        let Some(now) = clock.snapshot().synchronized_second() else {
            continue;
        };

        let from = last_logged.map_or(0, |s| s + 1);
        for second in from..=now {
            if let Some(decision) = ctx.analysis.focus.get(second) {
                ctx.events.emit_lossy(DirectorEvent::DecisionLogged {
                    session_id: ctx.session_id,
                    entry: decision.log_entry(),
                });
            }
        }
        if last_logged.map_or(true, |s| now > s) {
            last_logged = Some(now);
        }

        if now >= next_stats_at {
            ctx.events.emit_lossy(DirectorEvent::StatsSnapshot {
                session_id: ctx.session_id,
                second: now,
                stats: stats_until(&ctx.timeline, now),
            });
            next_stats_at = now + stats_every;
        }
    }

    debug!(session_id = %ctx.session_id, "Auxiliary loop stopped");
}

/// Kills and deaths per seat up to and including `second`
pub fn stats_until(timeline: &MatchTimeline, second: MatchSecond) -> Vec<ParticipantStats> {
    let mut stats: Vec<ParticipantStats> = timeline
        .participants
        .iter()
        .map(|p| ParticipantStats {
            seat: p.seat,
            ..Default::default()
        })
        .collect();
    stats.sort_by_key(|s| s.seat);

    for death in hero_deaths(timeline, 0, second) {
        if let Some(entry) = stats.get_mut(death.victim) {
            entry.deaths += 1;
        }
        if let Some(entry) = death.credited_killer().and_then(|k| stats.get_mut(k)) {
            entry.kills += 1;
        }
    }
    stats
}
