//! One spectated match
//!
//! A session owns a child of the director's root token. The clock loop runs
//! on the session task itself; focus, panel and auxiliary loops are spawned
//! and cancelled together as soon as the clock loop returns. Loops that
//! outlive `runtime.loop_join_timeout_ms` after that are aborted.

use std::sync::Arc;
use std::time::Duration;

use rcast_an::Analysis;
use rcast_common::events::{DirectorEvent, EventBus, SessionOutcome};
use rcast_common::{DirectorConfig, MatchTimeline};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use uuid::Uuid;

use crate::io::{ClockReader, CommandSink};
use crate::loops::{aux_loop, clock_loop, focus_loop, panel_loop, ClockExit, LoopContext};
use crate::playback::runtime_clock;

pub struct SpectatorSession {
    id: Uuid,
    timeline: Arc<MatchTimeline>,
    analysis: Arc<Analysis>,
    config: Arc<DirectorConfig>,
    events: Arc<EventBus>,
}

impl SpectatorSession {
    pub fn new(
        timeline: Arc<MatchTimeline>,
        analysis: Arc<Analysis>,
        config: Arc<DirectorConfig>,
        events: Arc<EventBus>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timeline,
            analysis,
            config,
            events,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Play the match until the clock ends, is lost, or `root` is cancelled.
    ///
    /// Never touches `root` itself; only the session's child token is
    /// cancelled on the way out.
    pub async fn run(
        self,
        reader: Arc<dyn ClockReader>,
        sink: Arc<dyn CommandSink>,
        root: &CancellationToken,
    ) -> SessionOutcome {
        let token = root.child_token();
        let ctx = LoopContext {
            session_id: self.id,
            timeline: self.timeline,
            analysis: self.analysis,
            config: self.config,
            events: Arc::clone(&self.events),
            cancel: token.clone(),
        };

        info!(
            session_id = %self.id,
            duration_secs = ctx.timeline.duration_secs,
            participants = ctx.timeline.participant_count(),
            "Spectator session started"
        );
        self.events.emit_lossy(DirectorEvent::SessionStarted {
            session_id: self.id,
            duration_secs: ctx.timeline.duration_secs,
            timestamp: chrono::Utc::now(),
        });

        let (writer, view) = runtime_clock();
        let focus = tokio::spawn(focus_loop(ctx.clone(), view.clone(), Arc::clone(&sink)));
        let panel = tokio::spawn(panel_loop(ctx.clone(), view.clone(), sink));
        let aux = tokio::spawn(aux_loop(ctx.clone(), view));

        let join_grace = Duration::from_millis(ctx.config.runtime.loop_join_timeout_ms);
        let exit = clock_loop(ctx, writer, reader).await;
        token.cancel();

        let deadline = Instant::now() + join_grace;
        for (name, mut handle) in [("focus", focus), ("panel", panel), ("aux", aux)] {
            match tokio::time::timeout_at(deadline, &mut handle).await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => warn!(session_id = %self.id, loop_name = name, error = %e, "Loop task failed"),
                Err(_) => {
                    warn!(session_id = %self.id, loop_name = name, "Loop did not stop in time, aborting");
                    handle.abort();
                }
            }
        }

        let outcome = match exit {
            ClockExit::EndDetected => SessionOutcome::Completed,
            ClockExit::Desynchronized => SessionOutcome::Desynchronized,
            ClockExit::Cancelled => SessionOutcome::Cancelled,
        };

        info!(session_id = %self.id, outcome = %outcome, "Spectator session ended");
        self.events.emit_lossy(DirectorEvent::SessionEnded {
            session_id: self.id,
            outcome,
            timestamp: chrono::Utc::now(),
        });
        outcome
    }
}
