//! Focus loop: follow the focus timeline, one command per change

use std::sync::Arc;

use rcast_common::events::DirectorEvent;
use rcast_common::match_data::Seat;
use tracing::{debug, warn};

use super::{next_tick, ticker, LoopContext};
use crate::io::CommandSink;
use crate::playback::ClockView;
use crate::retry::retry_with_backoff;
use crate::Error;

pub async fn focus_loop(ctx: LoopContext, clock: ClockView, sink: Arc<dyn CommandSink>) {
    let mut ticker = ticker(ctx.config.runtime.focus_poll_ms);
    let mut last_sent: Option<Seat> = None;

    while next_tick(&mut ticker, &ctx.cancel).await {
        let Some(second) = clock.snapshot().synchronized_second() else {
            continue;
        };
        let Some(slot) = ctx.analysis.focus.slot_at(second) else {
            continue;
        };
        if last_sent == Some(slot) {
            continue;
        }

        let sent = retry_with_backoff("focus command", &ctx.config.runtime.command_retry, &ctx.cancel, || {
            sink.focus_participant(slot)
        })
        .await;

        match sent {
            Ok(()) => {
                debug!(session_id = %ctx.session_id, second, slot, "Focus switched");
                last_sent = Some(slot);
                ctx.events.emit_lossy(DirectorEvent::FocusChanged {
                    session_id: ctx.session_id,
                    second,
                    slot,
                    timestamp: chrono::Utc::now(),
                });
            }
            Err(Error::Cancelled) => break,
            // Leave last_sent alone so the next tick tries again
            Err(e) => warn!(session_id = %ctx.session_id, second, slot, error = %e, "Focus command failed"),
        }
    }

    debug!(session_id = %ctx.session_id, "Focus loop stopped");
}
