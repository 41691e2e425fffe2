//! Panel loop: drive the rotation scheduler and mirror it to the client

use std::sync::Arc;

use rcast_an::PanelScheduler;
use rcast_common::events::{DirectorEvent, PanelKind};
use rcast_common::MatchSecond;
use tracing::{debug, warn};

use super::{next_tick, ticker, LoopContext};
use crate::io::CommandSink;
use crate::playback::ClockView;
use crate::retry::retry_with_backoff;
use crate::Error;

pub async fn panel_loop(ctx: LoopContext, clock: ClockView, sink: Arc<dyn CommandSink>) {
    let mut ticker = ticker(ctx.config.runtime.panel_poll_ms);
    let mut scheduler = PanelScheduler::new(&ctx.config.panels, ctx.timeline.map.has_carried_objectives);
    let mut last_seen: Option<MatchSecond> = None;
    // What the client is known to display; None until the first command lands
    let mut on_screen: Option<PanelKind> = None;

    while next_tick(&mut ticker, &ctx.cancel).await {
        let Some(now) = clock.snapshot().synchronized_second() else {
            continue;
        };

        // Scan everything since the previous tick so a clock jump cannot skip
        // a forced panel
        let forced = ctx
            .analysis
            .panels
            .forced_between(last_seen, now)
            .map(|(_, panel)| panel);
        last_seen = Some(now);

        scheduler.tick(now, forced);
        let wanted = scheduler.current();
        if on_screen == Some(wanted) {
            continue;
        }

        let shown = retry_with_backoff("panel command", &ctx.config.runtime.command_retry, &ctx.cancel, || {
            sink.show_panel(wanted)
        })
        .await;

        match shown {
            Ok(()) => {
                debug!(session_id = %ctx.session_id, second = now, panel = %wanted, "Panel shown");
                on_screen = Some(wanted);
                ctx.events.emit_lossy(DirectorEvent::PanelChanged {
                    session_id: ctx.session_id,
                    second: now,
                    panel: wanted,
                    timestamp: chrono::Utc::now(),
                });
            }
            Err(Error::Cancelled) => break,
            Err(e) => warn!(session_id = %ctx.session_id, second = now, panel = %wanted, error = %e, "Panel command failed"),
        }
    }

    debug!(session_id = %ctx.session_id, "Panel loop stopped");
}
