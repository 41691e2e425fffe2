//! Clock polling loop, sole writer of the runtime clock

use std::sync::Arc;
use std::time::{Duration, Instant};

use rcast_common::events::{DirectorEvent, PlaybackState};
use tracing::{debug, info, warn};

use super::{next_tick, ticker, LoopContext};
use crate::io::ClockReader;
use crate::playback::{ClockWriter, PlaybackClassifier, RuntimeClock};
use crate::retry::retry_with_backoff;
use crate::Error;

/// Why the clock loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockExit {
    /// A reading reached the match duration
    EndDetected,
    /// Clock lost after synchronizing, or never found
    Desynchronized,
    Cancelled,
}

pub async fn clock_loop(ctx: LoopContext, writer: ClockWriter, reader: Arc<dyn ClockReader>) -> ClockExit {
    let clock_config = &ctx.config.clock;
    let max_jump = clock_config.max_backward_jump_secs;
    let loading_deadline = Duration::from_secs(clock_config.max_loading_secs);
    let started = Instant::now();

    let mut classifier = PlaybackClassifier::new(ctx.timeline.duration_secs);
    let mut ticker = ticker(clock_config.poll_interval_ms);

    loop {
        if !next_tick(&mut ticker, &ctx.cancel).await {
            return ClockExit::Cancelled;
        }

        let previous = classifier.last_reading();
        let read = retry_with_backoff("clock read", &clock_config.retry, &ctx.cancel, || {
            let reader = Arc::clone(&reader);
            async move {
                let reading = reader.try_read().await.ok_or(Error::ClockUnavailable)?;
                match previous {
                    Some(prev) if reading != 0 && prev > reading && prev - reading > max_jump => {
                        Err(Error::ImplausibleClock {
                            reading,
                            previous: prev,
                        })
                    }
                    _ => Ok(reading),
                }
            }
        })
        .await;

        let old_state = classifier.state();
        let (new_state, lost) = match read {
            Ok(reading) => (classifier.observe(reading), false),
            Err(Error::Cancelled) => return ClockExit::Cancelled,
            Err(e) => {
                debug!(session_id = %ctx.session_id, error = %e, "Clock read budget exhausted");
                (classifier.clock_lost(), true)
            }
        };

        writer.publish(RuntimeClock {
            elapsed: classifier.last_reading(),
            state: new_state,
        });

        if new_state != old_state {
            info!(
                session_id = %ctx.session_id,
                elapsed = ?classifier.last_reading(),
                "Playback state {} -> {}",
                old_state,
                new_state
            );
            ctx.events.emit_lossy(DirectorEvent::PlaybackStateChanged {
                session_id: ctx.session_id,
                old_state,
                new_state,
                elapsed: classifier.last_reading(),
                timestamp: chrono::Utc::now(),
            });
        }

        match new_state {
            PlaybackState::EndDetected if lost => {
                warn!(
                    session_id = %ctx.session_id,
                    last_reading = ?classifier.last_reading(),
                    "Clock lost after synchronizing, ending session"
                );
                return ClockExit::Desynchronized;
            }
            PlaybackState::EndDetected => return ClockExit::EndDetected,
            PlaybackState::Loading if started.elapsed() >= loading_deadline => {
                warn!(
                    session_id = %ctx.session_id,
                    waited_secs = started.elapsed().as_secs(),
                    "Clock never appeared, giving up on this match"
                );
                return ClockExit::Desynchronized;
            }
            _ => {}
        }
    }
}
