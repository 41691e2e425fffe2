//! Long-lived per-session loops
//!
//! The clock loop is the only writer of the runtime clock. Focus, panel and
//! auxiliary loops read snapshots, act, and go back to sleep. All of them
//! exit promptly once the session token is cancelled.

mod aux;
mod clock;
mod focus;
mod panel;

pub use aux::aux_loop;
pub use clock::{clock_loop, ClockExit};
pub use focus::focus_loop;
pub use panel::panel_loop;

use std::sync::Arc;
use std::time::Duration;

use rcast_an::Analysis;
use rcast_common::events::EventBus;
use rcast_common::{DirectorConfig, MatchTimeline};
use tokio::time::{interval, Interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// Everything a loop needs about its session
#[derive(Clone)]
pub struct LoopContext {
    pub session_id: Uuid,
    pub timeline: Arc<MatchTimeline>,
    pub analysis: Arc<Analysis>,
    pub config: Arc<DirectorConfig>,
    pub events: Arc<EventBus>,
    /// Session token, a child of the director's root token
    pub cancel: CancellationToken,
}

fn ticker(period_ms: u64) -> Interval {
    let mut ticker = interval(Duration::from_millis(period_ms.max(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

/// Wait for the next tick. Returns false once cancelled.
async fn next_tick(ticker: &mut Interval, cancel: &CancellationToken) -> bool {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => false,
        _ = ticker.tick() => true,
    }
}
