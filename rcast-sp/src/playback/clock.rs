//! Single-writer runtime clock
//!
//! The clock loop owns the only [`ClockWriter`]; every other loop holds a
//! [`ClockView`] and reads the latest snapshot. `ClockWriter` is not
//! `Clone`, so a second writer cannot be created.

use rcast_common::events::PlaybackState;
use rcast_common::MatchSecond;
use tokio::sync::watch;

/// Elapsed match time and playback state as last published
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RuntimeClock {
    pub elapsed: Option<MatchSecond>,
    pub state: PlaybackState,
}

impl RuntimeClock {
    /// Second to act on, only while the clock is trustworthy
    pub fn synchronized_second(&self) -> Option<MatchSecond> {
        if self.state.is_synchronized() {
            self.elapsed
        } else {
            None
        }
    }
}

pub struct ClockWriter {
    tx: watch::Sender<RuntimeClock>,
}

#[derive(Clone)]
pub struct ClockView {
    rx: watch::Receiver<RuntimeClock>,
}

/// Fresh clock in `Loading` with no elapsed time
pub fn runtime_clock() -> (ClockWriter, ClockView) {
    let (tx, rx) = watch::channel(RuntimeClock::default());
    (ClockWriter { tx }, ClockView { rx })
}

impl ClockWriter {
    pub fn publish(&self, clock: RuntimeClock) {
        // send_replace never fails, even with every view dropped
        self.tx.send_replace(clock);
    }

    pub fn current(&self) -> RuntimeClock {
        *self.tx.borrow()
    }
}

impl ClockView {
    pub fn snapshot(&self) -> RuntimeClock {
        *self.rx.borrow()
    }
}
