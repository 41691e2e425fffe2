//! Boundary with the spectated client
//!
//! [`ClockReader`] is the runtime's only inbound signal; [`CommandSink`]
//! receives every side effect. Concrete adapters for the binary live in the
//! submodules; tests plug in scripted doubles.

mod file_clock;
mod jsonl_sink;

pub use file_clock::FileClockReader;
pub use jsonl_sink::{JsonLinesCommandSink, SinkCommand};

use async_trait::async_trait;
use rcast_common::events::PanelKind;
use rcast_common::match_data::Seat;
use rcast_common::MatchSecond;

use crate::Result;

/// Probe of the externally observed match clock
#[async_trait]
pub trait ClockReader: Send + Sync {
    /// Current elapsed match time, or `None` when no timer is visible.
    /// Must return promptly.
    async fn try_read(&self) -> Option<MatchSecond>;
}

/// Commands driven into the spectated client
///
/// Calls may be repeated safely; the runtime avoids redundant calls but
/// does not rely on the sink deduplicating.
#[async_trait]
pub trait CommandSink: Send + Sync {
    async fn focus_participant(&self, slot: Seat) -> Result<()>;

    async fn show_panel(&self, panel: PanelKind) -> Result<()>;
}
