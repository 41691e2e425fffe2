//! Panel rotation state machine
//!
//! Driven by match time only, so the same sequence of ticks always yields
//! the same panels. The spectator runtime feeds it the clock and the
//! forced panel (if any) seen since its previous tick.

use rcast_common::config::PanelConfig;
use rcast_common::events::PanelKind;
use rcast_common::MatchSecond;
use tracing::debug;

pub struct PanelScheduler {
    dwell_secs: u32,
    hidden_secs: u32,
    rotation: Vec<PanelKind>,
    current: PanelKind,
    since: Option<MatchSecond>,
    next_index: usize,
}

impl PanelScheduler {
    /// Rotation entries whose precondition fails for this match are dropped
    /// up front.
    pub fn new(config: &PanelConfig, has_carried_objectives: bool) -> Self {
        let rotation = config
            .rotation
            .iter()
            .copied()
            .filter(|panel| match panel {
                PanelKind::None => false,
                PanelKind::CarriedObjectives => has_carried_objectives,
                _ => true,
            })
            .collect();

        Self {
            dwell_secs: config.dwell_secs,
            hidden_secs: config.hidden_secs,
            rotation,
            current: PanelKind::None,
            since: None,
            next_index: 0,
        }
    }

    /// Panel currently on screen
    pub fn current(&self) -> PanelKind {
        self.current
    }

    pub fn rotation(&self) -> &[PanelKind] {
        &self.rotation
    }

    /// Advance to `now`. Returns the new panel when it changes.
    pub fn tick(&mut self, now: MatchSecond, forced: Option<PanelKind>) -> Option<PanelKind> {
        let since = match self.since {
            Some(since) if since <= now => since,
            // First tick, or the clock stepped back: restart the timer here
            _ => {
                self.since = Some(now);
                now
            }
        };
        let elapsed = now - since;

        if let Some(panel) = forced.filter(|p| *p != PanelKind::None && *p != self.current) {
            let protected = self.current.is_high_priority()
                && elapsed < self.dwell_secs
                && !panel.is_high_priority();
            if protected {
                debug!(
                    second = now,
                    current = %self.current,
                    forced = %panel,
                    "Forced panel suppressed by high priority panel"
                );
            } else {
                if let Some(index) = self.rotation.iter().position(|p| *p == panel) {
                    self.next_index = (index + 1) % self.rotation.len();
                }
                return Some(self.switch(now, panel));
            }
        }

        if self.current != PanelKind::None {
            if elapsed >= self.dwell_secs {
                return Some(self.switch(now, PanelKind::None));
            }
            return None;
        }

        if elapsed >= self.hidden_secs && !self.rotation.is_empty() {
            let panel = self.rotation[self.next_index];
            self.next_index = (self.next_index + 1) % self.rotation.len();
            return Some(self.switch(now, panel));
        }

        None
    }

    fn switch(&mut self, now: MatchSecond, panel: PanelKind) -> PanelKind {
        self.current = panel;
        self.since = Some(now);
        panel
    }
}
