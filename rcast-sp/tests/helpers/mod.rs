//! Test Helper Utilities
//!
//! Scripted clock, recording sink and fast configuration for runtime tests

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use rcast_common::config::RetryConfig;
use rcast_common::events::PanelKind;
use rcast_common::match_data::{MapInfo, Participant, Seat, Unit};
use rcast_common::{DirectorConfig, MatchSecond, MatchTimeline};
use rcast_sp::io::{ClockReader, CommandSink, SinkCommand};
use rcast_sp::{Error, Result};

/// What the scripted clock does once its script runs out
#[derive(Debug, Clone, Copy)]
pub enum AfterScript {
    /// Keep returning the last scripted value
    Hold,
    /// Report no clock from then on
    Vanish,
}

/// Clock that replays one scripted reading per call
pub struct ScriptedClock {
    script: Mutex<VecDeque<Option<MatchSecond>>>,
    last: Mutex<Option<MatchSecond>>,
    after: AfterScript,
    reads: AtomicU32,
}

impl ScriptedClock {
    pub fn new(script: Vec<Option<MatchSecond>>, after: AfterScript) -> Self {
        Self {
            script: Mutex::new(script.into()),
            last: Mutex::new(None),
            after,
            reads: AtomicU32::new(0),
        }
    }

    /// Every reading present, in order
    pub fn readings(readings: &[MatchSecond], after: AfterScript) -> Self {
        Self::new(readings.iter().map(|r| Some(*r)).collect(), after)
    }

    pub fn reads(&self) -> u32 {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ClockReader for ScriptedClock {
    async fn try_read(&self) -> Option<MatchSecond> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(reading) => {
                *self.last.lock().unwrap() = reading;
                reading
            }
            None => match self.after {
                AfterScript::Hold => *self.last.lock().unwrap(),
                AfterScript::Vanish => None,
            },
        }
    }
}

/// Sink that records delivered commands and can fail on demand
#[derive(Default)]
pub struct RecordingSink {
    commands: Mutex<Vec<SinkCommand>>,
    focus_failures_left: AtomicU32,
    focus_attempts: AtomicU32,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the next `count` focus calls
    pub fn failing_focus(count: u32) -> Self {
        let sink = Self::default();
        sink.focus_failures_left.store(count, Ordering::SeqCst);
        sink
    }

    pub fn commands(&self) -> Vec<SinkCommand> {
        self.commands.lock().unwrap().clone()
    }

    pub fn focus_commands(&self) -> Vec<Seat> {
        self.commands()
            .into_iter()
            .filter_map(|c| match c {
                SinkCommand::FocusParticipant { slot } => Some(slot),
                _ => None,
            })
            .collect()
    }

    pub fn panel_commands(&self) -> Vec<PanelKind> {
        self.commands()
            .into_iter()
            .filter_map(|c| match c {
                SinkCommand::ShowPanel { panel } => Some(panel),
                _ => None,
            })
            .collect()
    }

    pub fn focus_attempts(&self) -> u32 {
        self.focus_attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CommandSink for RecordingSink {
    async fn focus_participant(&self, slot: Seat) -> Result<()> {
        self.focus_attempts.fetch_add(1, Ordering::SeqCst);
        let failing = self
            .focus_failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .is_ok();
        if failing {
            return Err(Error::Command("injected focus failure".to_string()));
        }
        self.commands
            .lock()
            .unwrap()
            .push(SinkCommand::FocusParticipant { slot });
        Ok(())
    }

    async fn show_panel(&self, panel: PanelKind) -> Result<()> {
        self.commands.lock().unwrap().push(SinkCommand::ShowPanel { panel });
        Ok(())
    }
}

/// Clock whose reads never complete
pub struct HangingClock;

#[async_trait]
impl ClockReader for HangingClock {
    async fn try_read(&self) -> Option<MatchSecond> {
        std::future::pending().await
    }
}

/// Sink whose calls never complete
pub struct HangingSink;

#[async_trait]
impl CommandSink for HangingSink {
    async fn focus_participant(&self, _slot: Seat) -> Result<()> {
        std::future::pending().await
    }

    async fn show_panel(&self, _panel: PanelKind) -> Result<()> {
        std::future::pending().await
    }
}

/// Millisecond-scale intervals so sessions finish quickly
pub fn fast_config() -> DirectorConfig {
    let mut config = DirectorConfig::default();
    config.clock.poll_interval_ms = 20;
    config.clock.retry = RetryConfig {
        max_attempts: 2,
        initial_backoff_ms: 1,
        max_backoff_ms: 2,
        attempt_timeout_ms: 50,
    };
    config.clock.max_loading_secs = 1;
    config.runtime.focus_poll_ms = 5;
    config.runtime.panel_poll_ms = 5;
    config.runtime.aux_poll_ms = 5;
    config.runtime.stats_every_secs = 2;
    config.runtime.command_retry = RetryConfig {
        max_attempts: 1,
        initial_backoff_ms: 1,
        max_backoff_ms: 1,
        attempt_timeout_ms: 50,
    };
    config.runtime.loop_join_timeout_ms = 200;
    config
}

/// Quiet match with `seats` participants and optional hero deaths
/// `(victim, second, killer)`
pub fn quiet_match(duration_secs: MatchSecond, seats: usize, deaths: &[(Seat, MatchSecond, Option<Seat>)]) -> MatchTimeline {
    let per_team = (seats + 1) / 2;
    let units = (0..seats)
        .map(|seat| {
            let mut unit = Unit::hero(seat as u32 + 1, seat, 0);
            if let Some((_, at, killer)) = deaths.iter().find(|(victim, _, _)| *victim == seat) {
                unit.died_at = Some(*at);
                unit.killer = *killer;
            }
            unit
        })
        .collect();

    MatchTimeline {
        duration_secs,
        map: MapInfo::default(),
        participants: (0..seats)
            .map(|seat| Participant {
                seat,
                id: format!("player-{}", seat),
                name: format!("Player {}", seat),
                hero: format!("Hero {}", seat),
                team: if seat < per_team { 0 } else { 1 },
            })
            .collect(),
        units,
        team_events: Vec::new(),
        input_events: Vec::new(),
    }
}
