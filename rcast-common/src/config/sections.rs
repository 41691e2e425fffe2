//! Configuration sections and their compiled defaults
//!
//! Intervals are milliseconds; match-time quantities are whole seconds;
//! distances are map units.

use serde::{Deserialize, Serialize};

use crate::events::PanelKind;

/// Calculator score weights per family
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightsConfig {
    /// Map objective captured / objective tracker / core or objective unit destroyed
    pub objective: f64,
    /// Structure destroyed
    pub structure: f64,
    pub boss_camp: f64,
    pub regular_camp: f64,
    /// Single hero kill
    pub kill: f64,
    /// Extra fraction of `kill` per streak level above one
    pub multi_kill_step: f64,
    pub death: f64,
    /// Multiplier applied to `death` for the killer's candidate
    pub killer_bias: f64,
    pub near_enemy_core: f64,
    pub near_own_core: f64,
    pub near_enemy_hero: f64,
    pub near_objective: f64,
    pub taunt: f64,
    /// Seconds each seat holds the idle focus when nothing else scores
    pub idle_rotation_secs: u32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            objective: 80.0,
            structure: 60.0,
            boss_camp: 70.0,
            regular_camp: 45.0,
            kill: 50.0,
            multi_kill_step: 0.25,
            death: 40.0,
            killer_bias: 1.1,
            near_enemy_core: 20.0,
            near_own_core: 15.0,
            near_enemy_hero: 10.0,
            near_objective: 12.0,
            taunt: 5.0,
            idle_rotation_secs: 15,
        }
    }
}

/// Trailing window lengths (seconds) for each kill-streak level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KillStreakConfig {
    pub single_secs: u32,
    pub multi_secs: u32,
    pub triple_secs: u32,
    pub quad_secs: u32,
    pub penta_secs: u32,
}

impl KillStreakConfig {
    /// Window for streak level 1..=5
    pub fn window_for_level(&self, level: u32) -> u32 {
        match level {
            0 | 1 => self.single_secs,
            2 => self.multi_secs,
            3 => self.triple_secs,
            4 => self.quad_secs,
            _ => self.penta_secs,
        }
    }
}

impl Default for KillStreakConfig {
    fn default() -> Self {
        Self {
            single_secs: 0,
            multi_secs: 12,
            triple_secs: 20,
            quad_secs: 28,
            penta_secs: 36,
        }
    }
}

/// Proximity thresholds (map units)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProximityConfig {
    pub own_core: f64,
    pub enemy_core: f64,
    pub enemy_hero: f64,
    pub objective: f64,
}

impl Default for ProximityConfig {
    fn default() -> Self {
        Self {
            own_core: 15.0,
            enemy_core: 20.0,
            enemy_hero: 8.0,
            objective: 10.0,
        }
    }
}

/// Death/kill context windows for temporal smoothing (seconds)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    /// Lead-in seconds before a death
    pub past_context_secs: u32,
    /// Hold seconds after a death
    pub present_context_secs: u32,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            past_context_secs: 5,
            present_context_secs: 3,
        }
    }
}

/// Taunt/emote detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TauntConfig {
    /// Identical commands within one second needed to count as a taunt
    pub min_repeats: u32,
    /// Ability names that are flavor-worthy on their own
    pub flavor_abilities: Vec<String>,
}

impl Default for TauntConfig {
    fn default() -> Self {
        Self {
            min_repeats: 4,
            flavor_abilities: vec!["Hearthstone".to_string(), "Backstep".to_string()],
        }
    }
}

/// Camp capture correlation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampConfig {
    /// Trailing seconds in which a mercenary death must precede the capture
    pub correlation_secs: u32,
}

impl Default for CampConfig {
    fn default() -> Self {
        Self { correlation_secs: 10 }
    }
}

/// Panel rotation timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Seconds a panel stays visible
    pub dwell_secs: u32,
    /// Seconds with no panel between rotation steps
    pub hidden_secs: u32,
    pub rotation: Vec<PanelKind>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            dwell_secs: 10,
            hidden_secs: 20,
            rotation: PanelKind::ROTATION.to_vec(),
        }
    }
}

/// Bounded retry with capped exponential backoff
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
    /// Upper bound on a single attempt; an attempt past it counts as failed
    pub attempt_timeout_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_backoff_ms: 200,
            max_backoff_ms: 2000,
            attempt_timeout_ms: 2000,
        }
    }
}

/// Clock polling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    pub poll_interval_ms: u64,
    pub retry: RetryConfig,
    /// A reading further behind the previous one than this is implausible
    pub max_backward_jump_secs: u32,
    /// Give up on a session whose clock never appears
    pub max_loading_secs: u64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 1000,
            retry: RetryConfig::default(),
            max_backward_jump_secs: 30,
            max_loading_secs: 300,
        }
    }
}

/// Runtime loop cadences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub focus_poll_ms: u64,
    pub panel_poll_ms: u64,
    pub aux_poll_ms: u64,
    /// Seconds of match time between stat snapshots
    pub stats_every_secs: u32,
    pub command_retry: RetryConfig,
    /// Event bus buffer per subscriber
    pub event_capacity: usize,
    /// How long a session waits for its loops to stop before aborting them
    pub loop_join_timeout_ms: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            focus_poll_ms: 500,
            panel_poll_ms: 500,
            aux_poll_ms: 1000,
            stats_every_secs: 30,
            command_retry: RetryConfig {
                max_attempts: 3,
                initial_backoff_ms: 50,
                max_backoff_ms: 500,
                attempt_timeout_ms: 1000,
            },
            event_capacity: 256,
            loop_join_timeout_ms: 2000,
        }
    }
}

/// Logging options (RUST_LOG overrides `level`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "rcast_sp=info,rcast_an=info,rcast_common=info".to_string(),
        }
    }
}
