//! Startup validation of director configuration

use std::collections::HashSet;

use super::{DirectorConfig, RetryConfig};
use crate::events::PanelKind;
use crate::{Error, Result};

fn check_weight(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::Config(format!(
            "weights.{}: value {} must be finite and non-negative",
            name, value
        )));
    }
    Ok(())
}

fn check_distance(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::Config(format!(
            "proximity.{}: value {} must be a positive distance",
            name, value
        )));
    }
    Ok(())
}

fn check_interval(name: &str, value: u64) -> Result<()> {
    if value == 0 {
        return Err(Error::Config(format!("{}: interval must be greater than 0", name)));
    }
    Ok(())
}

fn check_retry(name: &str, retry: &RetryConfig) -> Result<()> {
    if retry.max_attempts == 0 {
        return Err(Error::Config(format!("{}.max_attempts: must be at least 1", name)));
    }
    if retry.initial_backoff_ms > retry.max_backoff_ms {
        return Err(Error::Config(format!(
            "{}: initial_backoff_ms {} exceeds max_backoff_ms {}",
            name, retry.initial_backoff_ms, retry.max_backoff_ms
        )));
    }
    check_interval(&format!("{}.attempt_timeout_ms", name), retry.attempt_timeout_ms)
}

impl DirectorConfig {
    /// Reject invalid thresholds and weights, naming the first offending field
    pub fn validate(&self) -> Result<()> {
        let w = &self.weights;
        for (name, value) in [
            ("objective", w.objective),
            ("structure", w.structure),
            ("boss_camp", w.boss_camp),
            ("regular_camp", w.regular_camp),
            ("kill", w.kill),
            ("multi_kill_step", w.multi_kill_step),
            ("death", w.death),
            ("killer_bias", w.killer_bias),
            ("near_enemy_core", w.near_enemy_core),
            ("near_own_core", w.near_own_core),
            ("near_enemy_hero", w.near_enemy_hero),
            ("near_objective", w.near_objective),
            ("taunt", w.taunt),
        ] {
            check_weight(name, value)?;
        }
        if w.idle_rotation_secs == 0 {
            return Err(Error::Config(
                "weights.idle_rotation_secs: must be at least 1".to_string(),
            ));
        }

        let k = &self.kill_streak;
        let windows = [k.single_secs, k.multi_secs, k.triple_secs, k.quad_secs, k.penta_secs];
        if windows.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(Error::Config(format!(
                "kill_streak: windows must not decrease from single to penta (got {:?})",
                windows
            )));
        }

        let p = &self.proximity;
        check_distance("own_core", p.own_core)?;
        check_distance("enemy_core", p.enemy_core)?;
        check_distance("enemy_hero", p.enemy_hero)?;
        check_distance("objective", p.objective)?;

        if self.taunts.min_repeats < 2 {
            return Err(Error::Config(
                "taunts.min_repeats: must be at least 2 to mean 'repeated'".to_string(),
            ));
        }

        let panels = &self.panels;
        if panels.dwell_secs == 0 {
            return Err(Error::Config("panels.dwell_secs: must be at least 1".to_string()));
        }
        if panels.rotation.is_empty() {
            return Err(Error::Config("panels.rotation: must not be empty".to_string()));
        }
        if panels.rotation.contains(&PanelKind::None) {
            return Err(Error::Config(
                "panels.rotation: None is not a rotatable panel".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for panel in &panels.rotation {
            if !seen.insert(*panel) {
                return Err(Error::Config(format!(
                    "panels.rotation: {} listed more than once",
                    panel
                )));
            }
        }

        check_interval("clock.poll_interval_ms", self.clock.poll_interval_ms)?;
        check_retry("clock.retry", &self.clock.retry)?;
        if self.clock.max_loading_secs == 0 {
            return Err(Error::Config("clock.max_loading_secs: must be at least 1".to_string()));
        }

        let r = &self.runtime;
        check_interval("runtime.focus_poll_ms", r.focus_poll_ms)?;
        check_interval("runtime.panel_poll_ms", r.panel_poll_ms)?;
        check_interval("runtime.aux_poll_ms", r.aux_poll_ms)?;
        check_retry("runtime.command_retry", &r.command_retry)?;
        check_interval("runtime.loop_join_timeout_ms", r.loop_join_timeout_ms)?;
        if r.stats_every_secs == 0 {
            return Err(Error::Config("runtime.stats_every_secs: must be at least 1".to_string()));
        }
        if r.event_capacity == 0 {
            return Err(Error::Config("runtime.event_capacity: must be at least 1".to_string()));
        }

        Ok(())
    }
}
