//! Playback and overlay type definitions

use serde::{Deserialize, Serialize};

/// Playback state of the spectated client, derived from successive clock readings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub enum PlaybackState {
    /// No clock seen yet (client still loading the replay)
    #[default]
    Loading,
    /// Clock advancing
    Running,
    /// Clock stalled or stepped back
    Paused,
    /// Match over, or clock lost after being synchronized (terminal)
    EndDetected,
}

impl PlaybackState {
    /// Whether the state carries a trustworthy elapsed time
    pub fn is_synchronized(&self) -> bool {
        matches!(self, PlaybackState::Running | PlaybackState::Paused)
    }
}

impl std::fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaybackState::Loading => write!(f, "Loading"),
            PlaybackState::Running => write!(f, "Running"),
            PlaybackState::Paused => write!(f, "Paused"),
            PlaybackState::EndDetected => write!(f, "EndDetected"),
        }
    }
}

/// Statistics overlay shown by the spectated client
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "PascalCase")]
pub enum PanelKind {
    /// No overlay
    #[default]
    None,
    Talents,
    KillsDeathsAssists,
    DeathDamageRole,
    Experience,
    CarriedObjectives,
    ActionsPerMinute,
    CrowdControl,
}

impl PanelKind {
    /// Default rotation order
    pub const ROTATION: [PanelKind; 7] = [
        PanelKind::Talents,
        PanelKind::KillsDeathsAssists,
        PanelKind::DeathDamageRole,
        PanelKind::Experience,
        PanelKind::CarriedObjectives,
        PanelKind::ActionsPerMinute,
        PanelKind::CrowdControl,
    ];

    /// High priority panels are never interrupted by a low priority forced panel
    pub fn is_high_priority(&self) -> bool {
        matches!(self, PanelKind::Talents)
    }
}

impl std::fmt::Display for PanelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PanelKind::None => "None",
            PanelKind::Talents => "Talents",
            PanelKind::KillsDeathsAssists => "KillsDeathsAssists",
            PanelKind::DeathDamageRole => "DeathDamageRole",
            PanelKind::Experience => "Experience",
            PanelKind::CarriedObjectives => "CarriedObjectives",
            PanelKind::ActionsPerMinute => "ActionsPerMinute",
            PanelKind::CrowdControl => "CrowdControl",
        };
        write!(f, "{}", name)
    }
}
