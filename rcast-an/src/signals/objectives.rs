//! Team-level event streams

use rcast_common::match_data::{CampKind, MatchTimeline, Seat, TeamEventKind, TeamId};
use rcast_common::MatchSecond;

/// Objective capture or tracker event naming a participant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectiveEvent {
    pub second: MatchSecond,
    pub team: TeamId,
    pub participant: Seat,
    /// Tracker fire rather than a capture
    pub tracked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CampCapture {
    pub second: MatchSecond,
    pub team: TeamId,
    pub camp: CampKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TalentPick {
    pub second: MatchSecond,
    pub team: TeamId,
    pub tier: u8,
}

fn in_window(at: MatchSecond, start: MatchSecond, end: MatchSecond) -> bool {
    at >= start && at <= end
}

/// Objective events in `[start, end]`; captures without a credited
/// participant are dropped since they have nobody to focus.
pub fn objective_events(
    timeline: &MatchTimeline,
    start: MatchSecond,
    end: MatchSecond,
) -> Vec<ObjectiveEvent> {
    timeline
        .team_events
        .iter()
        .filter(|e| in_window(e.at, start, end))
        .filter_map(|e| match e.kind {
            TeamEventKind::ObjectiveCaptured { participant } => Some(ObjectiveEvent {
                second: e.at,
                team: e.team,
                participant: participant?,
                tracked: false,
            }),
            TeamEventKind::ObjectiveTracked { participant, .. } => Some(ObjectiveEvent {
                second: e.at,
                team: e.team,
                participant,
                tracked: true,
            }),
            _ => None,
        })
        .collect()
}

/// Camp captures in `[start, end]`
pub fn camp_captures(timeline: &MatchTimeline, start: MatchSecond, end: MatchSecond) -> Vec<CampCapture> {
    timeline
        .team_events
        .iter()
        .filter(|e| in_window(e.at, start, end))
        .filter_map(|e| match e.kind {
            TeamEventKind::CampCaptured { camp } => Some(CampCapture {
                second: e.at,
                team: e.team,
                camp,
            }),
            _ => None,
        })
        .collect()
}

/// Talent tiers reached in `[start, end]`
pub fn talent_picks(timeline: &MatchTimeline, start: MatchSecond, end: MatchSecond) -> Vec<TalentPick> {
    timeline
        .team_events
        .iter()
        .filter(|e| in_window(e.at, start, end))
        .filter_map(|e| match e.kind {
            TeamEventKind::TalentTierReached { tier } => Some(TalentPick {
                second: e.at,
                team: e.team,
                tier,
            }),
            _ => None,
        })
        .collect()
}
