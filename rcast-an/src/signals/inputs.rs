//! Taunt and flavor-ability detection from input events

use std::collections::BTreeMap;

use rcast_common::config::TauntConfig;
use rcast_common::match_data::{InputKind, MatchTimeline, Seat};
use rcast_common::MatchSecond;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TauntKind {
    /// The same command issued `count` times within one second
    RepeatedCommand { command: String, count: u32 },
    /// A cast of a configured flavor ability
    FlavorAbility { ability: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Taunt {
    pub second: MatchSecond,
    pub participant: Seat,
    pub kind: TauntKind,
}

impl Taunt {
    pub fn reason(&self) -> &'static str {
        match self.kind {
            TauntKind::RepeatedCommand { .. } => "repeated_command",
            TauntKind::FlavorAbility { .. } => "flavor_ability",
        }
    }
}

/// Taunts in `[start, end]`, ordered by second then participant
pub fn taunts(
    timeline: &MatchTimeline,
    start: MatchSecond,
    end: MatchSecond,
    config: &TauntConfig,
) -> Vec<Taunt> {
    let mut repeats: BTreeMap<(MatchSecond, Seat, &str), u32> = BTreeMap::new();
    let mut found = Vec::new();

    for event in timeline
        .input_events
        .iter()
        .filter(|e| e.at >= start && e.at <= end)
    {
        match &event.kind {
            InputKind::Command { command } => {
                *repeats
                    .entry((event.at, event.participant, command.as_str()))
                    .or_insert(0) += 1;
            }
            InputKind::AbilityCast { ability }
                if config.flavor_abilities.iter().any(|a| a == ability) =>
            {
                found.push(Taunt {
                    second: event.at,
                    participant: event.participant,
                    kind: TauntKind::FlavorAbility {
                        ability: ability.clone(),
                    },
                });
            }
            _ => {}
        }
    }

    found.extend(
        repeats
            .into_iter()
            .filter(|(_, count)| *count >= config.min_repeats)
            .map(|((second, participant, command), count)| Taunt {
                second,
                participant,
                kind: TauntKind::RepeatedCommand {
                    command: command.to_string(),
                    count,
                },
            }),
    );

    found.sort_by_key(|t| (t.second, t.participant));
    found
}
