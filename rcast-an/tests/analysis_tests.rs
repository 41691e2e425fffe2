//! End-to-end properties of the offline analysis pass

mod helpers;

use std::collections::BTreeSet;

use helpers::{eventful_match, MatchBuilder};
use rcast_an::focus::{smooth, smooth_decisions};
use rcast_an::{analyze, CalculatorSet, FocusAggregator};
use rcast_common::config::SmoothingConfig;
use rcast_common::events::{PanelKind, SourceTag};
use rcast_common::DirectorConfig;

#[test]
fn test_every_second_has_exactly_one_decision() {
    let config = DirectorConfig::default();
    for timeline in [eventful_match(), MatchBuilder::new(45, 4).build()] {
        let analysis = analyze(&timeline, &config).unwrap();
        assert_eq!(analysis.focus.len(), timeline.duration_secs as usize);
        for (second, decision) in analysis.focus.iter().enumerate() {
            assert_eq!(decision.second as usize, second);
            assert_eq!(decision.slot, decision.participant);
        }
    }
}

#[test]
fn test_winner_scores_at_least_every_candidate() {
    let config = DirectorConfig::default();
    let timeline = eventful_match();
    let calculators = CalculatorSet::standard(&config);
    let focus = FocusAggregator::new(CalculatorSet::standard(&config))
        .aggregate(&timeline)
        .unwrap();

    for decision in focus.iter() {
        for candidate in calculators.candidates_at(decision.second, &timeline) {
            assert!(
                decision.score >= candidate.score,
                "second {}: {} < {} ({})",
                decision.second,
                decision.score,
                candidate.score,
                candidate.reason
            );
        }
    }
}

#[test]
fn test_analysis_is_deterministic() {
    let config = DirectorConfig::default();
    let timeline = eventful_match();

    let first = analyze(&timeline, &config).unwrap();
    let second = analyze(&timeline, &config).unwrap();

    let a = serde_json::to_string(&first.report(timeline.duration_secs)).unwrap();
    let b = serde_json::to_string(&second.report(timeline.duration_secs)).unwrap();
    assert_eq!(a, b);
    assert_eq!(first, second);
}

#[test]
fn test_smoothing_is_idempotent() {
    let config = DirectorConfig::default();
    let analysis = analyze(&eventful_match(), &config).unwrap();

    let mut decisions = analysis.focus.decisions().to_vec();
    let changed = smooth_decisions(&mut decisions, &config.smoothing, &mut BTreeSet::new());
    assert_eq!(changed, 0);
    assert_eq!(decisions.as_slice(), analysis.focus.decisions());

    let mut again = analysis.focus.clone();
    assert_eq!(smooth(&mut again, &config.smoothing), 0);
}

#[test]
fn test_smoothing_never_lowers_a_score() {
    let config = DirectorConfig::default();
    let raw = FocusAggregator::new(CalculatorSet::standard(&config))
        .aggregate(&eventful_match())
        .unwrap();
    let mut smoothed = raw.clone();
    smooth(&mut smoothed, &config.smoothing);

    for (before, after) in raw.iter().zip(smoothed.iter()) {
        assert!(after.score >= before.score, "second {}", before.second);
    }
}

#[test]
fn test_single_kill_lead_in_and_hold() {
    let mut config = DirectorConfig::default();
    config.smoothing = SmoothingConfig {
        past_context_secs: 3,
        present_context_secs: 2,
    };
    let timeline = MatchBuilder::new(120, 10).death(2, 40, Some(5)).build();

    let analysis = analyze(&timeline, &config).unwrap();
    for second in 37..=42 {
        let decision = analysis.focus.get(second).unwrap();
        assert_eq!(decision.participant, 5, "second {}", second);
        assert_eq!(decision.source, SourceTag::Kill, "second {}", second);
        assert_eq!(decision.unit, Some(MatchBuilder::hero_of(2)));
    }
    assert_eq!(analysis.focus.get(36).unwrap().source, SourceTag::Idle);
    assert_eq!(analysis.focus.get(43).unwrap().source, SourceTag::Idle);
}

#[test]
fn test_eventful_match_decisions() {
    let config = DirectorConfig::default();
    let timeline = eventful_match();
    let analysis = analyze(&timeline, &config).unwrap();
    let focus = &analysis.focus;

    // Seat 5's second kill inside the multi-kill window outranks seat 1's kill
    let at_44 = focus.get(44).unwrap();
    assert_eq!(at_44.participant, 5);
    assert_eq!(at_44.reason, "double_kill");

    // Unattributed death goes to the victim
    let at_90 = focus.get(90).unwrap();
    assert_eq!(at_90.source, SourceTag::Death);
    assert_eq!(at_90.participant, 8);

    let at_150 = focus.get(150).unwrap();
    assert_eq!(at_150.source, SourceTag::Objective);
    assert_eq!(at_150.participant, 0);

    let at_200 = focus.get(200).unwrap();
    assert_eq!(at_200.source, SourceTag::Camp);
    assert_eq!(at_200.participant, 6);

    // Regular capture without a mercenary kill: nothing but proximity
    assert_eq!(focus.get(230).unwrap().source, SourceTag::Proximity);

    assert_eq!(focus.get(250).unwrap().reason, "objective_tracked");

    // Self-inflicted death at 120 does not produce combat focus
    assert_ne!(focus.get(120).unwrap().source, SourceTag::Death);
    assert_ne!(focus.get(120).unwrap().source, SourceTag::Kill);
}

#[test]
fn test_panel_timeline_from_match() {
    let analysis = analyze(&eventful_match(), &DirectorConfig::default()).unwrap();
    let forced: Vec<(u32, PanelKind)> = analysis.panels.iter().collect();
    assert_eq!(
        forced,
        vec![
            (40, PanelKind::KillsDeathsAssists),
            (44, PanelKind::KillsDeathsAssists),
            (60, PanelKind::Talents),
            (61, PanelKind::Talents),
        ]
    );
}

#[test]
fn test_match_without_participants_rejected() {
    let mut timeline = MatchBuilder::new(30, 2).build();
    timeline.participants.clear();
    timeline.units.clear();
    assert!(analyze(&timeline, &DirectorConfig::default()).is_err());
}
