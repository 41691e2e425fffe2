use rcast_common::events::SourceTag;
use rcast_common::{MatchSecond, MatchTimeline};

use super::{Candidate, FocusCalculator};

/// Zero-score fallback that walks the seats so quiet stretches still have
/// someone on camera.
pub struct IdleCalculator {
    rotation_secs: u32,
}

impl IdleCalculator {
    pub fn new(rotation_secs: u32) -> Self {
        Self {
            rotation_secs: rotation_secs.max(1),
        }
    }
}

impl FocusCalculator for IdleCalculator {
    fn source(&self) -> SourceTag {
        SourceTag::Idle
    }

    fn candidates(&self, second: MatchSecond, timeline: &MatchTimeline) -> Vec<Candidate> {
        let seats = timeline.participant_count();
        if seats == 0 {
            return Vec::new();
        }
        let seat = (second / self.rotation_secs) as usize % seats;
        vec![Candidate::new(SourceTag::Idle, seat, 0.0, "idle")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::match_with_units;

    #[test]
    fn test_rotates_through_seats() {
        let timeline = match_with_units(Vec::new());
        let calc = IdleCalculator::new(15);

        assert_eq!(calc.candidates(0, &timeline)[0].participant, 0);
        assert_eq!(calc.candidates(14, &timeline)[0].participant, 0);
        assert_eq!(calc.candidates(15, &timeline)[0].participant, 1);
        // Ten seats: wraps after 150 seconds
        assert_eq!(calc.candidates(150, &timeline)[0].participant, 0);
    }
}
