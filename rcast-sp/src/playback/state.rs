//! Playback state classifier
//!
//! Turns successive clock readings into a [`PlaybackState`]. Nothing else
//! in the runtime sets the state.

use rcast_common::events::PlaybackState;
use rcast_common::MatchSecond;

#[derive(Debug, Clone)]
pub struct PlaybackClassifier {
    duration: MatchSecond,
    state: PlaybackState,
    last: Option<MatchSecond>,
}

impl PlaybackClassifier {
    pub fn new(duration: MatchSecond) -> Self {
        Self {
            duration,
            state: PlaybackState::Loading,
            last: None,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Last accepted reading
    pub fn last_reading(&self) -> Option<MatchSecond> {
        self.last
    }

    /// Classify a fresh reading against the previous one.
    ///
    /// `EndDetected` is terminal and ignores further readings.
    pub fn observe(&mut self, reading: MatchSecond) -> PlaybackState {
        if self.state == PlaybackState::EndDetected {
            return self.state;
        }

        self.state = if reading == 0 {
            PlaybackState::Running
        } else if reading >= self.duration {
            PlaybackState::EndDetected
        } else {
            match self.last {
                Some(prev) if reading <= prev => PlaybackState::Paused,
                _ => PlaybackState::Running,
            }
        };
        self.last = Some(reading);
        self.state
    }

    /// Retry budget exhausted without a reading
    pub fn clock_lost(&mut self) -> PlaybackState {
        if self.state.is_synchronized() {
            self.state = PlaybackState::EndDetected;
        }
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_sequence() {
        let mut classifier = PlaybackClassifier::new(120);
        let states: Vec<PlaybackState> = [0, 5, 5, 10, 120]
            .into_iter()
            .map(|r| classifier.observe(r))
            .collect();
        assert_eq!(
            states,
            vec![
                PlaybackState::Running,
                PlaybackState::Running,
                PlaybackState::Paused,
                PlaybackState::Running,
                PlaybackState::EndDetected,
            ]
        );
    }

    #[test]
    fn test_step_back_is_paused() {
        let mut classifier = PlaybackClassifier::new(120);
        classifier.observe(30);
        assert_eq!(classifier.observe(28), PlaybackState::Paused);
        assert_eq!(classifier.last_reading(), Some(28));
    }

    #[test]
    fn test_end_is_terminal() {
        let mut classifier = PlaybackClassifier::new(60);
        classifier.observe(60);
        assert_eq!(classifier.observe(10), PlaybackState::EndDetected);
        assert_eq!(classifier.clock_lost(), PlaybackState::EndDetected);
    }

    #[test]
    fn test_clock_lost_before_sync_stays_loading() {
        let mut classifier = PlaybackClassifier::new(60);
        assert_eq!(classifier.clock_lost(), PlaybackState::Loading);
    }

    #[test]
    fn test_clock_lost_while_running_ends() {
        let mut classifier = PlaybackClassifier::new(60);
        classifier.observe(0);
        classifier.observe(3);
        assert_eq!(classifier.clock_lost(), PlaybackState::EndDetected);
    }

    #[test]
    fn test_restart_at_zero_runs() {
        let mut classifier = PlaybackClassifier::new(60);
        classifier.observe(40);
        assert_eq!(classifier.observe(0), PlaybackState::Running);
    }
}
