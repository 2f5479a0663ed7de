use bevy::prelude::*;

use crate::config::SequenceDurations;

/// Animation activities a light prop can be playing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Activity {
    #[default]
    Idle,
    Crouch,
    CrouchIdle,
    Stand,
}

impl Activity {
    /// Looping activities never finish on their own
    pub fn is_looping(&self) -> bool {
        matches!(self, Activity::Idle | Activity::CrouchIdle)
    }

    pub fn sequence_duration(&self, durations: &SequenceDurations) -> f32 {
        match self {
            Activity::Idle => durations.idle,
            Activity::Crouch => durations.crouch,
            Activity::CrouchIdle => durations.crouch_idle,
            Activity::Stand => durations.stand,
        }
    }
}

/// Tracks how far through its current activity a prop's model is
///
/// This only models sequence timing: `cycle` runs from 0 to 1 over the
/// activity's sequence duration, scaled by `playback_rate`.
#[derive(Component, Debug, Clone)]
pub struct ActivityClock {
    activity: Activity,
    pub cycle: f32,
    pub playback_rate: f32,
    last_advance: f64,
}

impl ActivityClock {
    pub fn new(activity: Activity, now: f64) -> Self {
        Self {
            activity,
            cycle: 0.0,
            playback_rate: 1.0,
            last_advance: now,
        }
    }

    pub fn with_playback_rate(mut self, playback_rate: f32) -> Self {
        self.playback_rate = playback_rate;
        self
    }

    pub fn with_cycle(mut self, cycle: f32) -> Self {
        self.cycle = cycle;
        self
    }

    #[inline]
    pub fn activity(&self) -> Activity {
        self.activity
    }

    /// Switches activity and restarts its sequence
    pub fn set_activity(&mut self, activity: Activity) {
        self.activity = activity;
        self.cycle = 0.0;
    }

    /// Moves the cycle forward by the time since the last advance
    pub fn advance(&mut self, now: f64, durations: &SequenceDurations) {
        let elapsed = (now - self.last_advance).max(0.0) as f32;
        self.last_advance = now;

        let duration = self.activity.sequence_duration(durations);
        if duration <= 0.0 {
            self.cycle = 1.0;
            return;
        }

        self.cycle += elapsed * self.playback_rate / duration;
        if self.activity.is_looping() {
            self.cycle = self.cycle.fract();
        } else {
            self.cycle = self.cycle.min(1.0);
        }
    }

    pub fn is_finished(&self) -> bool {
        !self.activity.is_looping() && self.cycle >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shot_activity_finishes_after_its_sequence() {
        let durations = SequenceDurations::default();
        let mut clock = ActivityClock::new(Activity::Idle, 0.0);
        clock.set_activity(Activity::Crouch);

        clock.advance(0.5, &durations);
        assert!(!clock.is_finished());

        clock.advance(1.0, &durations);
        assert!(clock.is_finished());
        assert_eq!(clock.cycle, 1.0);
    }

    #[test]
    fn playback_rate_scales_the_sequence() {
        let durations = SequenceDurations::default();
        let mut clock = ActivityClock::new(Activity::Stand, 0.0).with_playback_rate(0.5);

        clock.advance(1.0, &durations);
        assert!(!clock.is_finished());

        clock.advance(2.0, &durations);
        assert!(clock.is_finished());
    }

    #[test]
    fn looping_activity_wraps_and_never_finishes() {
        let durations = SequenceDurations::default();
        let mut clock = ActivityClock::new(Activity::Idle, 0.0).with_cycle(0.8);

        clock.advance(1.5, &durations);
        assert!(clock.cycle < 1.0);
        assert!((clock.cycle - 0.3).abs() < 1e-4);
        assert!(!clock.is_finished());
    }

    #[test]
    fn setting_an_activity_restarts_its_cycle() {
        let durations = SequenceDurations::default();
        let mut clock = ActivityClock::new(Activity::Crouch, 0.0);
        clock.advance(5.0, &durations);
        assert!(clock.is_finished());

        clock.set_activity(Activity::CrouchIdle);
        assert_eq!(clock.cycle, 0.0);
        assert!(!clock.is_finished());
    }
}
