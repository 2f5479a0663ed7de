use bevy::prelude::*;

/// Which way a prop's glow is currently fading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FadeDirection {
    #[default]
    None,
    Out,
    In,
}

/// What a fade tick asks the glow and the mirrored light to show
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeStep {
    pub brightness: f32,
    pub light_enabled: bool,
}

/// Timed linear fade of a prop's glow
///
/// Fading in ramps brightness from 0 to `max_brightness` over `duration`
/// seconds. Fading out cuts the glow to 0 on the first tick and then just
/// waits out the duration.
#[derive(Component, Debug, Clone)]
pub struct FadeController {
    pub direction: FadeDirection,
    pub start_time: f64,
    pub duration: f32,
    pub max_brightness: f32,
}

impl FadeController {
    pub fn new(duration: f32, max_brightness: f32) -> Self {
        Self {
            direction: FadeDirection::None,
            start_time: 0.0,
            duration,
            max_brightness,
        }
    }

    pub fn begin_fade_in(&mut self, now: f64) {
        self.direction = FadeDirection::In;
        self.start_time = now;
    }

    pub fn begin_fade_out(&mut self, now: f64) {
        self.direction = FadeDirection::Out;
        self.start_time = now;
    }

    #[inline]
    pub fn is_fading(&self) -> bool {
        self.direction != FadeDirection::None
    }

    /// Fraction of the fade that has elapsed at `now`
    #[inline]
    pub fn progress(&self, now: f64) -> f32 {
        (now - self.start_time) as f32 / self.duration
    }

    /// Advances the fade to `now`.
    ///
    /// Returns `None` when nothing is fading. When the fade runs past its
    /// duration the direction resets and the settled state is returned one
    /// last time: full brightness for a fade in, dark for a fade out.
    pub fn tick(&mut self, now: f64) -> Option<FadeStep> {
        let progress = self.progress(now);
        let step = match self.direction {
            FadeDirection::None => return None,
            FadeDirection::In if progress > 1.0 => FadeStep {
                brightness: self.max_brightness,
                light_enabled: true,
            },
            FadeDirection::In => FadeStep {
                brightness: self.max_brightness * progress.max(0.0),
                light_enabled: true,
            },
            FadeDirection::Out => FadeStep {
                brightness: 0.0,
                light_enabled: false,
            },
        };

        if progress > 1.0 {
            self.direction = FadeDirection::None;
        }

        Some(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn idle_controller_does_nothing() {
        let mut fade = FadeController::new(2.0, 120.0);
        assert_eq!(fade.tick(10.0), None);
        assert_eq!(fade.direction, FadeDirection::None);
    }

    #[test]
    fn fade_in_is_linear_in_elapsed_time() {
        let mut fade = FadeController::new(2.0, 120.0);
        fade.begin_fade_in(3.0);

        for (now, expected) in [(3.0, 0.0), (3.5, 30.0), (4.0, 60.0), (4.8, 108.0), (5.0, 120.0)] {
            let step = fade.tick(now).unwrap();
            assert_relative_eq!(step.brightness, expected, epsilon = 1e-4);
            assert!(step.light_enabled);
            assert_eq!(fade.direction, FadeDirection::In);
        }
    }

    #[test]
    fn finished_fade_in_settles_at_max_brightness() {
        let mut fade = FadeController::new(2.0, 120.0);
        fade.begin_fade_in(0.0);
        fade.tick(1.95);

        let step = fade.tick(2.05).unwrap();
        assert_eq!(step.brightness, 120.0);
        assert!(step.light_enabled);
        assert_eq!(fade.direction, FadeDirection::None);

        // no further updates until the next fade begins
        assert_eq!(fade.tick(3.0), None);
    }

    #[test]
    fn fade_out_goes_dark_immediately() {
        let mut fade = FadeController::new(2.0, 120.0);
        fade.begin_fade_out(1.0);

        for now in [1.0, 1.1, 2.9] {
            let step = fade.tick(now).unwrap();
            assert_eq!(step.brightness, 0.0);
            assert!(!step.light_enabled);
        }
        assert_eq!(fade.direction, FadeDirection::Out);

        let last = fade.tick(3.2).unwrap();
        assert_eq!(last.brightness, 0.0);
        assert!(!last.light_enabled);
        assert!(!fade.is_fading());
    }

    #[test]
    fn new_fade_restarts_the_clock() {
        let mut fade = FadeController::new(2.0, 120.0);
        fade.begin_fade_out(0.0);
        fade.tick(0.5);

        fade.begin_fade_in(1.0);
        let step = fade.tick(1.5).unwrap();
        assert_relative_eq!(step.brightness, 30.0, epsilon = 1e-4);
        assert!(step.light_enabled);
    }
}
