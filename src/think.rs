use bevy::prelude::*;

/// Fixed-interval think schedule of a single prop
///
/// `due` is raised by [`schedule_thinks`] on the frames where the prop should
/// run its think logic, and stays lowered on every other frame.
#[derive(Component, Debug, Clone)]
pub struct Think {
    pub next_think: f64,
    pub interval: f64,
    due: bool,
}

impl Think {
    /// First think happens one interval after `now`
    pub fn starting_at(now: f64, interval: f64) -> Self {
        Self {
            next_think: now + interval,
            interval,
            due: false,
        }
    }

    #[inline]
    pub fn is_due(&self) -> bool {
        self.due
    }

    /// Raises `due` if the prop's next think time has arrived, and schedules
    /// the one after it
    pub fn poll(&mut self, now: f64) -> bool {
        self.due = now >= self.next_think;
        if self.due {
            self.next_think = now + self.interval;
        }
        self.due
    }
}

pub fn schedule_thinks(time: Res<Time>, mut thinkers: Query<&mut Think>) {
    let now = time.elapsed_secs_f64();
    for mut think in thinkers.iter_mut() {
        think.poll(now);
    }
}
