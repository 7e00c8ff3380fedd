//! Timer-backed event throttle, independent of any particular event source.

use std::time::Duration;

use bevy::prelude::*;

/// Coalesces a burst of events into at most one firing per window.
///
/// [`request`](Self::request) arms the throttle if it is idle; while armed,
/// further requests are absorbed, so at most one firing is ever pending per
/// category. [`tick`](Self::tick) advances an armed throttle and reports
/// `true` exactly once when the window elapses, after which the throttle is
/// idle again and the next request re-arms it.
#[derive(Debug, Clone)]
pub struct Throttle {
    timer: Timer,
    armed: bool,
}

impl Throttle {
    pub fn new(window: Duration) -> Self {
        Self {
            timer: Timer::new(window, TimerMode::Once),
            armed: false,
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// Arm if idle; requests while armed are coalesced into the pending firing.
    pub fn request(&mut self) {
        if !self.armed {
            self.timer.reset();
            self.armed = true;
        }
    }

    /// Whether a firing is currently pending.
    pub fn pending(&self) -> bool {
        self.armed
    }

    /// Advance an armed throttle; returns `true` exactly once per armed
    /// period. An idle throttle never fires, whatever the delta.
    pub fn tick(&mut self, delta: Duration) -> bool {
        if !self.armed {
            return false;
        }
        self.timer.tick(delta);
        if self.timer.finished() {
            self.armed = false;
            return true;
        }
        false
    }
}
