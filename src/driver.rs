use std::time::{Duration, Instant};

use tracing::{debug, trace};

/// What the driver needs from the window it animates.
pub trait RedrawHost {
    /// Redraw as soon as possible.
    fn request_redraw(&mut self);
    /// Redraw once `deadline` has passed.
    fn request_redraw_at(&mut self, deadline: Instant);
}

/// Whether the driver should keep ticking after the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Continue,
    Stop,
}

/// Start/stop flag plus a fixed tick period.
///
/// The driver never sleeps. Each tick re-arms the next redraw through the
/// host, and a stopped driver simply stops re-arming.
#[derive(Debug, Clone)]
pub struct Animator {
    running: bool,
    delay: Duration,
}

impl Animator {
    pub fn new(delay: Duration) -> Self {
        Self {
            running: false,
            delay,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start<H: RedrawHost + ?Sized>(&mut self, host: &mut H) {
        if self.running {
            return;
        }
        debug!("animation started");
        self.running = true;
        host.request_redraw();
    }

    pub fn stop(&mut self) {
        if self.running {
            debug!("animation stopped");
            self.running = false;
        }
    }

    /// Runs one tick if the driver is running and schedules the next frame.
    ///
    /// A frame is scheduled even when `tick` stops the driver, so the state it
    /// left behind gets drawn.
    pub fn animate<H, F>(&mut self, now: Instant, host: &mut H, tick: F)
    where
        H: RedrawHost + ?Sized,
        F: FnOnce() -> Tick,
    {
        if !self.running {
            return;
        }
        trace!("tick");
        if tick() == Tick::Stop {
            self.stop();
        }
        host.request_redraw_at(now + self.delay);
    }
}
