use crate::timeline::{TaskToken, Timeline};
use std::time::Duration;

/// Testimonial carousel state.
///
/// `active` always lies in `[0, len)` when `len > 0`. The auto-advance timer
/// is only live while `timer` holds its token.
#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    active: usize,
    interval: Duration,
    timer: Option<TaskToken>,
}

impl Carousel {
    /// `interval` is raised to at least one millisecond.
    pub fn new(len: usize, interval: Duration) -> Self {
        Carousel {
            len,
            active: 0,
            interval: interval.max(Duration::from_millis(1)),
            timer: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.active = (self.active + 1) % self.len;
    }

    pub fn prev(&mut self) {
        if self.len == 0 {
            return;
        }
        self.active = (self.active + self.len - 1) % self.len;
    }

    /// Dot navigation. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.active = index;
        true
    }

    pub fn start(&mut self, timeline: &mut Timeline) {
        self.stop(timeline);
        if self.len > 1 {
            self.timer = Some(timeline.schedule(self.interval));
        }
    }

    pub fn stop(&mut self, timeline: &mut Timeline) {
        if let Some(token) = self.timer.take() {
            timeline.cancel(token);
        }
    }

    /// Mouse entered the carousel.
    pub fn pause(&mut self, timeline: &mut Timeline) {
        self.stop(timeline);
    }

    /// Mouse left the carousel; the interval starts over.
    pub fn resume(&mut self, timeline: &mut Timeline) {
        self.start(timeline);
    }

    /// Handles a timer firing. Returns true when the slide changed.
    pub fn on_timer(&mut self, token: TaskToken, timeline: &mut Timeline) -> bool {
        if self.timer != Some(token) {
            return false;
        }
        self.next();
        self.timer = Some(timeline.schedule(self.interval));
        true
    }
}
