//! Scroll-triggered metric counters.
//!
//! Each counter is watched until it first crosses the visibility threshold,
//! then animates from 0 to its target over a fixed duration and is never
//! watched again.

use crate::models::Metric;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CounterPhase {
    Observed,
    Running { started_at: Duration },
    Done,
}

#[derive(Debug, Clone)]
pub struct Counter {
    pub id: String,
    pub target: u64,
    pub display: u64,
    pub phase: CounterPhase,
}

/// One viewport report for an observed element.
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection {
    pub id: String,
    pub ratio: f64,
}

impl Intersection {
    pub fn new(id: impl Into<String>, ratio: f64) -> Self {
        Intersection {
            id: id.into(),
            ratio,
        }
    }
}

/// `floor(progress * target)` with progress clamped to `[0, 1]`.
pub fn interpolate(target: u64, elapsed: Duration, duration: Duration) -> u64 {
    if duration.is_zero() || elapsed >= duration {
        return target;
    }
    let progress = elapsed.as_secs_f64() / duration.as_secs_f64();
    (progress * target as f64).floor() as u64
}

#[derive(Debug, Clone)]
pub struct CounterBoard {
    counters: Vec<Counter>,
    duration: Duration,
    threshold: f64,
}

impl CounterBoard {
    pub fn new(metrics: &[Metric], duration: Duration, threshold: f64) -> Self {
        let counters = metrics
            .iter()
            .map(|metric| Counter {
                id: metric.id.to_string(),
                target: metric.target,
                display: 0,
                phase: CounterPhase::Observed,
            })
            .collect();
        CounterBoard {
            counters,
            duration,
            threshold,
        }
    }

    pub fn counters(&self) -> &[Counter] {
        &self.counters
    }

    pub fn display(&self, id: &str) -> Option<u64> {
        self.counters.iter().find(|c| c.id == id).map(|c| c.display)
    }

    pub fn is_observing(&self, id: &str) -> bool {
        self.counters
            .iter()
            .any(|c| c.id == id && c.phase == CounterPhase::Observed)
    }

    /// True while any counter still needs frames.
    pub fn is_animating(&self) -> bool {
        self.counters
            .iter()
            .any(|c| matches!(c.phase, CounterPhase::Running { .. }))
    }

    /// Starts every observed counter reported at or above the threshold.
    /// Returns the ids that started.
    pub fn on_intersection(&mut self, entries: &[Intersection], now: Duration) -> Vec<String> {
        let mut started = Vec::new();
        for entry in entries {
            if entry.ratio < self.threshold {
                continue;
            }
            let Some(counter) = self
                .counters
                .iter_mut()
                .find(|c| c.id == entry.id && c.phase == CounterPhase::Observed)
            else {
                continue;
            };
            counter.phase = CounterPhase::Running { started_at: now };
            log::debug!("Counter '{}' entered view, animating to {}", counter.id, counter.target);
            started.push(counter.id.clone());
        }
        started
    }

    /// Advances every running counter to `now`. Returns `(id, value)` for each
    /// counter whose display changed.
    pub fn on_frame(&mut self, now: Duration) -> Vec<(String, u64)> {
        let mut changed = Vec::new();
        for counter in &mut self.counters {
            let CounterPhase::Running { started_at } = counter.phase else {
                continue;
            };
            let elapsed = now.saturating_sub(started_at);
            let value = interpolate(counter.target, elapsed, self.duration);
            if elapsed >= self.duration {
                counter.phase = CounterPhase::Done;
            }
            if value != counter.display {
                counter.display = value;
                changed.push((counter.id.clone(), value));
            }
        }
        changed
    }
}
