//! Virtual time for widget timers.
//!
//! Timers are identified by a [`TaskToken`]. Whoever schedules a task keeps its
//! token and ignores firings for tokens it no longer holds, so cancelling is
//! just dropping the token (plus [`Timeline::cancel`] to keep the queue small).

use std::collections::BTreeMap;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskToken(u64);

#[derive(Debug, Default)]
pub struct Timeline {
    now: Duration,
    next_id: u64,
    pending: BTreeMap<(Duration, u64), TaskToken>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn schedule(&mut self, delay: Duration) -> TaskToken {
        let id = self.next_id;
        self.next_id += 1;
        let token = TaskToken(id);
        self.pending.insert((self.now + delay, id), token);
        token
    }

    pub fn cancel(&mut self, token: TaskToken) -> bool {
        let key = self
            .pending
            .iter()
            .find(|(_, pending)| **pending == token)
            .map(|(key, _)| *key);
        match key {
            Some(key) => self.pending.remove(&key).is_some(),
            None => false,
        }
    }

    pub fn is_pending(&self, token: TaskToken) -> bool {
        self.pending.values().any(|pending| *pending == token)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Moves time forward to `target`, firing every task due on the way in
    /// due order. The callback may schedule or cancel more tasks; anything it
    /// schedules at or before `target` fires within the same call.
    pub fn run_until<F>(&mut self, target: Duration, mut on_fire: F)
    where
        F: FnMut(&mut Timeline, TaskToken),
    {
        loop {
            let Some((due, id)) = self.pending.keys().next().copied() else {
                break;
            };
            if due > target {
                break;
            }
            if let Some(token) = self.pending.remove(&(due, id)) {
                self.now = self.now.max(due);
                on_fire(self, token);
            }
        }
        self.now = self.now.max(target);
    }

    pub fn advance<F>(&mut self, by: Duration, on_fire: F)
    where
        F: FnMut(&mut Timeline, TaskToken),
    {
        let target = self.now + by;
        self.run_until(target, on_fire);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn fires_in_due_order_and_sets_now() {
        let mut timeline = Timeline::new();
        let late = timeline.schedule(ms(300));
        let early = timeline.schedule(ms(100));

        let mut fired = Vec::new();
        timeline.run_until(ms(500), |tl, token| fired.push((token, tl.now())));

        assert_eq!(fired, vec![(early, ms(100)), (late, ms(300))]);
        assert_eq!(timeline.now(), ms(500));
        assert_eq!(timeline.pending_count(), 0);
    }

    #[test]
    fn cancelled_tasks_never_fire() {
        let mut timeline = Timeline::new();
        let token = timeline.schedule(ms(50));
        assert!(timeline.cancel(token));
        assert!(!timeline.cancel(token));

        let mut fired = 0;
        timeline.advance(ms(100), |_, _| fired += 1);
        assert_eq!(fired, 0);
    }

    #[test]
    fn rescheduling_inside_callback_fires_repeatedly() {
        let mut timeline = Timeline::new();
        timeline.schedule(ms(10));

        let mut fired = 0;
        timeline.advance(ms(35), |tl, _| {
            fired += 1;
            tl.schedule(ms(10));
        });

        assert_eq!(fired, 3);
        assert_eq!(timeline.pending_count(), 1);
    }

    #[test]
    fn tasks_beyond_target_stay_pending() {
        let mut timeline = Timeline::new();
        let token = timeline.schedule(ms(200));
        timeline.advance(ms(199), |_, _| {});
        assert!(timeline.is_pending(token));
    }
}
