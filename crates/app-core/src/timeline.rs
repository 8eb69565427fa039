//! Virtual clock for driving the sequencer without wall-clock delays.
//!
//! The timeline applies `Schedule`/`Cancel` cues to its own queue and, when
//! advanced, fires due timers in order of due time (ties by scheduling order).
//! Firing a timer may schedule more, which are picked up in the same advance.

use crate::dialogue::{Cue, DialogueSequencer, TimerId};
use std::time::Duration;

/// Anything that reacts to fired timers by emitting more cues.
pub trait TimerTarget {
    fn on_timer(&mut self, timer: TimerId, out: &mut Vec<Cue>);
}

impl TimerTarget for DialogueSequencer {
    fn on_timer(&mut self, timer: TimerId, out: &mut Vec<Cue>) {
        DialogueSequencer::on_timer(self, timer, out)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Timeline {
    now: Duration,
    queue: Vec<(Duration, TimerId)>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.queue.iter().map(|(due, _)| *due).min()
    }

    /// Apply the timer cues in `cues`, ignoring everything else.
    pub fn apply(&mut self, cues: &[Cue]) {
        for cue in cues {
            match cue {
                Cue::Schedule { timer, delay } => self.queue.push((self.now + *delay, *timer)),
                Cue::Cancel(timer) => self.queue.retain(|(_, t)| t != timer),
                _ => {}
            }
        }
    }

    /// Run `f` against `out` and apply whatever timer cues it appended.
    pub fn drive(&mut self, out: &mut Vec<Cue>, f: impl FnOnce(&mut Vec<Cue>)) {
        let from = out.len();
        f(out);
        self.apply(&out[from..]);
    }

    fn pop_due(&mut self, until: Duration) -> Option<(Duration, TimerId)> {
        let idx = self
            .queue
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.0 <= until)
            .min_by_key(|(_, entry)| **entry)
            .map(|(i, _)| i)?;
        Some(self.queue.remove(idx))
    }

    /// Move time forward by `span`, firing every timer that comes due.
    pub fn advance_by<T: TimerTarget>(&mut self, span: Duration, target: &mut T, out: &mut Vec<Cue>) {
        let until = self.now + span;
        while let Some((due, timer)) = self.pop_due(until) {
            self.now = due;
            self.drive(out, |out| target.on_timer(timer, out));
        }
        self.now = until;
    }

    /// Fire timers until none remain, giving up after `limit` of virtual time.
    /// Returns the time spent.
    pub fn settle<T: TimerTarget>(&mut self, limit: Duration, target: &mut T, out: &mut Vec<Cue>) -> Duration {
        let start = self.now;
        let until = start + limit;
        while let Some((due, timer)) = self.pop_due(until) {
            self.now = due;
            self.drive(out, |out| target.on_timer(timer, out));
        }
        self.now - start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder(Vec<TimerId>);

    impl TimerTarget for Recorder {
        fn on_timer(&mut self, timer: TimerId, _out: &mut Vec<Cue>) {
            self.0.push(timer);
        }
    }

    #[test]
    fn fires_in_due_order_and_honours_cancel() {
        let mut seq = DialogueSequencer::default();
        let mut out = Vec::new();
        let mut tl = Timeline::new();
        tl.drive(&mut out, |out| seq.start(out));
        assert_eq!(tl.pending(), 1);
        assert_eq!(tl.next_due(), Some(crate::constants::TITLE_HOLD));

        let mut rec = Recorder(Vec::new());
        tl.advance_by(Duration::from_millis(100), &mut rec, &mut out);
        assert!(rec.0.is_empty());
        assert_eq!(tl.now(), Duration::from_millis(100));

        let id = seq.pending_timer().unwrap();
        tl.apply(&[Cue::Cancel(id)]);
        assert_eq!(tl.pending(), 0);
    }
}
