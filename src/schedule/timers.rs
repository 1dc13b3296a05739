use crate::foundation::core::{Millis, PanelIndex};

/// Handle returned when a timer is scheduled; used to cancel it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

/// What a timer delivers when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerEvent {
    /// One-shot jump armed by the auto-advance latch.
    AutoAdvance {
        /// Panel to jump to.
        to: PanelIndex,
    },
    /// Periodic countdown refresh.
    CountdownTick,
}

/// A timer that came due.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fired {
    pub id: TimerId,
    pub due: Millis,
    pub event: TimerEvent,
}

#[derive(Clone, Debug)]
struct Entry {
    id: TimerId,
    due: Millis,
    period_ms: Option<u64>,
    event: TimerEvent,
}

/// Cancellable one-shot and periodic timers on the page's virtual clock.
///
/// Firing order is `(due, creation order)`, so simultaneous timers are delivered in the order
/// they were scheduled.
#[derive(Clone, Debug, Default)]
pub struct Timers {
    next_id: u64,
    entries: Vec<Entry>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire `event` once, `delay_ms` after `now`.
    pub fn once(&mut self, now: Millis, delay_ms: u64, event: TimerEvent) -> TimerId {
        self.push(now.after(delay_ms), None, event)
    }

    /// Fire `event` every `period_ms` (minimum 1) starting one period after `now`.
    pub fn every(&mut self, now: Millis, period_ms: u64, event: TimerEvent) -> TimerId {
        let period_ms = period_ms.max(1);
        self.push(now.after(period_ms), Some(period_ms), event)
    }

    /// Returns whether the timer was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        before != self.entries.len()
    }

    /// Drop every pending timer, returning how many were cancelled.
    pub fn cancel_all(&mut self) -> usize {
        let n = self.entries.len();
        self.entries.clear();
        n
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn next_due(&self) -> Option<Millis> {
        self.entries.iter().map(|e| e.due).min()
    }

    /// Remove and return the earliest timer due at or before `until`.
    ///
    /// A periodic timer that fell several periods behind `until` fires once, at its last missed
    /// boundary, and is rescheduled to the first boundary after `until`. One that cannot be
    /// rescheduled before the clock runs out is dropped.
    pub fn pop_due(&mut self, until: Millis) -> Option<Fired> {
        let (idx, _) = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= until)
            .min_by_key(|(_, e)| (e.due, e.id))?;

        let entry = &mut self.entries[idx];
        let mut fired = Fired {
            id: entry.id,
            due: entry.due,
            event: entry.event,
        };
        match entry.period_ms {
            Some(period) => {
                let missed = until.since(entry.due) / period;
                fired.due = Millis(entry.due.0 + missed * period);
                match fired.due.0.checked_add(period) {
                    Some(next) => entry.due = Millis(next),
                    None => {
                        self.entries.swap_remove(idx);
                    }
                }
            }
            None => {
                self.entries.swap_remove(idx);
            }
        }
        Some(fired)
    }

    fn push(&mut self, due: Millis, period_ms: Option<u64>, event: TimerEvent) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            due,
            period_ms,
            event,
        });
        id
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/timers.rs"]
mod tests;
