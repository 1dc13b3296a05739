use time::OffsetDateTime;

use crate::{
    foundation::core::Millis,
    schedule::timers::{TimerEvent, TimerId, Timers},
};

const MS_PER_SECOND: i128 = 1_000;
const MS_PER_MINUTE: i128 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i128 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i128 = 24 * MS_PER_HOUR;

/// Refresh cadence while mounted.
pub const TICK_MS: u64 = 1_000;

/// Whole units left until the target instant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct Remaining {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Remaining {
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Floor-divided time left from `now` to `target`; all zero once `now >= target`.
pub fn compute_remaining(target: OffsetDateTime, now: OffsetDateTime) -> Remaining {
    let diff_ms = (target - now).whole_milliseconds();
    if diff_ms <= 0 {
        return Remaining::default();
    }
    Remaining {
        days: (diff_ms / MS_PER_DAY) as u64,
        hours: ((diff_ms / MS_PER_HOUR) % 24) as u64,
        minutes: ((diff_ms / MS_PER_MINUTE) % 60) as u64,
        seconds: ((diff_ms / MS_PER_SECOND) % 60) as u64,
    }
}

/// Countdown widget state: recomputed every [`TICK_MS`] while mounted.
#[derive(Clone, Debug)]
pub struct Countdown {
    target: OffsetDateTime,
    ticker: Option<TimerId>,
    remaining: Remaining,
    ticks: u64,
}

impl Countdown {
    pub fn new(target: OffsetDateTime) -> Self {
        Self {
            target,
            ticker: None,
            remaining: Remaining::default(),
            ticks: 0,
        }
    }

    pub fn target(&self) -> OffsetDateTime {
        self.target
    }

    pub fn is_mounted(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn remaining(&self) -> Remaining {
        self.remaining
    }

    /// Ticks handled since construction.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Compute immediately and start the periodic refresh. Mounting twice is a no-op.
    pub fn mount(&mut self, wall_now: OffsetDateTime, now: Millis, timers: &mut Timers) {
        if self.ticker.is_some() {
            return;
        }
        self.remaining = compute_remaining(self.target, wall_now);
        self.ticker = Some(timers.every(now, TICK_MS, TimerEvent::CountdownTick));
        tracing::debug!(remaining = ?self.remaining, "countdown mounted");
    }

    /// Stop the refresh. Ticks already cancelled are never delivered.
    pub fn unmount(&mut self, timers: &mut Timers) {
        if let Some(id) = self.ticker.take() {
            timers.cancel(id);
            tracing::debug!(ticks = self.ticks, "countdown unmounted");
        }
    }

    /// Handle a fired timer; ignores ids that are not this countdown's ticker.
    pub fn on_tick(&mut self, id: TimerId, wall_now: OffsetDateTime) -> bool {
        if self.ticker != Some(id) {
            return false;
        }
        self.remaining = compute_remaining(self.target, wall_now);
        self.ticks += 1;
        true
    }

    /// Forget the ticker without cancelling it; used after the caller dropped every timer.
    pub fn detach(&mut self) {
        self.ticker = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/countdown/remaining.rs"]
mod tests;
