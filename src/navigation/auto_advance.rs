use crate::{
    animation::animator::PanelChange,
    foundation::core::{Millis, PanelIndex},
    schedule::timers::{TimerEvent, TimerId, Timers},
};

/// Authored parameters of the one-shot auto-advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AutoAdvanceSpec {
    pub from: PanelIndex,
    pub to: PanelIndex,
    pub delay_ms: u64,
}

/// One-shot delayed jump out of `from`, guarded by a latch.
///
/// The latch is consumed when the timer is armed, so entering `from` again never arms a second
/// timer until [`AutoAdvance::rearm`] is called. Leaving `from` cancels a pending timer.
#[derive(Clone, Debug)]
pub struct AutoAdvance {
    spec: AutoAdvanceSpec,
    latched: bool,
    pending: Option<TimerId>,
}

impl AutoAdvance {
    pub fn new(spec: AutoAdvanceSpec) -> Self {
        Self {
            spec,
            latched: false,
            pending: None,
        }
    }

    pub fn is_latched(&self) -> bool {
        self.latched
    }

    pub fn pending(&self) -> Option<TimerId> {
        self.pending
    }

    /// React to a committed panel change: arm on entry to `from`, disarm on exit.
    pub fn on_panel_change(&mut self, change: PanelChange, now: Millis, timers: &mut Timers) {
        if change.left(self.spec.from) {
            if let Some(id) = self.pending.take() {
                timers.cancel(id);
                tracing::debug!(from = %self.spec.from, "auto-advance disarmed");
            }
            return;
        }
        if change.entered(self.spec.from) && !self.latched {
            let id = timers.once(
                now,
                self.spec.delay_ms,
                TimerEvent::AutoAdvance { to: self.spec.to },
            );
            self.latched = true;
            self.pending = Some(id);
            tracing::debug!(
                from = %self.spec.from,
                to = %self.spec.to,
                delay_ms = self.spec.delay_ms,
                "auto-advance armed"
            );
        }
    }

    /// Claim a fired timer. Returns the jump target if `id` is this latch's timer.
    pub fn take_fired(&mut self, id: TimerId) -> Option<PanelIndex> {
        if self.pending == Some(id) {
            self.pending = None;
            Some(self.spec.to)
        } else {
            None
        }
    }

    /// Release the latch so the next entry to `from` arms again.
    pub fn rearm(&mut self) {
        self.latched = false;
    }

    /// Forget any pending timer; the caller owns cancelling it.
    pub fn clear(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/navigation/auto_advance.rs"]
mod tests;
