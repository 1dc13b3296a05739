use std::collections::BTreeMap;

use crate::{
    animation::{
        spring::TimingConfig,
        table::{ElementSpec, TransitionTable},
        target::{AnimationTarget, Lerp},
    },
    foundation::core::{ElementId, Millis, PanelIndex},
};

/// Two consecutive active indices. Entry is an edge: `previous != panel && current == panel`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelChange {
    /// `None` before the first panel is committed.
    pub previous: Option<PanelIndex>,
    pub current: PanelIndex,
}

impl PanelChange {
    /// True only on the transition into `panel`, not while remaining on it.
    pub fn entered(&self, panel: PanelIndex) -> bool {
        self.current == panel && self.previous != Some(panel)
    }

    /// True only on the transition out of `panel`.
    pub fn left(&self, panel: PanelIndex) -> bool {
        self.previous == Some(panel) && self.current != panel
    }

    pub fn is_noop(&self) -> bool {
        self.previous == Some(self.current)
    }
}

/// One in-flight interpolation of an element toward its target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub from: AnimationTarget,
    pub to: AnimationTarget,
    /// Edge moment plus the element's delay.
    pub start: Millis,
    pub timing: TimingConfig,
}

impl Motion {
    fn resting(pose: AnimationTarget, timing: TimingConfig) -> Self {
        Self {
            from: pose,
            to: pose,
            start: Millis::ZERO,
            timing,
        }
    }

    /// Interpolated pose at `now`; holds `from` until the delay has elapsed.
    pub fn sample(&self, now: Millis) -> AnimationTarget {
        if now < self.start {
            return self.from.clamped();
        }
        let progress = self.timing.progress(self.elapsed_secs(now));
        AnimationTarget::lerp(&self.from, &self.to, progress).clamped()
    }

    pub fn at_rest(&self, now: Millis) -> bool {
        if self.from == self.to {
            return true;
        }
        now >= self.start && self.timing.is_settled(self.elapsed_secs(now))
    }

    fn elapsed_secs(&self, now: Millis) -> f64 {
        now.since(self.start) as f64 / 1000.0
    }
}

/// Runtime half of the animator: remembers the last committed panel and each element's motion.
///
/// Target selection itself lives in [`TransitionTable::compute_targets`]; this type only decides
/// where each interpolation starts from when the target changes.
#[derive(Clone, Debug)]
pub struct Animator {
    table: TransitionTable,
    current: Option<PanelIndex>,
    motions: Vec<Motion>, // parallel to table rows
}

impl Animator {
    /// Every element rests in its inactive pose until the first panel is committed.
    pub fn new(table: TransitionTable) -> Self {
        let motions = table
            .elements()
            .iter()
            .map(|e| Motion::resting(e.inactive, e.timing))
            .collect();
        Self {
            table,
            current: None,
            motions,
        }
    }

    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// Last panel passed to [`Animator::on_panel_change`].
    pub fn current(&self) -> Option<PanelIndex> {
        self.current
    }

    /// Retarget every element for a committed panel change at `now`.
    ///
    /// Elements whose owner was just entered restart from their inactive pose (when
    /// `reset_on_entry` is set); other elements whose target changed continue from their
    /// current pose. Delays are all measured from `now`.
    pub fn on_panel_change(&mut self, next: PanelIndex, now: Millis) -> PanelChange {
        let change = PanelChange {
            previous: self.current,
            current: next,
        };
        if change.is_noop() {
            return change;
        }

        let mut restarted = 0usize;
        for (spec, motion) in self.table.elements().iter().zip(self.motions.iter_mut()) {
            let target = spec.target_for(next);
            let start = now.after(spec.timing.delay_ms);
            if change.entered(spec.owner) && spec.timing.reset_on_entry {
                *motion = Motion {
                    from: spec.inactive,
                    to: target,
                    start,
                    timing: spec.timing,
                };
                restarted += 1;
            } else if target != motion.to {
                *motion = Motion {
                    from: motion.sample(now),
                    to: target,
                    start,
                    timing: spec.timing,
                };
            }
        }

        tracing::debug!(
            previous = ?change.previous,
            current = %next,
            restarted,
            "animator retargeted"
        );
        self.current = Some(next);
        change
    }

    /// Targets for the last committed panel (panel 0 before any commit).
    pub fn targets(&self) -> BTreeMap<ElementId, AnimationTarget> {
        self.table.compute_targets(self.current.unwrap_or(PanelIndex(0)))
    }

    pub fn motion(&self, id: &ElementId) -> Option<&Motion> {
        self.table
            .elements()
            .iter()
            .position(|e| &e.id == id)
            .map(|i| &self.motions[i])
    }

    /// Sampled pose of one element at `now`.
    pub fn sample(&self, id: &ElementId, now: Millis) -> Option<AnimationTarget> {
        self.motion(id).map(|m| m.sample(now))
    }

    /// Table rows paired with their current motions, in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&ElementSpec, &Motion)> + '_ {
        self.table.elements().iter().zip(self.motions.iter())
    }

    /// True when no element is still moving at `now`.
    pub fn all_at_rest(&self, now: Millis) -> bool {
        self.motions.iter().all(|m| m.at_rest(now))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/animator.rs"]
mod tests;
