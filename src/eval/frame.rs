use crate::{
    animation::{animator::Animator, target::AnimationTarget},
    countdown::remaining::Remaining,
    foundation::core::{ElementId, Millis, PanelIndex},
    page::controller::PagePhase,
};

/// Everything a surface needs to draw the page at one instant.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PageFrame {
    pub elapsed: Millis,
    pub phase: PagePhase,
    pub active: PanelIndex,
    pub guest_name: String,
    /// Present while the countdown is mounted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countdown: Option<Remaining>,
    pub guestbook_entries: usize,
    /// In table order.
    pub elements: Vec<EvaluatedElement>,
}

/// One element's resolved target and its interpolated pose.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EvaluatedElement {
    pub id: ElementId,
    pub panel: PanelIndex,
    pub owner: PanelIndex,
    pub target: AnimationTarget,
    pub pose: AnimationTarget,
    pub at_rest: bool,
}

impl PageFrame {
    pub fn element(&self, id: &str) -> Option<&EvaluatedElement> {
        self.elements.iter().find(|e| e.id.as_str() == id)
    }

    /// Elements drawn on the active panel.
    pub fn on_active_panel(&self) -> impl Iterator<Item = &EvaluatedElement> + '_ {
        self.elements.iter().filter(move |e| e.panel == self.active)
    }

    pub fn all_at_rest(&self) -> bool {
        self.elements.iter().all(|e| e.at_rest)
    }
}

/// Sample every element of `animator` at `now`.
pub fn evaluate_elements(animator: &Animator, now: Millis) -> Vec<EvaluatedElement> {
    let active = animator.current().unwrap_or(PanelIndex(0));
    animator
        .iter()
        .map(|(spec, motion)| EvaluatedElement {
            id: spec.id.clone(),
            panel: spec.panel,
            owner: spec.owner,
            target: spec.target_for(active),
            pose: motion.sample(now),
            at_rest: motion.at_rest(now),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/eval/frame.rs"]
mod tests;
