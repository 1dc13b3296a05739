use std::collections::{BTreeMap, BTreeSet};

use crate::{
    animation::{spring::TimingConfig, target::AnimationTarget},
    foundation::{
        core::{ElementId, PanelIndex},
        error::{InvitationError, InvitationResult},
    },
};

/// One authored row: how a single element looks when its owner panel is active or not.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementSpec {
    pub id: ElementId,
    /// Panel the element is drawn on.
    pub panel: PanelIndex,
    /// Panel whose activation selects `active`; usually equal to `panel`.
    pub owner: PanelIndex,
    pub active: AnimationTarget,
    pub inactive: AnimationTarget,
    pub timing: TimingConfig,
}

impl ElementSpec {
    /// Element drawn on and owned by the same panel.
    pub fn new(
        id: impl Into<ElementId>,
        panel: usize,
        inactive: AnimationTarget,
        active: AnimationTarget,
        timing: TimingConfig,
    ) -> Self {
        Self {
            id: id.into(),
            panel: PanelIndex(panel),
            owner: PanelIndex(panel),
            active,
            inactive,
            timing,
        }
    }

    /// Builder-style owner override for elements that follow another panel.
    pub fn owned_by(mut self, owner: usize) -> Self {
        self.owner = PanelIndex(owner);
        self
    }

    /// The pose this element should move toward while `active` is the current panel.
    pub fn target_for(&self, active: PanelIndex) -> AnimationTarget {
        if active == self.owner {
            self.active
        } else {
            self.inactive
        }
    }
}

/// Static `PanelIndex x ElementId -> (AnimationTarget, TimingConfig)` table.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct TransitionTable {
    elements: Vec<ElementSpec>,
}

impl TransitionTable {
    pub fn new(elements: Vec<ElementSpec>) -> Self {
        Self { elements }
    }

    pub fn elements(&self) -> &[ElementSpec] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, id: &ElementId) -> Option<&ElementSpec> {
        self.elements.iter().find(|e| &e.id == id)
    }

    /// Elements whose active pose is selected by `panel`.
    pub fn owned_by(&self, panel: PanelIndex) -> impl Iterator<Item = &ElementSpec> + '_ {
        self.elements.iter().filter(move |e| e.owner == panel)
    }

    pub fn validate(&self, panel_count: usize) -> InvitationResult<()> {
        let mut seen = BTreeSet::new();
        for element in &self.elements {
            if element.id.as_str().trim().is_empty() {
                return Err(InvitationError::validation("element id must be non-empty"));
            }
            if !seen.insert(element.id.clone()) {
                return Err(InvitationError::validation(format!(
                    "duplicate element id '{}'",
                    element.id
                )));
            }
            PanelIndex::checked(element.panel.0, panel_count)
                .map_err(|e| in_element(&element.id, e))?;
            PanelIndex::checked(element.owner.0, panel_count)
                .map_err(|e| in_element(&element.id, e))?;
            element
                .timing
                .validate()
                .map_err(|e| in_element(&element.id, e))?;
        }
        Ok(())
    }

    /// Resolve every element's target for the given active panel.
    ///
    /// Pure over the table: the same `active` always yields the same mapping.
    pub fn compute_targets(&self, active: PanelIndex) -> BTreeMap<ElementId, AnimationTarget> {
        self.elements
            .iter()
            .map(|e| (e.id.clone(), e.target_for(active)))
            .collect()
    }
}

fn in_element(id: &ElementId, err: InvitationError) -> InvitationError {
    match err {
        InvitationError::Validation(msg) => {
            InvitationError::validation(format!("element '{id}': {msg}"))
        }
        other => other,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/table.rs"]
mod tests;
