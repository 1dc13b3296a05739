use std::collections::BTreeMap;

use crate::foundation::{
    core::PanelIndex,
    error::{InvitationError, InvitationResult},
};

/// Authored behavior of one panel: where a tap leads and which named links it offers.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PanelSpec {
    pub name: String,
    /// Target of a tap anywhere on the panel; `None` ignores taps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_tap: Option<PanelIndex>,
    /// Named controls (buttons, footer links) and the panel each one jumps to.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub links: BTreeMap<String, PanelIndex>,
}

impl PanelSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn tap_to(mut self, target: usize) -> Self {
        self.on_tap = Some(PanelIndex(target));
        self
    }

    pub fn link(mut self, name: impl Into<String>, target: usize) -> Self {
        self.links.insert(name.into(), PanelIndex(target));
        self
    }
}

/// Sole owner of the active panel index.
#[derive(Clone, Debug)]
pub struct Navigator {
    panels: Vec<PanelSpec>,
    active: PanelIndex,
}

impl Navigator {
    /// Starts on panel 0. `panels` must be non-empty with in-range actions (see
    /// [`Navigator::validate_panels`]).
    pub fn new(panels: Vec<PanelSpec>) -> Self {
        Self {
            panels,
            active: PanelIndex(0),
        }
    }

    pub fn validate_panels(panels: &[PanelSpec]) -> InvitationResult<()> {
        if panels.is_empty() {
            return Err(InvitationError::validation("at least one panel is required"));
        }
        let count = panels.len();
        for (i, panel) in panels.iter().enumerate() {
            if let Some(target) = panel.on_tap {
                PanelIndex::checked(target.0, count).map_err(|e| {
                    InvitationError::validation(format!("panel {i} tap target: {e}"))
                })?;
            }
            for (name, target) in &panel.links {
                if name.trim().is_empty() {
                    return Err(InvitationError::validation(format!(
                        "panel {i} has a link with an empty name"
                    )));
                }
                PanelIndex::checked(target.0, count).map_err(|e| {
                    InvitationError::validation(format!("panel {i} link '{name}': {e}"))
                })?;
            }
        }
        Ok(())
    }

    pub fn active(&self) -> PanelIndex {
        self.active
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    pub fn panels(&self) -> &[PanelSpec] {
        &self.panels
    }

    pub fn active_panel(&self) -> Option<&PanelSpec> {
        self.panels.get(self.active.0)
    }

    /// Commit `target`, clamped into range, as the active index.
    ///
    /// Returns the index it replaced and the committed one. Any panel may jump to any other.
    /// Scrolling is left to the caller, once the animations have been retargeted.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn commit(&mut self, target: i64) -> (PanelIndex, PanelIndex) {
        let clamped = PanelIndex::clamped(target, self.panel_count());
        if clamped.0 as i64 != target {
            tracing::debug!(requested = target, clamped = %clamped, "panel request clamped");
        }
        let previous = self.active;
        self.active = clamped;
        (previous, clamped)
    }

    /// Where a tap on the active panel leads, if anywhere.
    pub fn tap_target(&self) -> Option<PanelIndex> {
        self.active_panel().and_then(|p| p.on_tap)
    }

    /// Where the named link on the active panel leads.
    pub fn link_target(&self, link: &str) -> InvitationResult<PanelIndex> {
        self.active_panel()
            .and_then(|p| p.links.get(link).copied())
            .ok_or_else(|| {
                InvitationError::validation(format!(
                    "panel {} has no link named '{link}'",
                    self.active
                ))
            })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/navigation/navigator.rs"]
mod tests;
