use std::path::Path;

use anyhow::Context;
use time::OffsetDateTime;

use crate::{
    animation::table::TransitionTable,
    assets::gate::normalize_asset_path,
    foundation::{
        core::PanelIndex,
        error::{InvitationError, InvitationResult},
    },
    navigation::{auto_advance::AutoAdvanceSpec, navigator::PanelSpec},
    rsvp::form::GuestSubmission,
};

/// Countdown placement and target instant.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CountdownConfig {
    /// Panel on which the countdown is mounted.
    pub panel: PanelIndex,
    /// RFC 3339 instant, e.g. `2024-12-15T00:00:00+07:00`.
    #[serde(with = "time::serde::rfc3339")]
    pub target: OffsetDateTime,
}

/// Everything authored about one invitation page.
///
/// Missing JSON fields fall back to [`InvitationConfig::default`], the wedding page.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct InvitationConfig {
    pub panels: Vec<PanelSpec>,
    pub auto_advance: Option<AutoAdvanceSpec>,
    pub countdown: Option<CountdownConfig>,
    /// Images that must all load before the page becomes interactive.
    pub assets: Vec<String>,
    /// Shown when the load URL carries no guest name.
    pub guest_placeholder: String,
    /// Entries shown in the guestbook before any submission.
    pub guestbook_seed: Vec<GuestSubmission>,
    pub elements: TransitionTable,
}

impl Default for InvitationConfig {
    fn default() -> Self {
        crate::config::defaults::wedding()
    }
}

impl InvitationConfig {
    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    pub fn from_json_str(json: &str) -> InvitationResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| InvitationError::config(format!("parse invitation config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> InvitationResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read invitation config '{}'", path.display()))?;
        Self::from_json_str(&json)
    }

    pub fn to_json_pretty(&self) -> InvitationResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| InvitationError::config(format!("serialize invitation config: {e}")))
    }

    pub fn validate(&self) -> InvitationResult<()> {
        crate::navigation::navigator::Navigator::validate_panels(&self.panels)?;
        let count = self.panel_count();

        if let Some(auto) = &self.auto_advance {
            PanelIndex::checked(auto.from.0, count)?;
            PanelIndex::checked(auto.to.0, count)?;
            if auto.from == auto.to {
                return Err(InvitationError::validation(
                    "auto-advance must lead to a different panel",
                ));
            }
        }
        if let Some(countdown) = &self.countdown {
            PanelIndex::checked(countdown.panel.0, count)?;
        }
        for asset in &self.assets {
            normalize_asset_path(asset)?;
        }
        for (i, entry) in self.guestbook_seed.iter().enumerate() {
            if entry.display_name.trim().is_empty() || entry.message.trim().is_empty() {
                return Err(InvitationError::validation(format!(
                    "guestbook seed entry {i} needs a name and a message"
                )));
            }
        }
        self.elements.validate(count)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
