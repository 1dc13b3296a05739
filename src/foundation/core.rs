use std::fmt;

use crate::foundation::error::{InvitationError, InvitationResult};

pub use kurbo::{Affine, Vec2};

/// Index of one full-viewport panel, always within `[0, panel_count)`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct PanelIndex(pub usize);

impl PanelIndex {
    /// Clamp an arbitrary signed request into `[0, panel_count - 1]`.
    ///
    /// `panel_count == 0` is rejected by config validation, so it is treated as one panel here.
    pub fn clamped(raw: i64, panel_count: usize) -> Self {
        let max = panel_count.saturating_sub(1) as i64;
        Self(raw.clamp(0, max) as usize)
    }

    /// Checked construction, used when reading authored data.
    pub fn checked(raw: usize, panel_count: usize) -> InvitationResult<Self> {
        if raw >= panel_count {
            return Err(InvitationError::validation(format!(
                "panel index {raw} is out of range (panel count {panel_count})"
            )));
        }
        Ok(Self(raw))
    }
}

impl fmt::Display for PanelIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable key for one animated visual element, e.g. `invite.title`.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ElementId(pub String);

impl ElementId {
    /// Build an id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ElementId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ElementId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Point on the page's virtual clock, in milliseconds since page load.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct Millis(pub u64);

impl Millis {
    /// Page load.
    pub const ZERO: Self = Self(0);

    /// The instant `ms` milliseconds after `self`.
    pub fn after(self, ms: u64) -> Self {
        Self(self.0.saturating_add(ms))
    }

    /// Milliseconds elapsed from `earlier` to `self`, zero if `earlier` is later.
    pub fn since(self, earlier: Millis) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
