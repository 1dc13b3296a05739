use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::foundation::error::{InvitationError, InvitationResult};

/// Why the page could not become interactive.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct AssetLoadFailure {
    pub path: String,
    pub reason: String,
}

impl From<AssetLoadFailure> for InvitationError {
    fn from(value: AssetLoadFailure) -> Self {
        InvitationError::asset_load(format!("failed to load '{}': {}", value.path, value.reason))
    }
}

/// Preload progress. `Ready` and `Failed` are terminal for the page load.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GateState {
    Loading { pending: usize },
    Ready,
    Failed(AssetLoadFailure),
    /// Torn down before resolving; late results are ignored.
    Abandoned,
}

/// Pixel size of a decoded image header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
}

/// Resolves one declared image path.
pub trait AssetLoader {
    fn load(&self, path: &str) -> anyhow::Result<LoadedImage>;
}

/// Reads images from disk below `root`, decoding only their headers.
#[derive(Clone, Debug)]
pub struct FsImageLoader {
    root: PathBuf,
}

impl FsImageLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetLoader for FsImageLoader {
    fn load(&self, path: &str) -> anyhow::Result<LoadedImage> {
        let full = self.root.join(Path::new(path));
        let (width, height) = image::image_dimensions(&full)
            .with_context(|| format!("decode image header '{}'", full.display()))?;
        if width == 0 || height == 0 {
            anyhow::bail!("image '{}' has zero size", full.display());
        }
        Ok(LoadedImage { width, height })
    }
}

/// Normalize a declared image path to a relative, `/`-separated form.
///
/// A leading `/` means "site root" and is dropped; `..` segments are rejected.
pub fn normalize_asset_path(source: &str) -> InvitationResult<String> {
    let s = source.trim().replace('\\', "/");
    if s.is_empty() {
        return Err(InvitationError::validation("asset path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(InvitationError::validation(format!(
                "asset path '{source}' must not contain '..'"
            )));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(InvitationError::validation(format!(
            "asset path '{source}' must contain a file name"
        )));
    }
    Ok(out.join("/"))
}

/// All-or-nothing gate over a fixed image list.
#[derive(Clone, Debug)]
pub struct AssetGate {
    declared: Vec<String>,
    loaded: BTreeSet<String>,
    state: GateState,
}

impl AssetGate {
    /// Paths are normalized and de-duplicated in declaration order.
    pub fn new<I, S>(declared: I) -> InvitationResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = BTreeSet::new();
        let mut paths = Vec::new();
        for source in declared {
            let path = normalize_asset_path(source.as_ref())?;
            if seen.insert(path.clone()) {
                paths.push(path);
            }
        }
        let state = if paths.is_empty() {
            GateState::Ready
        } else {
            GateState::Loading {
                pending: paths.len(),
            }
        };
        Ok(Self {
            declared: paths,
            loaded: BTreeSet::new(),
            state,
        })
    }

    pub fn declared(&self) -> &[String] {
        &self.declared
    }

    pub fn state(&self) -> &GateState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, GateState::Loading { .. })
    }

    /// Record a successful load. Results after the gate resolved are ignored.
    pub fn on_loaded(&mut self, path: &str) -> InvitationResult<&GateState> {
        let path = self.resolve(path)?;
        self.mark_loaded(path);
        Ok(&self.state)
    }

    /// Record a failed load. The first failure wins, whatever else succeeds.
    pub fn on_failed(
        &mut self,
        path: &str,
        reason: impl Into<String>,
    ) -> InvitationResult<&GateState> {
        let path = self.resolve(path)?;
        self.mark_failed(path, reason.into());
        Ok(&self.state)
    }

    /// Stop listening; a still-loading gate ignores every later result.
    pub fn abandon(&mut self) {
        if self.is_loading() {
            self.state = GateState::Abandoned;
        }
    }

    /// Drive every outstanding path through `loader`, stopping at the first failure.
    #[tracing::instrument(level = "debug", skip_all, fields(declared = self.declared.len()))]
    pub fn preload_with(&mut self, loader: &dyn AssetLoader) -> &GateState {
        let outstanding: Vec<String> = self
            .declared
            .iter()
            .filter(|p| !self.loaded.contains(*p))
            .cloned()
            .collect();

        for path in outstanding {
            if !self.is_loading() {
                break;
            }
            match loader.load(&path) {
                Ok(img) => {
                    tracing::debug!(
                        path = %path,
                        width = img.width,
                        height = img.height,
                        "asset loaded"
                    );
                    self.mark_loaded(path);
                }
                Err(err) => self.mark_failed(path, format!("{err:#}")),
            }
        }
        &self.state
    }

    fn mark_loaded(&mut self, path: String) {
        if !self.is_loading() {
            return;
        }
        self.loaded.insert(path);
        let pending = self.declared.len() - self.loaded.len();
        self.state = if pending == 0 {
            tracing::info!(count = self.declared.len(), "all assets loaded");
            GateState::Ready
        } else {
            GateState::Loading { pending }
        };
    }

    fn mark_failed(&mut self, path: String, reason: String) {
        if !self.is_loading() {
            return;
        }
        tracing::warn!(path = %path, reason = %reason, "asset failed to load");
        self.state = GateState::Failed(AssetLoadFailure { path, reason });
    }

    fn resolve(&self, path: &str) -> InvitationResult<String> {
        let path = normalize_asset_path(path)?;
        if !self.declared.contains(&path) {
            return Err(InvitationError::validation(format!(
                "'{path}' is not a declared asset"
            )));
        }
        Ok(path)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/gate.rs"]
mod tests;
