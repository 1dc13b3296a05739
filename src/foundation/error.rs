/// Convenience result type used across the invitation controller.
pub type InvitationResult<T> = Result<T, InvitationError>;

/// Top-level error taxonomy used by controller APIs.
#[derive(thiserror::Error, Debug)]
pub enum InvitationError {
    /// Invalid configuration, table data, or user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// A declared image failed to load; terminal for the page load.
    #[error("asset load error: {0}")]
    AssetLoad(String),

    /// An operation was invoked in a page phase that does not accept it.
    #[error("phase error: {0}")]
    Phase(String),

    /// Errors while reading or parsing configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl InvitationError {
    /// Build an [`InvitationError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`InvitationError::AssetLoad`] value.
    pub fn asset_load(msg: impl Into<String>) -> Self {
        Self::AssetLoad(msg.into())
    }

    /// Build an [`InvitationError::Phase`] value.
    pub fn phase(msg: impl Into<String>) -> Self {
        Self::Phase(msg.into())
    }

    /// Build an [`InvitationError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
