//! Error types for the redirector crate.

/// Errors that can occur while configuring the redirected client.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RedirectError {
    /// A required configuration value is absent or empty.
    #[error("missing required configuration value {key}")]
    MissingConfiguration { key: &'static str },

    /// A gateway path is not of the form `/kruise/<sandbox-id>/<port>/<rest>`.
    #[error("invalid gateway path: {path}")]
    InvalidRoute { path: String },

    /// A value failed to convert into a core type.
    #[error(transparent)]
    Core(#[from] kruise_core::CoreError),
}
