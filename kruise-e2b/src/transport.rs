//! Process-wide transport configuration for clients that only read the
//! environment.
//!
//! This is the one place the crate writes environment variables. Prefer
//! passing a [`ConnectionConfig`] to the client when it accepts one.

use crate::config::{ENV_API_URL, ENV_DEBUG};
use crate::{ConnectionConfig, RedirectError};

/// Values written to the environment by [`configure_transport`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct TransportSettings {
    /// Control-plane base URL, written to `E2B_API_URL`.
    pub api_url: String,
    /// Written as `E2B_DEBUG=true` when set. Left untouched otherwise.
    pub debug: bool,
}

impl TransportSettings {
    /// Compute the settings without touching the environment.
    ///
    /// # Errors
    /// Returns [`RedirectError::MissingConfiguration`] if `lookup` has no
    /// non-empty `E2B_DOMAIN`.
    pub fn resolve<F>(secure: bool, lookup: F) -> Result<Self, RedirectError>
    where
        F: Fn(&str) -> Option<String>,
    {
        ConnectionConfig::from_lookup(secure, lookup).map(|config| Self::from(&config))
    }

    /// The `(name, value)` pairs to write, in order.
    #[must_use]
    pub fn env_vars(&self) -> Vec<(&'static str, String)> {
        let mut vars = vec![(ENV_API_URL, self.api_url.clone())];
        if self.debug {
            vars.push((ENV_DEBUG, "true".to_owned()));
        }
        vars
    }

    /// Write the settings into the process environment.
    ///
    /// Same threading contract as [`configure_transport`].
    pub fn apply(&self) {
        for (key, value) in self.env_vars() {
            std::env::set_var(key, value);
        }
    }
}

impl From<&ConnectionConfig> for TransportSettings {
    fn from(config: &ConnectionConfig) -> Self {
        Self {
            api_url: config.api_url().to_owned(),
            debug: !config.scheme().is_secure(),
        }
    }
}

/// Point the environment-configured client at the gateway.
///
/// Reads `E2B_DOMAIN`, writes `E2B_API_URL`, and, when `secure` is `false`,
/// writes `E2B_DEBUG=true`. A secure call leaves an existing `E2B_DEBUG`
/// untouched.
///
/// Returns the [`ConnectionConfig`] an env-reading client would see after the
/// writes, so its debug flag is also on when `E2B_DEBUG` was already enabled.
///
/// # Process-wide effect
/// Mutates the process environment. Call exactly once, before any sandbox
/// client is constructed and before other threads that may read the
/// environment are spawned. There is no internal synchronization.
///
/// # Errors
/// Returns [`RedirectError::MissingConfiguration`] if `E2B_DOMAIN` is unset
/// or empty. Nothing is written in that case.
pub fn configure_transport(secure: bool) -> Result<ConnectionConfig, RedirectError> {
    let config = ConnectionConfig::from_env(secure)?;
    let settings = TransportSettings::from(&config);
    settings.apply();

    tracing::info!(
        domain = %config.domain(),
        api_url = %settings.api_url,
        debug = config.debug(),
        "configured sandbox client transport"
    );

    Ok(config)
}
