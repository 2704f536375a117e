//! Connection configuration handed to the sandbox client.
//!
//! [`ConnectionConfig`] is the typed replacement for the client reading its
//! API URL and debug flag out of the process environment.

use std::sync::Arc;

use kruise_core::{Port, SandboxDomain, SandboxId, Scheme};
use serde::Serialize;

use crate::{HostResolver, KruiseResolver, RedirectError, SandboxEndpoint};

/// Path of the control-plane API under the sandbox domain.
pub const API_PATH: &str = "kruise/api";

/// Environment variable holding the sandbox domain. Required.
pub const ENV_DOMAIN: &str = "E2B_DOMAIN";

/// Environment variable the client reads its control-plane base URL from.
pub const ENV_API_URL: &str = "E2B_API_URL";

/// Environment variable the client reads its debug mode from.
///
/// The client treats `true`, in any case, as enabled and anything else as
/// disabled.
pub const ENV_DEBUG: &str = "E2B_DEBUG";

/// Build the control-plane base URL, `<scheme>://<domain>/kruise/api`.
#[must_use]
pub fn api_url(scheme: Scheme, domain: &SandboxDomain) -> String {
    format!("{scheme}://{domain}/{API_PATH}")
}

/// Everything the sandbox client needs to reach the gateway.
///
/// Fields are read-only so the scheme, API URL and debug flag always agree:
/// plain-text transport implies debug mode.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct ConnectionConfig {
    domain: SandboxDomain,
    scheme: Scheme,
    api_url: String,
    debug: bool,
    #[serde(skip)]
    resolver: Arc<dyn HostResolver>,
}

impl ConnectionConfig {
    /// Create a config for `domain` routed through the gateway.
    ///
    /// # Arguments
    /// - `domain`: sandbox domain, also used as the API host
    /// - `secure`: `true` for `https`; `false` selects `http` and enables debug
    #[must_use]
    pub fn new(domain: SandboxDomain, secure: bool) -> Self {
        let scheme = Scheme::from_secure(secure);
        Self {
            api_url: api_url(scheme, &domain),
            domain,
            scheme,
            debug: !secure,
            resolver: Arc::new(KruiseResolver),
        }
    }

    /// Create a config from the process environment.
    ///
    /// # Errors
    /// Returns [`RedirectError::MissingConfiguration`] if `E2B_DOMAIN` is
    /// unset, empty, or not valid unicode.
    pub fn from_env(secure: bool) -> Result<Self, RedirectError> {
        Self::from_lookup(secure, |key| std::env::var(key).ok())
    }

    /// Create a config reading variables through `lookup`.
    ///
    /// `E2B_DOMAIN` is required. Debug mode is on for plain-text transport,
    /// and also when `E2B_DEBUG` is already enabled, since an env-reading
    /// client would honour it.
    ///
    /// # Errors
    /// Returns [`RedirectError::MissingConfiguration`] if `lookup` yields no
    /// value, or an empty one, for `E2B_DOMAIN`.
    pub fn from_lookup<F>(secure: bool, lookup: F) -> Result<Self, RedirectError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let Some(domain) = lookup(ENV_DOMAIN).filter(|d| !d.is_empty()) else {
            tracing::warn!(key = ENV_DOMAIN, "required configuration value is missing");
            return Err(RedirectError::MissingConfiguration { key: ENV_DOMAIN });
        };
        let mut config = Self::new(SandboxDomain::new(domain), secure);
        config.debug |= lookup(ENV_DEBUG).is_some_and(|v| v.eq_ignore_ascii_case("true"));
        Ok(config)
    }

    /// Replace the injected host resolver.
    #[must_use]
    pub fn with_resolver(mut self, resolver: Arc<dyn HostResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// Domain sandboxes and the API are reachable under.
    #[must_use]
    pub fn domain(&self) -> &SandboxDomain {
        &self.domain
    }

    /// Control-plane transport scheme.
    #[must_use]
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Control-plane base URL.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Client debug mode.
    #[must_use]
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Resolver used for every sandbox port URL.
    #[must_use]
    pub fn resolver(&self) -> &Arc<dyn HostResolver> {
        &self.resolver
    }

    /// Host for `port` of a sandbox that has no endpoint handle yet.
    #[must_use]
    pub fn get_host(&self, sandbox_id: &SandboxId, port: Port) -> String {
        self.resolver.resolve_host(sandbox_id, &self.domain, port)
    }

    /// Endpoint handle for a sandbox under this config's domain.
    #[must_use]
    pub fn endpoint(&self, sandbox_id: SandboxId) -> SandboxEndpoint {
        SandboxEndpoint::new(sandbox_id, self.domain.clone(), Arc::clone(&self.resolver))
    }
}
