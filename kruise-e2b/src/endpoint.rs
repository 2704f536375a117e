//! Sandbox endpoint — a live sandbox as the client addresses it.

use std::sync::Arc;

use kruise_core::{Port, SandboxDomain, SandboxId};

use crate::HostResolver;

/// A handle to a running sandbox's network endpoints.
///
/// Carries the sandbox's identifier and domain plus the resolver injected at
/// construction. Cloning is cheap; the resolver is shared.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct SandboxEndpoint {
    sandbox_id: SandboxId,
    sandbox_domain: SandboxDomain,
    resolver: Arc<dyn HostResolver>,
}

impl SandboxEndpoint {
    /// Create an endpoint handle for an existing sandbox.
    #[must_use]
    pub fn new(
        sandbox_id: SandboxId,
        sandbox_domain: SandboxDomain,
        resolver: Arc<dyn HostResolver>,
    ) -> Self {
        Self { sandbox_id, sandbox_domain, resolver }
    }

    /// The sandbox identifier.
    #[must_use]
    pub fn sandbox_id(&self) -> &SandboxId {
        &self.sandbox_id
    }

    /// The domain the sandbox is reachable under.
    #[must_use]
    pub fn sandbox_domain(&self) -> &SandboxDomain {
        &self.sandbox_domain
    }

    /// Host for the given in-sandbox port.
    #[must_use]
    pub fn get_host(&self, port: Port) -> String {
        self.resolver.resolve_instance_host(self, port)
    }
}
