//! Host resolution seam for the sandbox client.
//!
//! The client asks a [`HostResolver`] for every sandbox port URL instead of
//! formatting it itself. Swapping the resolver swaps the gateway topology
//! without touching the client.

use std::fmt;

use kruise_core::{Port, SandboxDomain, SandboxId};

use crate::SandboxEndpoint;

/// Fixed path segment under which the gateway exposes sandbox ports.
pub const PATH_PREFIX: &str = "kruise";

/// Turns `(domain, sandbox id, port)` into the host a client should dial.
///
/// Both operations are pure. Implementations must be `Send + Sync` so a
/// single resolver can be shared by every sandbox handle in the process.
///
/// Neither operation validates its inputs. A malformed id, domain, or port
/// surfaces as whatever error the consuming transport reports.
pub trait HostResolver: Send + Sync + fmt::Debug {
    /// Resolves a host before any sandbox instance exists.
    fn resolve_host(&self, sandbox_id: &SandboxId, domain: &SandboxDomain, port: Port) -> String;

    /// Resolves a host for a live sandbox instance.
    ///
    /// Delegates to [`HostResolver::resolve_host`] with the instance's own
    /// identifier and domain.
    fn resolve_instance_host(&self, endpoint: &SandboxEndpoint, port: Port) -> String {
        self.resolve_host(endpoint.sandbox_id(), endpoint.sandbox_domain(), port)
    }
}

/// Routes every sandbox port through the OpenKruise gateway.
///
/// Produces `<domain>/kruise/<sandbox-id>/<port>`.
///
/// The gateway treats every path under `/kruise/api` as a control-plane call
/// (see [`is_sandbox_request`](crate::is_sandbox_request)), so sandbox
/// identifiers starting with `api` are not reachable through it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KruiseResolver;

impl HostResolver for KruiseResolver {
    fn resolve_host(&self, sandbox_id: &SandboxId, domain: &SandboxDomain, port: Port) -> String {
        let host = format!("{domain}/{PATH_PREFIX}/{sandbox_id}/{port}");
        if sandbox_id.as_str().starts_with("api") {
            tracing::warn!(%sandbox_id, "sandbox id collides with the gateway control-plane path");
        }
        tracing::debug!(%sandbox_id, %port, %host, "resolved gateway host");
        host
    }
}

/// The client's stock topology: `<port>-<sandbox-id>.<domain>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NativeResolver;

impl HostResolver for NativeResolver {
    fn resolve_host(&self, sandbox_id: &SandboxId, domain: &SandboxDomain, port: Port) -> String {
        format!("{port}-{sandbox_id}.{domain}")
    }
}
