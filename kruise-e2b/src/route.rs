//! Gateway-side inverse of [`KruiseResolver`](crate::KruiseResolver).
//!
//! The gateway receives request paths of the form
//! `/kruise/<sandbox-id>/<port>/<rest>` and forwards `/<rest>` to that
//! sandbox port. Anything under `/kruise/api` is a control-plane call.

use kruise_core::{Port, SandboxId};

use crate::config::API_PATH;
use crate::resolver::PATH_PREFIX;
use crate::RedirectError;

/// A sandbox request decoded from a gateway path.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GatewayRoute {
    /// Target sandbox.
    pub sandbox_id: SandboxId,
    /// Target port inside the sandbox.
    pub port: Port,
    /// Path forwarded to the sandbox, always starting with `/`.
    pub path: String,
}

/// Where the gateway sends a request.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GatewayTarget {
    /// Control-plane API under `/kruise/api`.
    ControlPlane,
    /// A sandbox port.
    Sandbox(GatewayRoute),
}

/// Returns `false` for any path under `/kruise/api`.
///
/// This is a plain prefix test, so a sandbox whose identifier starts with
/// `api` is indistinguishable from a control-plane call.
#[must_use]
pub fn is_sandbox_request(path: &str) -> bool {
    path.strip_prefix('/')
        .is_none_or(|rest| !rest.starts_with(API_PATH))
}

impl GatewayRoute {
    /// Decode `/kruise/<sandbox-id>/<port>/<rest>`.
    ///
    /// The sandbox identifier is taken verbatim. The trailing `/<rest>`
    /// segment is required, even if empty.
    ///
    /// # Errors
    /// Returns [`RedirectError::InvalidRoute`] if the path does not start with
    /// `/kruise/` or has fewer than three segments after it.
    /// Returns [`RedirectError::Core`] if the port segment is not a valid port.
    pub fn parse(path: &str) -> Result<Self, RedirectError> {
        let invalid = || RedirectError::InvalidRoute { path: path.to_owned() };

        let rest = path
            .strip_prefix('/')
            .and_then(|p| p.strip_prefix(PATH_PREFIX))
            .and_then(|p| p.strip_prefix('/'))
            .ok_or_else(invalid)?;

        let mut segments = rest.splitn(3, '/');
        let (Some(sandbox_id), Some(port), Some(tail)) =
            (segments.next(), segments.next(), segments.next())
        else {
            return Err(invalid());
        };

        Ok(Self {
            sandbox_id: SandboxId::new(sandbox_id),
            port: port.parse()?,
            path: format!("/{tail}"),
        })
    }
}

/// Classify a gateway request path.
///
/// # Errors
/// Propagates [`GatewayRoute::parse`] errors for non-control-plane paths.
pub fn route(path: &str) -> Result<GatewayTarget, RedirectError> {
    if !is_sandbox_request(path) {
        return Ok(GatewayTarget::ControlPlane);
    }
    let route = GatewayRoute::parse(path)?;
    tracing::debug!(
        sandbox_id = %route.sandbox_id,
        port = %route.port,
        path = %route.path,
        "routed sandbox request"
    );
    Ok(GatewayTarget::Sandbox(route))
}

#[cfg(test)]
mod tests {
    use kruise_core::{CoreError, SandboxDomain};

    use super::*;
    use crate::{HostResolver, KruiseResolver};

    /// Request path a client would send for `rest` on a resolved host.
    fn request_path(host: &str, domain: &str, rest: &str) -> String {
        match host.strip_prefix(domain) {
            Some(path) => format!("{path}/{rest}"),
            None => panic!("host {host} does not start with domain {domain}"),
        }
    }

    #[test]
    fn parse_splits_id_port_and_path() {
        let route = match GatewayRoute::parse("/kruise/sandbox1234/3000/files/a.txt") {
            Ok(r) => r,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(route.sandbox_id.as_str(), "sandbox1234");
        assert_eq!(route.port, Port::new(3000));
        assert_eq!(route.path, "/files/a.txt");
    }

    #[test]
    fn parse_keeps_empty_tail_as_root() {
        match GatewayRoute::parse("/kruise/sbx/80/") {
            Ok(route) => assert_eq!(route.path, "/"),
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    #[test]
    fn parse_without_tail_is_invalid_route() {
        assert!(
            matches!(GatewayRoute::parse("/kruise/sbx/80"), Err(RedirectError::InvalidRoute { .. })),
            "a path without the forwarded segment must be rejected"
        );
    }

    #[test]
    fn parse_wrong_prefix_is_invalid_route() {
        for path in ["", "/", "/kruise", "/kruise/", "/other/sbx/80/x", "kruise/sbx/80/x"] {
            match GatewayRoute::parse(path) {
                Err(RedirectError::InvalidRoute { path: reported }) => assert_eq!(reported, path),
                other => panic!("expected InvalidRoute for {path:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn parse_bad_port_is_core_error() {
        match GatewayRoute::parse("/kruise/sbx/http/x") {
            Err(RedirectError::Core(CoreError::InvalidPort { value })) => assert_eq!(value, "http"),
            other => panic!("expected InvalidPort, got {other:?}"),
        }
    }

    #[test]
    fn control_plane_paths_are_not_sandbox_requests() {
        assert!(!is_sandbox_request("/kruise/api"));
        assert!(!is_sandbox_request("/kruise/api/sandboxes"));
        assert!(is_sandbox_request("/kruise/sbx/3000/"));
        assert_eq!(route("/kruise/api/sandboxes").ok(), Some(GatewayTarget::ControlPlane));
    }

    #[test]
    fn resolved_host_routes_back_to_sandbox() {
        let host = KruiseResolver.resolve_host(
            &SandboxId::new("sbx123"),
            &SandboxDomain::new("example.com"),
            Port::new(3000),
        );
        let expected = GatewayRoute {
            sandbox_id: SandboxId::new("sbx123"),
            port: Port::new(3000),
            path: "/health".to_owned(),
        };
        assert_eq!(
            route(&request_path(&host, "example.com", "health")).ok(),
            Some(GatewayTarget::Sandbox(expected))
        );
    }

    #[test]
    fn sandbox_id_with_api_prefix_is_routed_to_control_plane() {
        let host = KruiseResolver.resolve_host(
            &SandboxId::new("api-7f3a"),
            &SandboxDomain::new("example.com"),
            Port::new(3000),
        );
        assert_eq!(host, "example.com/kruise/api-7f3a/3000");
        assert_eq!(
            route(&request_path(&host, "example.com", "health")).ok(),
            Some(GatewayTarget::ControlPlane),
            "ids starting with 'api' collide with the control-plane prefix"
        );
    }

    proptest::proptest! {
        #[test]
        fn proptest_resolved_host_round_trips(
            domain in "[a-z0-9.-]{1,32}",
            id in "[a-zA-Z0-9-]{1,24}",
            port in proptest::prelude::any::<u16>(),
            tail in "[a-z0-9/._-]{0,24}",
        ) {
            proptest::prop_assume!(!id.starts_with("api"));
            let host = KruiseResolver.resolve_host(
                &SandboxId::new(id.clone()),
                &SandboxDomain::new(domain.clone()),
                Port::new(port),
            );
            let target = route(&request_path(&host, &domain, &tail)).ok();
            let expected = GatewayRoute {
                sandbox_id: SandboxId::new(id),
                port: Port::new(port),
                path: format!("/{tail}"),
            };
            proptest::prop_assert_eq!(target, Some(GatewayTarget::Sandbox(expected)));
        }
    }
}
