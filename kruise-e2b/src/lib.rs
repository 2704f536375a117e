//! Redirects E2B sandbox host resolution through the OpenKruise Agents
//! gateway.
//!
//! The sandbox client takes a [`HostResolver`] and a [`ConnectionConfig`]
//! at construction. [`KruiseResolver`] maps every sandbox port to
//! `<domain>/kruise/<sandbox-id>/<port>` and the config points control-plane
//! calls at `<scheme>://<domain>/kruise/api`. For clients that only read the
//! environment, [`configure_transport`] writes the same values into it once
//! at startup. [`route`] is the gateway-side inverse of the host shape.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod endpoint;
pub mod error;
pub mod resolver;
pub mod route;
pub mod transport;

pub use config::{api_url, ConnectionConfig, API_PATH, ENV_API_URL, ENV_DEBUG, ENV_DOMAIN};
pub use endpoint::SandboxEndpoint;
pub use error::RedirectError;
pub use kruise_core::{Port, SandboxDomain, SandboxId, Scheme};
pub use resolver::{HostResolver, KruiseResolver, NativeResolver, PATH_PREFIX};
pub use route::{is_sandbox_request, route, GatewayRoute, GatewayTarget};
pub use transport::{configure_transport, TransportSettings};
