//! Core types for OpenKruise Agents sandbox endpoint redirection.
//!
//! Defines the values that flow through host resolution: sandbox
//! identifiers, sandbox domains, ports, and the control-plane transport
//! scheme.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod id;
pub mod scheme;

pub use error::CoreError;
pub use id::{Port, SandboxDomain, SandboxId};
pub use scheme::Scheme;
