use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Identifies a sandbox issued by the provisioning system.
///
/// The value is opaque: it is never parsed or validated here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[non_exhaustive]
pub struct SandboxId(pub String);

impl SandboxId {
    /// Creates a `SandboxId` from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SandboxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SandboxId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SandboxId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Base domain under which sandboxes are reachable, e.g. `sandbox.example.com`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[non_exhaustive]
pub struct SandboxDomain(pub String);

impl SandboxDomain {
    /// Creates a `SandboxDomain` from any string-like value.
    pub fn new(domain: impl Into<String>) -> Self {
        Self(domain.into())
    }

    /// Returns the domain as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SandboxDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SandboxDomain {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SandboxDomain {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A service port inside a sandbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
#[non_exhaustive]
pub struct Port(pub u16);

impl Port {
    /// Creates a `Port`.
    #[must_use]
    pub const fn new(port: u16) -> Self {
        Self(port)
    }

    /// Returns the raw port number.
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for Port {
    fn from(port: u16) -> Self {
        Self(port)
    }
}

impl FromStr for Port {
    type Err = CoreError;

    /// Parses a decimal port, as it appears in a gateway path segment.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidPort`] for anything `u16` does not accept.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u16>()
            .map(Self)
            .map_err(|_| CoreError::InvalidPort { value: s.to_owned() })
    }
}
