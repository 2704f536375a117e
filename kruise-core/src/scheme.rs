use std::fmt;

use serde::{Deserialize, Serialize};

/// Transport scheme for control-plane requests.
///
/// `Https` unless insecure transport is explicitly selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Scheme {
    /// TLS transport.
    #[default]
    Https,
    /// Plain-text transport. Selecting it also turns on the client debug flag.
    Http,
}

impl Scheme {
    /// Maps the secure-transport flag to a scheme.
    #[must_use]
    pub const fn from_secure(secure: bool) -> Self {
        if secure {
            Self::Https
        } else {
            Self::Http
        }
    }

    /// Returns `true` for [`Scheme::Https`].
    #[must_use]
    pub const fn is_secure(self) -> bool {
        matches!(self, Self::Https)
    }

    /// Returns the scheme as it appears in a URL.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Https => "https",
            Self::Http => "http",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<bool> for Scheme {
    fn from(secure: bool) -> Self {
        Self::from_secure(secure)
    }
}
