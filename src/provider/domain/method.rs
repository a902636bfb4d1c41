//! Endpoint method value object.

use super::ParseMethodError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Recognized endpoint methods: the HTTP verbs plus the streaming `ws`
/// pseudo-verb.
///
/// Parsing is case-insensitive; declarations carry methods as raw strings
/// and are validated at registration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointMethod {
    /// HTTP GET.
    Get,
    /// HTTP HEAD.
    Head,
    /// HTTP POST.
    Post,
    /// HTTP PUT.
    Put,
    /// HTTP DELETE.
    Delete,
    /// HTTP OPTIONS.
    Options,
    /// HTTP PATCH.
    Patch,
    /// Streaming pseudo-verb; mounted raw without wrapping or guarding.
    Ws,
}

impl EndpointMethod {
    /// Returns true for the streaming `ws` pseudo-verb.
    #[must_use]
    pub const fn is_streaming(self) -> bool {
        matches!(self, Self::Ws)
    }

    /// Returns the canonical lowercase method token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Head => "head",
            Self::Post => "post",
            Self::Put => "put",
            Self::Delete => "delete",
            Self::Options => "options",
            Self::Patch => "patch",
            Self::Ws => "ws",
        }
    }
}

impl FromStr for EndpointMethod {
    type Err = ParseMethodError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "get" => Ok(Self::Get),
            "head" => Ok(Self::Head),
            "post" => Ok(Self::Post),
            "put" => Ok(Self::Put),
            "delete" => Ok(Self::Delete),
            "options" => Ok(Self::Options),
            "patch" => Ok(Self::Patch),
            "ws" => Ok(Self::Ws),
            _ => Err(ParseMethodError(value.to_owned())),
        }
    }
}

impl fmt::Display for EndpointMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
