//! Storage slot identifiers.

use core::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::DomainError;

/// Normalized location code (e.g. `A101`).
///
/// Always trimmed and uppercase; the only ways to build one go through
/// [`LocationCode::normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LocationCode(String);

impl LocationCode {
    /// Trim surrounding whitespace and uppercase.
    ///
    /// Infallible: a blank cell normalizes to the empty code, which matches
    /// no layout slot.
    pub fn normalize(raw: &str) -> Self {
        Self(raw.trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}

impl core::fmt::Display for LocationCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(&self.0)
    }
}

impl AsRef<str> for LocationCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for LocationCode {
    fn from(value: String) -> Self {
        Self::normalize(&value)
    }
}

impl From<&str> for LocationCode {
    fn from(value: &str) -> Self {
        Self::normalize(value)
    }
}

impl From<LocationCode> for String {
    fn from(value: LocationCode) -> Self {
        value.0
    }
}

impl<'de> Deserialize<'de> for LocationCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::normalize(&raw))
    }
}

/// Strict parse: like [`LocationCode::normalize`] but rejects blank input.
impl FromStr for LocationCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = Self::normalize(s);
        if code.is_blank() {
            return Err(DomainError::invalid_location("location code cannot be blank"));
        }
        Ok(code)
    }
}
