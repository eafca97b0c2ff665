//! Realm name type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A validated Keycloak realm name.
///
/// Realm names appear as a path segment of the admin listing endpoint,
/// so they must be non-empty and free of characters that would change
/// the request path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Realm(String);

impl Realm {
    /// Create a new realm name, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or contains path or
    /// whitespace characters.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();

        if s.is_empty() {
            return Err(InvalidInputError::Realm {
                value: s.to_string(),
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        if s.chars()
            .any(|c| c == '/' || c == '?' || c == '#' || c.is_whitespace())
        {
            return Err(InvalidInputError::Realm {
                value: s.to_string(),
                reason: "must not contain path, query, or whitespace characters".to_string(),
            }
            .into());
        }

        Ok(Self(s.to_string()))
    }

    /// Returns the realm name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Realm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Realm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Realm {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Realm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Realm::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for Realm {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
