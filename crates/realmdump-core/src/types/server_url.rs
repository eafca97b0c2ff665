//! Keycloak server base URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

use super::Realm;

/// A validated Keycloak server base URL.
///
/// Must be an absolute `http` or `https` URL with a host. Plain HTTP is
/// accepted because the exporter commonly runs against servers inside a
/// private network; certificate handling for HTTPS is the transport
/// configuration's concern, not this type's.
///
/// # Example
///
/// ```
/// use realmdump_core::ServerUrl;
///
/// let server = ServerUrl::new("https://sso.example.com").unwrap();
/// assert_eq!(
///     server.token_url(),
///     "https://sso.example.com/auth/realms/master/protocol/openid-connect/token"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ServerUrl(Url);

impl ServerUrl {
    /// Create a new server URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not absolute, not http/https, or
    /// has no host.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::ServerUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        // Normalize: remove trailing slash
        let normalized = if url.path() == "/" {
            let mut u = url.clone();
            u.set_path("");
            u
        } else {
            url
        };

        Ok(Self(normalized))
    }

    /// Returns the OpenID Connect token endpoint of the master realm.
    ///
    /// The admin token is always issued by the master realm, regardless
    /// of which realm is being exported.
    pub fn token_url(&self) -> String {
        format!(
            "{}/auth/realms/master/protocol/openid-connect/token",
            self.base()
        )
    }

    /// Returns the admin user-listing endpoint for a realm.
    ///
    /// Pagination parameters are query parameters and are added by the
    /// caller.
    pub fn users_url(&self, realm: &Realm) -> String {
        format!("{}/auth/admin/realms/{}/users", self.base(), realm)
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    /// Returns true when the URL uses TLS.
    pub fn is_https(&self) -> bool {
        self.0.scheme() == "https"
    }

    // The url crate always renders a trailing slash on root paths, so
    // strip it before appending endpoint paths.
    fn base(&self) -> &str {
        self.0.as_str().trim_end_matches('/')
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::ServerUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        let scheme = url.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(InvalidInputError::ServerUrl {
                value: original.to_string(),
                reason: "must use http or https".to_string(),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(InvalidInputError::ServerUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for ServerUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ServerUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ServerUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for ServerUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ServerUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for ServerUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_https_url() {
        let server = ServerUrl::new("https://sso.example.com").unwrap();
        assert_eq!(server.host(), Some("sso.example.com"));
        assert!(server.is_https());
    }

    #[test]
    fn valid_http_url() {
        let server = ServerUrl::new("http://localhost:8080").unwrap();
        assert_eq!(server.host(), Some("localhost"));
        assert!(!server.is_https());
    }

    #[test]
    fn token_url_construction() {
        let server = ServerUrl::new("http://localhost:8080").unwrap();
        assert_eq!(
            server.token_url(),
            "http://localhost:8080/auth/realms/master/protocol/openid-connect/token"
        );
    }

    #[test]
    fn users_url_construction() {
        let server = ServerUrl::new("https://sso.example.com").unwrap();
        let realm = Realm::new("tenants").unwrap();
        assert_eq!(
            server.users_url(&realm),
            "https://sso.example.com/auth/admin/realms/tenants/users"
        );
    }

    #[test]
    fn normalizes_trailing_slash() {
        let server = ServerUrl::new("https://sso.example.com/").unwrap();
        assert_eq!(
            server.token_url(),
            "https://sso.example.com/auth/realms/master/protocol/openid-connect/token"
        );
    }

    #[test]
    fn invalid_scheme() {
        assert!(ServerUrl::new("ftp://sso.example.com").is_err());
    }

    #[test]
    fn invalid_relative_url() {
        assert!(ServerUrl::new("/auth/admin").is_err());
    }
}
