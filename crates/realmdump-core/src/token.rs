//! Bearer token type.

use std::fmt;

/// A short-lived bearer token for admin API requests.
///
/// Obtained once per invocation via the password grant and dropped when
/// the invocation ends; never persisted, never refreshed mid-run.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone)]
pub struct AccessToken(String);

impl AccessToken {
    /// Create a new access token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value for use in authorization headers.
    ///
    /// # Security
    ///
    /// Use only when constructing HTTP authorization headers.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Hide the token value in Debug output
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_hides_value() {
        let token = AccessToken::new("eyJhbGciOiJSUzI1NiJ9.payload.sig");
        let debug = format!("{:?}", token);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("eyJ"));
    }

    #[test]
    fn as_str_returns_value() {
        let token = AccessToken::new("abc");
        assert_eq!(token.as_str(), "abc");
    }
}
