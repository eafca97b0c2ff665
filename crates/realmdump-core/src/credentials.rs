//! Admin login credentials type.

use std::fmt;

/// Credentials for the Keycloak admin account used to read the realm.
///
/// The password grant is always issued against the `master` realm with
/// the fixed `admin-cli` client, so only the username and password vary.
///
/// # Security
///
/// The password is never exposed in Debug output to prevent accidental
/// logging.
///
/// # Example
///
/// ```
/// use realmdump_core::AdminCredentials;
///
/// let creds = AdminCredentials::new("admin", "hunter2");
/// assert_eq!(creds.username(), "admin");
/// ```
pub struct AdminCredentials {
    username: String,
    password: String,
}

impl AdminCredentials {
    /// Create new admin credentials.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the admin username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password.
    ///
    /// # Security
    ///
    /// Use this only when constructing the token exchange request.
    /// Never log or display this value.
    pub fn password(&self) -> &str {
        &self.password
    }
}

// Intentionally hide the password in Debug output
impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

// Clone is intentionally derived to allow credentials to be reused across
// invocations, but the type is not Copy to make credential passing explicit.
impl Clone for AdminCredentials {
    fn clone(&self) -> Self {
        Self {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_hides_password() {
        let creds = AdminCredentials::new("admin", "super-secret");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("admin"));
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn accessors_return_inputs() {
        let creds = AdminCredentials::new("admin", "pw");
        assert_eq!(creds.username(), "admin");
        assert_eq!(creds.password(), "pw");
    }
}
