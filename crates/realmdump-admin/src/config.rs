//! Export configuration.

use std::num::NonZeroU32;
use std::time::Duration;

use realmdump_core::{AdminCredentials, Realm, ServerUrl};

/// Default page size for the user listing.
pub const DEFAULT_PAGE_SIZE: NonZeroU32 = NonZeroU32::new(200).unwrap();

/// Default connect timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default read timeout.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration for one export run.
///
/// The HTTP client is built once from this configuration and is
/// immutable afterwards; changing configuration means building a new
/// [`Exporter`](crate::Exporter).
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Keycloak server base URL.
    pub server: ServerUrl,
    /// Realm whose users are exported.
    pub realm: Realm,
    /// Admin account used for the password grant against the master realm.
    pub credentials: AdminCredentials,
    /// Page size for the listing endpoint (`max` query parameter).
    pub page_size: NonZeroU32,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
    /// Timeout for reading a response.
    pub read_timeout: Duration,
    /// Skip TLS certificate and hostname verification.
    ///
    /// Off by default. Only enable against servers whose certificates
    /// cannot be validated, and only when the network path is trusted.
    pub danger_accept_invalid_certs: bool,
}

impl ExportConfig {
    /// Create a configuration with default page size and timeouts.
    pub fn new(server: ServerUrl, realm: Realm, credentials: AdminCredentials) -> Self {
        Self {
            server,
            realm,
            credentials,
            page_size: DEFAULT_PAGE_SIZE,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
            danger_accept_invalid_certs: false,
        }
    }

    /// Set the page size.
    pub fn with_page_size(mut self, page_size: NonZeroU32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the connect and read timeouts.
    pub fn with_timeouts(mut self, connect: Duration, read: Duration) -> Self {
        self.connect_timeout = connect;
        self.read_timeout = read;
        self
    }

    /// Disable TLS certificate and hostname verification.
    pub fn with_danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.danger_accept_invalid_certs = accept;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ExportConfig {
        ExportConfig::new(
            ServerUrl::new("http://localhost:8080").unwrap(),
            Realm::new("test").unwrap(),
            AdminCredentials::new("admin", "admin"),
        )
    }

    #[test]
    fn defaults() {
        let cfg = config();
        assert_eq!(cfg.page_size.get(), 200);
        assert_eq!(cfg.connect_timeout, Duration::from_secs(30));
        assert_eq!(cfg.read_timeout, Duration::from_secs(60));
        assert!(!cfg.danger_accept_invalid_certs);
    }

    #[test]
    fn builder_overrides() {
        let cfg = config()
            .with_page_size(NonZeroU32::new(50).unwrap())
            .with_timeouts(Duration::from_secs(5), Duration::from_secs(10))
            .with_danger_accept_invalid_certs(true);
        assert_eq!(cfg.page_size.get(), 50);
        assert_eq!(cfg.connect_timeout, Duration::from_secs(5));
        assert!(cfg.danger_accept_invalid_certs);
    }
}
