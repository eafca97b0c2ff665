//! Keycloak admin HTTP client.

use reqwest::header::AUTHORIZATION;
use tracing::{debug, instrument, trace, warn};

use realmdump_core::error::{AuthError, Error, ProtocolError, TransportError};
use realmdump_core::{AccessToken, AdminCredentials, Realm, ServerUrl};

use crate::config::ExportConfig;
use crate::endpoints::{
    AdminErrorResponse, TokenRequest, TokenResponse, UsersQuery, CLIENT_ID_ADMIN_CLI,
    GRANT_TYPE_PASSWORD,
};

/// HTTP client for the Keycloak admin REST API.
///
/// Built once from an [`ExportConfig`] and immutable afterwards. The
/// client may be shared across invocations; it carries no per-run state.
#[derive(Debug, Clone)]
pub struct AdminClient {
    client: reqwest::Client,
    server: ServerUrl,
}

impl AdminClient {
    /// Build a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the underlying TLS backend cannot
    /// be initialized.
    pub fn new(config: &ExportConfig) -> Result<Self, Error> {
        if config.danger_accept_invalid_certs {
            warn!("TLS certificate verification is disabled");
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!("realmdump/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(config.connect_timeout)
            .read_timeout(config.read_timeout)
            .danger_accept_invalid_certs(config.danger_accept_invalid_certs)
            .build()
            .map_err(|e| {
                TransportError::Http {
                    message: format!("failed to build HTTP client: {e}"),
                }
            })?;

        Ok(Self {
            client,
            server: config.server.clone(),
        })
    }

    /// Returns the server URL this client is configured for.
    pub fn server(&self) -> &ServerUrl {
        &self.server
    }

    /// Exchange admin credentials for a bearer token via the password
    /// grant against the master realm.
    ///
    /// The HTTP status is not inspected: the body is parsed either way
    /// and the run fails with an authentication error whenever no
    /// non-empty `access_token` comes back.
    #[instrument(skip(self, credentials), fields(server = %self.server))]
    pub async fn obtain_token(&self, credentials: &AdminCredentials) -> Result<AccessToken, Error> {
        let url = self.server.token_url();
        debug!("requesting admin token");

        let request = TokenRequest {
            username: credentials.username(),
            password: credentials.password(),
            grant_type: GRANT_TYPE_PASSWORD,
            client_id: CLIENT_ID_ADMIN_CLI,
        };

        let response = self
            .client
            .post(&url)
            .form(&request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        trace!(status = %status, "token response");

        let body = response.bytes().await.map_err(transport_error)?;
        let token: TokenResponse = serde_json::from_slice(&body).map_err(|_| {
            ProtocolError::new(
                status.as_u16(),
                None,
                Some("token response was not valid JSON".to_string()),
            )
        })?;

        match token.access_token {
            Some(token) if !token.is_empty() => Ok(AccessToken::new(token)),
            _ => Err(AuthError::InvalidCredentialResponse.into()),
        }
    }

    /// Fetch one page of user records from the admin listing endpoint.
    ///
    /// Returns the raw response body, expected to be a JSON array. A
    /// non-2xx status fails the run; there is no token refresh or retry.
    #[instrument(skip(self, token), fields(server = %self.server, %realm))]
    pub async fn fetch_users_page(
        &self,
        realm: &Realm,
        offset: u32,
        limit: u32,
        token: &AccessToken,
    ) -> Result<Vec<u8>, Error> {
        let url = self.server.users_url(realm);
        let query = UsersQuery {
            first: offset,
            max: limit,
        };
        debug!(offset, limit, "fetching user page");

        let response = self
            .client
            .get(&url)
            .query(&query)
            .header(AUTHORIZATION, format!("Bearer {}", token.as_str()))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        trace!(status = %status, "listing response");

        if !status.is_success() {
            return Err(Error::Protocol(parse_error_response(response).await));
        }

        let body = response.bytes().await.map_err(transport_error)?;
        Ok(body.to_vec())
    }
}

/// Classify a reqwest error into the transport taxonomy.
fn transport_error(err: reqwest::Error) -> Error {
    let transport = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(transport)
}

/// Parse an admin API error response body.
async fn parse_error_response(response: reqwest::Response) -> ProtocolError {
    let status = response.status().as_u16();

    match response.json::<AdminErrorResponse>().await {
        Ok(body) => ProtocolError::new(status, body.error, body.error_description),
        Err(_) => ProtocolError::new(status, None, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use realmdump_core::AdminCredentials;

    fn config() -> ExportConfig {
        ExportConfig::new(
            ServerUrl::new("http://localhost:8080").unwrap(),
            Realm::new("test").unwrap(),
            AdminCredentials::new("admin", "admin"),
        )
    }

    #[test]
    fn client_creation() {
        let cfg = config();
        let client = AdminClient::new(&cfg).unwrap();
        assert_eq!(client.server().as_str(), cfg.server.as_str());
    }
}
