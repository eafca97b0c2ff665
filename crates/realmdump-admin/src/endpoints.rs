//! Admin endpoint wire types.

use serde::{Deserialize, Serialize};

/// Grant type sent to the token endpoint.
pub const GRANT_TYPE_PASSWORD: &str = "password";

/// Fixed client id for the admin password grant.
pub const CLIENT_ID_ADMIN_CLI: &str = "admin-cli";

/// Form body for the password grant token exchange.
#[derive(Debug, Serialize)]
pub struct TokenRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub grant_type: &'a str,
    pub client_id: &'a str,
}

/// Response from the token endpoint.
///
/// Everything except `access_token` is ignored.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
}

/// Pagination query parameters for the user listing endpoint.
#[derive(Debug, Serialize)]
pub struct UsersQuery {
    /// Offset of the first record to return.
    pub first: u32,
    /// Maximum number of records to return.
    pub max: u32,
}

/// Error body shape returned by the admin API.
///
/// Keycloak uses both `error`/`error_description` (OAuth endpoints) and
/// `errorMessage` (admin endpoints).
#[derive(Debug, Deserialize)]
pub struct AdminErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default, alias = "errorMessage")]
    pub error_description: Option<String>,
}
