//! User record wire shape.

use serde::{Deserialize, Serialize};

/// One user record as returned by the admin listing endpoint.
///
/// This documents the payload contract for downstream consumers: the
/// exporter itself never reconstructs individual users — pages travel
/// as raw bytes and only their cardinality drives pagination. All
/// fields are optional on the wire and unknown fields are tolerated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserRepresentation {
    /// Server-assigned user id.
    pub id: Option<String>,
    /// Creation time, milliseconds since the epoch.
    pub created_timestamp: Option<i64>,
    pub username: Option<String>,
    pub enabled: Option<bool>,
    pub email_verified: Option<bool>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    /// Link to the user federation provider that owns this user.
    pub federation_link: Option<String>,
    /// Set when the user is the service account of a client.
    pub service_account_client_id: Option<String>,
    /// Identifier of the federated provider the record came from;
    /// absent for locally stored users.
    pub origin: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_record() {
        let json = r#"{
            "id": "4f6a",
            "createdTimestamp": 1669852800000,
            "username": "jdoe",
            "enabled": true,
            "emailVerified": false,
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "jdoe@example.com",
            "federationLink": "ldap-1",
            "origin": "ldap"
        }"#;

        let user: UserRepresentation = serde_json::from_str(json).unwrap();
        assert_eq!(user.username.as_deref(), Some("jdoe"));
        assert_eq!(user.created_timestamp, Some(1669852800000));
        assert_eq!(user.enabled, Some(true));
        assert_eq!(user.origin.as_deref(), Some("ldap"));
        assert!(user.service_account_client_id.is_none());
    }

    #[test]
    fn tolerates_unknown_and_missing_fields() {
        let json = r#"{"id": "a1", "attributes": {"dept": ["eng"]}}"#;
        let user: UserRepresentation = serde_json::from_str(json).unwrap();
        assert_eq!(user.id.as_deref(), Some("a1"));
        assert!(user.username.is_none());
    }
}
