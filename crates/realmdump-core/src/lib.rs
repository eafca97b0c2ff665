//! realmdump-core - Core types and traits for the Keycloak user exporter.

pub mod credentials;
pub mod error;
pub mod page;
pub mod sink;
pub mod token;
pub mod types;
pub mod user;

pub use credentials::AdminCredentials;
pub use error::Error;
pub use page::UserPage;
pub use sink::PageSink;
pub use token::AccessToken;
pub use types::{Realm, ServerUrl};
pub use user::UserRepresentation;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
