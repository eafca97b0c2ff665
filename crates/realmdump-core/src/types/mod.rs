//! Validated input types.

mod realm;
mod server_url;

pub use realm::Realm;
pub use server_url::ServerUrl;
