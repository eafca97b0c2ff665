//! realmdump-admin - Keycloak admin REST client and export loop.

mod client;
mod config;
mod endpoints;
mod export;

pub use client::AdminClient;
pub use config::ExportConfig;
pub use export::{ExportOutcome, Exporter};
