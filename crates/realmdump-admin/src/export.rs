//! The paginated export loop.

use tracing::{debug, info, instrument};

use realmdump_core::error::{Error, ProtocolError};
use realmdump_core::{PageSink, UserPage};

use crate::client::AdminClient;
use crate::config::ExportConfig;

/// Counters describing one completed export run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportOutcome {
    /// Non-empty pages handed to the sink and committed.
    pub pages: u64,
    /// Total user records across committed pages.
    pub users: u64,
    /// Listing requests issued, including the terminal empty fetch.
    pub fetches: u64,
}

/// One-shot exporter for a realm's full user roster.
///
/// Each [`run`](Exporter::run) re-authenticates and re-paginates from
/// offset 0; nothing is cached or diffed between runs.
#[derive(Debug, Clone)]
pub struct Exporter {
    client: AdminClient,
    config: ExportConfig,
}

impl Exporter {
    /// Build an exporter, constructing the HTTP client from the
    /// configuration.
    pub fn new(config: ExportConfig) -> Result<Self, Error> {
        let client = AdminClient::new(&config)?;
        Ok(Self { client, config })
    }

    /// Build an exporter around an existing client.
    ///
    /// Lets a host share one client across scheduled runs. The client
    /// carries no per-run state.
    pub fn with_client(client: AdminClient, config: ExportConfig) -> Self {
        Self { client, config }
    }

    /// Run one full export: obtain a token, then fetch, emit, and
    /// commit pages in offset order until the listing comes back empty.
    ///
    /// The terminal empty page is never emitted. A page smaller than
    /// the page size does not end the loop; only an exact-zero-count
    /// page does, so exhaustion is always confirmed by one final fetch.
    ///
    /// Any failure aborts the run immediately. Pages committed before
    /// the failure stay committed; there is no rollback and no retry.
    #[instrument(skip(self, sink), fields(realm = %self.config.realm))]
    pub async fn run<S: PageSink>(&self, sink: &mut S) -> Result<ExportOutcome, Error> {
        let token = self.client.obtain_token(&self.config.credentials).await?;

        let limit = self.config.page_size.get();
        let mut offset: u32 = 0;
        let mut outcome = ExportOutcome::default();

        loop {
            let body = self
                .client
                .fetch_users_page(&self.config.realm, offset, limit, &token)
                .await?;
            outcome.fetches += 1;

            let count = count_records(&body)?;
            if count == 0 {
                debug!(offset, "empty page, roster exhausted");
                break;
            }

            let page = UserPage {
                offset,
                count,
                body,
            };
            sink.emit(&page).await?;
            sink.commit().await?;
            debug!(offset, count, "page committed");

            outcome.pages += 1;
            outcome.users += count as u64;
            offset += limit;
        }

        info!(
            pages = outcome.pages,
            users = outcome.users,
            fetches = outcome.fetches,
            "export complete"
        );
        Ok(outcome)
    }
}

/// Count the user records in a raw listing body.
///
/// Only the cardinality matters to the loop; elements stay opaque.
fn count_records(body: &[u8]) -> Result<usize, Error> {
    let records: Vec<serde_json::Value> = serde_json::from_slice(body)
        .map_err(|e| ProtocolError::malformed_body(format!("expected a JSON array: {e}")))?;
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_array_elements() {
        assert_eq!(count_records(b"[]").unwrap(), 0);
        assert_eq!(count_records(br#"[{"id":"a"},{"id":"b"}]"#).unwrap(), 2);
    }

    #[test]
    fn rejects_non_array_body() {
        assert!(count_records(br#"{"error":"unauthorized"}"#).is_err());
        assert!(count_records(b"not json").is_err());
    }
}
