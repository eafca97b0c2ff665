//! Page sink trait.

use async_trait::async_trait;

use crate::page::UserPage;
use crate::Result;

/// The downstream collaborator that receives exported pages.
///
/// The export loop calls [`emit`](PageSink::emit) followed by
/// [`commit`](PageSink::commit) once per non-empty page, strictly in
/// offset order, and does not fetch the next page until `commit`
/// returns. A commit is final: if a later fetch fails, pages committed
/// earlier in the same run are not rolled back.
///
/// The terminal empty page is never offered to the sink.
#[async_trait]
pub trait PageSink: Send {
    /// Hand over one page of user records.
    async fn emit(&mut self, page: &UserPage) -> Result<()>;

    /// Make the previously emitted page durable downstream.
    async fn commit(&mut self) -> Result<()>;
}
