use anyhow::Result;
use async_trait::async_trait;

use crate::entry::HomeEntry;

/// Executes a search query against a backend.
///
/// A transport makes a single attempt per call and never retries internally.
/// `Ok(None)` means the backend had no answer for the query; errors carry a
/// diagnostic and are logged by the caller rather than surfaced to the user.
#[async_trait]
pub trait SearchTransport: Send + Sync {
    async fn execute(&self, query: &str) -> Result<Option<HomeEntry>>;
}
