use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::entry::{HomeEntry, TemplateData};
use crate::sink::ResultSink;

/// Static metadata describing a provider contributed to the search surface.
#[derive(Debug, Clone, Copy)]
pub struct ProviderDescriptor {
    /// Stable identifier used to route queries and selections to the provider.
    pub id: &'static str,
    /// Human-readable provider name.
    pub title: &'static str,
}

/// Surface the host platform exposes back to providers.
pub trait Host: Send + Sync {
    /// Open a URL in the host environment.
    fn open_url(&self, url: &str) -> Result<()>;
}

/// A displayed entry the user acted on, routed back to its provider.
#[derive(Debug, Clone)]
pub struct EntrySelection {
    /// Identifier of the provider that published the entry.
    pub provider_id: String,
    /// Key of the selected entry.
    pub key: String,
    /// Name of the dispatched action.
    pub action: String,
    /// Payload the entry was published with.
    pub data: TemplateData,
}

/// A pluggable search integration registered with the home surface.
///
/// One instance services a single named query stream. Its controller state is
/// created on registration and torn down on deregistration; implementations
/// with in-flight work must make deregistration cancel it.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Static descriptor advertising provider metadata.
    fn descriptor(&self) -> &'static ProviderDescriptor;

    /// The provider is being registered with the given host.
    async fn register(&self, host: Arc<dyn Host>) -> Result<()>;

    /// The provider is being deregistered; release all query state.
    async fn deregister(&self) -> Result<()>;

    /// Static application entries contributed independently of any query.
    async fn app_entries(&self) -> Result<Vec<HomeEntry>> {
        Ok(Vec::new())
    }

    /// Feed a query into the provider.
    ///
    /// Results arrive through `sink` asynchronously; the returned entries are
    /// placeholders (typically a busy indicator) to display immediately.
    fn search(&self, query: &str, sink: Arc<dyn ResultSink>) -> Vec<HomeEntry>;

    /// An entry published by this provider was acted on.
    ///
    /// Returns `true` when the selection was handled.
    async fn entry_selected(&self, selection: &EntrySelection) -> Result<bool> {
        let _ = selection;
        Ok(false)
    }
}
