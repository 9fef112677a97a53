use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use homesearch_provider_api::{
    CoalescerConfig, EntrySelection, HomeEntry, Host, ProviderDescriptor, QueryCoalescer,
    ResultSink, SearchProvider, SearchTransport,
};
use parking_lot::Mutex;
use tracing::info;

use crate::settings::FactSetSettings;
use crate::transport::FactSetProxyTransport;
use crate::{BUSY_ENTRY_KEY, PROVIDER_ID};

pub static FACTSET_DESCRIPTOR: ProviderDescriptor = ProviderDescriptor {
    id: PROVIDER_ID,
    title: "FactSet",
};

#[must_use]
pub fn descriptor() -> &'static ProviderDescriptor {
    &FACTSET_DESCRIPTOR
}

/// Search provider backed by the FactSet Search Answers API.
///
/// Keystroke-driven queries run through a [`QueryCoalescer`], so at most one
/// proxy request is in flight at a time and a single busy placeholder stays
/// visible until the newest query has been answered.
pub struct FactSetProvider {
    settings: FactSetSettings,
    coalescer: QueryCoalescer,
    host: Mutex<Option<Arc<dyn Host>>>,
}

impl FactSetProvider {
    /// Create a provider using the real proxy transport.
    #[must_use]
    pub fn new(settings: FactSetSettings) -> Self {
        let transport = Arc::new(FactSetProxyTransport::new(settings.clone()));
        Self::with_transport(settings, transport)
    }

    /// Create a provider with a custom transport.
    #[must_use]
    pub fn with_transport(settings: FactSetSettings, transport: Arc<dyn SearchTransport>) -> Self {
        Self {
            settings,
            coalescer: QueryCoalescer::new(transport, CoalescerConfig::new(BUSY_ENTRY_KEY)),
            host: Mutex::new(None),
        }
    }

    /// The placeholder entry shown while a search is outstanding.
    fn busy_entry(&self) -> HomeEntry {
        let mut entry = HomeEntry::new(BUSY_ENTRY_KEY, "FactSet Searching...");
        if let Some(icon) = self
            .settings
            .busy_icon
            .as_ref()
            .or(self.settings.icon.as_ref())
        {
            entry = entry.with_icon(icon.clone());
        }
        entry
    }
}

#[async_trait]
impl SearchProvider for FactSetProvider {
    fn descriptor(&self) -> &'static ProviderDescriptor {
        &FACTSET_DESCRIPTOR
    }

    async fn register(&self, host: Arc<dyn Host>) -> Result<()> {
        *self.host.lock() = Some(host);
        info!("registering factset provider");
        Ok(())
    }

    async fn deregister(&self) -> Result<()> {
        self.coalescer.reset();
        self.host.lock().take();
        Ok(())
    }

    fn search(&self, query: &str, sink: Arc<dyn ResultSink>) -> Vec<HomeEntry> {
        if self.settings.proxy_endpoint.is_empty() {
            return Vec::new();
        }
        if self.coalescer.submit(query, sink) {
            vec![self.busy_entry()]
        } else {
            Vec::new()
        }
    }

    async fn entry_selected(&self, selection: &EntrySelection) -> Result<bool> {
        if selection.provider_id != PROVIDER_ID {
            return Ok(false);
        }
        let Some(index) = selection
            .action
            .strip_prefix("open")
            .and_then(|rest| rest.parse::<usize>().ok())
        else {
            return Ok(false);
        };
        let Some(link) = selection.data.links.get(index) else {
            return Ok(false);
        };
        let host = self.host.lock().clone();
        match host {
            Some(host) => {
                host.open_url(&link.url)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
