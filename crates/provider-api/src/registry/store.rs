use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::entry::HomeEntry;
use crate::error::ProviderRegistryError;
use crate::sink::ResultSink;

use super::provider::{EntrySelection, Host, ProviderDescriptor, SearchProvider};
use super::registered_provider::RegisteredProvider;

/// Registry of all search providers contributing to the home surface.
///
/// Registration drives the provider lifecycle: a provider's `register` hook
/// runs when it is added and its `deregister` hook runs when it is removed,
/// so per-provider query state lives exactly as long as the registration.
pub struct ProviderRegistry {
    providers: IndexMap<&'static str, RegisteredProvider>,
    host: Arc<dyn Host>,
}

impl ProviderRegistry {
    /// Create an empty registry whose providers call back into `host`.
    #[must_use]
    pub fn new(host: Arc<dyn Host>) -> Self {
        Self {
            providers: IndexMap::new(),
            host,
        }
    }

    /// Register a provider and run its registration hook.
    pub async fn register<P>(&mut self, provider: P) -> Result<(), ProviderRegistryError>
    where
        P: SearchProvider + 'static,
    {
        let descriptor = provider.descriptor();
        if self.providers.contains_key(descriptor.id) {
            return Err(ProviderRegistryError::DuplicateId { id: descriptor.id });
        }

        let provider: Arc<dyn SearchProvider> = Arc::new(provider);
        provider
            .register(Arc::clone(&self.host))
            .await
            .map_err(|source| ProviderRegistryError::RegistrationFailed {
                id: descriptor.id,
                source,
            })?;

        debug!("registered provider '{}'", descriptor.id);
        self.providers
            .insert(descriptor.id, RegisteredProvider::new(descriptor, provider));
        Ok(())
    }

    /// Remove the provider registered under `id` and run its deregistration
    /// hook. Hook failures are logged; the provider is removed regardless.
    pub async fn deregister(&mut self, id: &str) -> Option<RegisteredProvider> {
        let removed = self.providers.shift_remove(id)?;
        if let Err(err) = removed.provider().deregister().await {
            warn!("provider '{id}' failed to deregister: {err:#}");
        }
        debug!("deregistered provider '{id}'");
        Some(removed)
    }

    /// Lookup a provider by identifier.
    #[must_use]
    pub fn provider(&self, id: &str) -> Option<Arc<dyn SearchProvider>> {
        self.providers.get(id).map(RegisteredProvider::provider)
    }

    /// Iterate over all registered providers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredProvider> {
        self.providers.values()
    }

    /// Iterate over registered provider descriptors.
    pub fn descriptors(&self) -> impl Iterator<Item = &'static ProviderDescriptor> + '_ {
        self.providers.values().map(RegisteredProvider::descriptor)
    }

    /// Return the number of registered providers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Returns `true` when no providers have been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Returns `true` if a provider has been registered for the identifier.
    #[must_use]
    pub fn contains_id(&self, id: &str) -> bool {
        self.providers.contains_key(id)
    }

    /// Fan a query out to every registered provider, collecting the
    /// placeholder entries each one wants displayed immediately.
    pub fn search_all(&self, query: &str, sink: &Arc<dyn ResultSink>) -> Vec<HomeEntry> {
        let mut entries = Vec::new();
        for registered in self.providers.values() {
            entries.extend(registered.provider().search(query, Arc::clone(sink)));
        }
        entries
    }

    /// Collect the static application entries of every registered provider.
    /// Provider failures are logged and skipped.
    pub async fn app_entries(&self) -> Vec<HomeEntry> {
        let mut entries = Vec::new();
        for registered in self.providers.values() {
            match registered.provider().app_entries().await {
                Ok(mut provided) => entries.append(&mut provided),
                Err(err) => warn!(
                    "provider '{}' failed to list app entries: {err:#}",
                    registered.id()
                ),
            }
        }
        entries
    }

    /// Route a selection to the provider that published the entry.
    ///
    /// Returns `true` when a provider handled it.
    pub async fn dispatch_selection(&self, selection: &EntrySelection) -> bool {
        let Some(registered) = self.providers.get(selection.provider_id.as_str()) else {
            return false;
        };
        match registered.provider().entry_selected(selection).await {
            Ok(handled) => handled,
            Err(err) => {
                warn!(
                    "provider '{}' failed to handle selection: {err:#}",
                    selection.provider_id
                );
                false
            }
        }
    }
}
