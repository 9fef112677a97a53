use std::sync::Arc;

use super::provider::{ProviderDescriptor, SearchProvider};

/// Metadata and implementation pair stored by the registry.
#[derive(Clone)]
pub struct RegisteredProvider {
    descriptor: &'static ProviderDescriptor,
    provider: Arc<dyn SearchProvider>,
}

impl RegisteredProvider {
    #[must_use]
    pub fn new(descriptor: &'static ProviderDescriptor, provider: Arc<dyn SearchProvider>) -> Self {
        Self {
            descriptor,
            provider,
        }
    }

    #[must_use]
    pub fn id(&self) -> &'static str {
        self.descriptor.id
    }

    #[must_use]
    pub fn descriptor(&self) -> &'static ProviderDescriptor {
        self.descriptor
    }

    #[must_use]
    pub fn provider(&self) -> Arc<dyn SearchProvider> {
        Arc::clone(&self.provider)
    }
}
