mod provider;
mod registered_provider;
mod store;

#[cfg(test)]
mod tests;

pub use provider::{EntrySelection, Host, ProviderDescriptor, SearchProvider};
pub use registered_provider::RegisteredProvider;
pub use store::ProviderRegistry;
