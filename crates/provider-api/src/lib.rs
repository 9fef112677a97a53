//! Provider interfaces for a desktop home-search surface.
//!
//! Providers publish [`HomeEntry`] batches through a [`ResultSink`] and fetch
//! answers through a [`SearchTransport`]. The [`QueryCoalescer`] supplies the
//! debounce/coalescing policy every keystroke-driven provider needs, and the
//! [`ProviderRegistry`] ties provider lifecycles to their registration.

pub mod coalescer;
pub mod entry;
pub mod error;
pub mod registry;
pub mod sink;
pub mod transport;

pub use coalescer::{CoalescerConfig, QueryCoalescer};
pub use entry::{EntryLink, EntryTable, HomeEntry, TemplateData};
pub use error::ProviderRegistryError;
pub use registry::{
    EntrySelection, Host, ProviderDescriptor, ProviderRegistry, RegisteredProvider, SearchProvider,
};
pub use sink::ResultSink;
pub use transport::SearchTransport;
