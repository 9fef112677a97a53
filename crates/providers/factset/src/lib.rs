//! FactSet Search Answers integration for the homesearch surface.
//!
//! Free-text queries are debounced and coalesced before being forwarded to
//! the FactSet API through the backend proxy; answers come back as structured
//! [`HomeEntry`](homesearch_provider_api::HomeEntry) payloads with the
//! answer's fields, tables, and application links flattened in.

mod answer;
mod provider;
mod settings;
pub mod shapes;
mod transport;

pub use provider::{FACTSET_DESCRIPTOR, FactSetProvider, descriptor};
pub use settings::FactSetSettings;
pub use transport::FactSetProxyTransport;

/// Provider id.
pub const PROVIDER_ID: &str = "factset";

/// The key used for a FactSet answer entry.
pub const ANSWER_ENTRY_KEY: &str = "factset-answer";

/// The key used for the FactSet busy placeholder.
pub const BUSY_ENTRY_KEY: &str = "factset-busy";
