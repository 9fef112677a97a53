use thiserror::Error;

/// Errors that can occur when mutating the [`ProviderRegistry`](crate::ProviderRegistry).
#[derive(Debug, Error)]
pub enum ProviderRegistryError {
    /// A provider attempted to register an identifier that already exists in
    /// the registry.
    #[error("provider id '{id}' is already registered")]
    DuplicateId { id: &'static str },

    /// The provider's own registration hook failed.
    #[error("provider '{id}' failed to register")]
    RegistrationFailed {
        id: &'static str,
        #[source]
        source: anyhow::Error,
    },
}
