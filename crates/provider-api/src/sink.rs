use crate::entry::HomeEntry;

/// Destination for entries a provider wants shown on the search surface.
///
/// Both operations are fire and forget: the caller never consumes a return
/// value, and implementations must tolerate revoking a key that is not
/// currently displayed.
pub trait ResultSink: Send + Sync {
    /// Publish a batch of entries, replacing any displayed entries that share
    /// a key with the batch.
    fn publish(&self, entries: Vec<HomeEntry>);

    /// Remove the displayed entry tagged with `key`, if any.
    fn revoke(&self, key: &str);
}
