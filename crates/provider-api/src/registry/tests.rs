use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::Mutex;

use super::*;
use crate::entry::HomeEntry;
use crate::error::ProviderRegistryError;
use crate::sink::ResultSink;

static TEST_DESCRIPTOR: ProviderDescriptor = ProviderDescriptor {
    id: "test",
    title: "Test",
};

static ALT_DESCRIPTOR: ProviderDescriptor = ProviderDescriptor {
    id: "alt",
    title: "Alternate",
};

#[derive(Default)]
struct TestProvider {
    lifecycle: Arc<AtomicUsize>,
}

#[async_trait]
impl SearchProvider for TestProvider {
    fn descriptor(&self) -> &'static ProviderDescriptor {
        &TEST_DESCRIPTOR
    }

    async fn register(&self, _host: Arc<dyn Host>) -> Result<()> {
        self.lifecycle.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn deregister(&self) -> Result<()> {
        self.lifecycle.fetch_sub(1, Ordering::SeqCst);
        Ok(())
    }

    fn search(&self, query: &str, _sink: Arc<dyn ResultSink>) -> Vec<HomeEntry> {
        vec![HomeEntry::new("test-busy", query)]
    }
}

struct AlternateProvider;

#[async_trait]
impl SearchProvider for AlternateProvider {
    fn descriptor(&self) -> &'static ProviderDescriptor {
        &ALT_DESCRIPTOR
    }

    async fn register(&self, _host: Arc<dyn Host>) -> Result<()> {
        Ok(())
    }

    async fn deregister(&self) -> Result<()> {
        Ok(())
    }

    fn search(&self, _query: &str, _sink: Arc<dyn ResultSink>) -> Vec<HomeEntry> {
        Vec::new()
    }
}

#[derive(Default)]
struct NullHost {
    opened: Mutex<Vec<String>>,
}

impl Host for NullHost {
    fn open_url(&self, url: &str) -> Result<()> {
        self.opened.lock().push(url.to_owned());
        Ok(())
    }
}

#[derive(Default)]
struct NullSink;

impl ResultSink for NullSink {
    fn publish(&self, _entries: Vec<HomeEntry>) {}
    fn revoke(&self, _key: &str) {}
}

fn registry() -> ProviderRegistry {
    ProviderRegistry::new(Arc::new(NullHost::default()))
}

#[tokio::test]
async fn registers_providers_in_insertion_order() {
    let mut registry = registry();
    registry
        .register(TestProvider::default())
        .await
        .expect("register test provider");
    registry
        .register(AlternateProvider)
        .await
        .expect("register alternate provider");

    let ids: Vec<&str> = registry.descriptors().map(|d| d.id).collect();
    assert_eq!(ids, vec!["test", "alt"]);
    assert_eq!(registry.len(), 2);
    assert!(registry.contains_id("test"));
}

#[tokio::test]
async fn lifecycle_hooks_run_on_register_and_deregister() {
    let lifecycle = Arc::new(AtomicUsize::new(0));
    let mut registry = registry();
    registry
        .register(TestProvider {
            lifecycle: Arc::clone(&lifecycle),
        })
        .await
        .expect("register test provider");
    assert_eq!(lifecycle.load(Ordering::SeqCst), 1);

    registry.deregister("test").await.expect("provider removed");
    assert_eq!(lifecycle.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn duplicate_registration_returns_error() {
    let mut registry = registry();
    registry
        .register(TestProvider::default())
        .await
        .expect("register test provider");

    let error = registry
        .register(TestProvider::default())
        .await
        .expect_err("expected duplicate registration to fail");
    assert!(matches!(
        error,
        ProviderRegistryError::DuplicateId { id: "test" }
    ));
}

#[tokio::test]
async fn deregister_removes_provider_and_runs_hook() {
    let mut registry = registry();
    registry
        .register(TestProvider::default())
        .await
        .expect("register test provider");

    let removed = registry
        .deregister("test")
        .await
        .expect("provider removed");
    assert_eq!(removed.id(), "test");
    assert!(registry.is_empty());
    assert!(registry.provider("test").is_none());
    assert!(registry.deregister("test").await.is_none());
}

#[tokio::test]
async fn search_all_collects_placeholder_entries() {
    let mut registry = registry();
    registry
        .register(TestProvider::default())
        .await
        .expect("register test provider");
    registry
        .register(AlternateProvider)
        .await
        .expect("register alternate provider");

    let sink: Arc<dyn ResultSink> = Arc::new(NullSink);
    let entries = registry.search_all("abc def", &sink);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].title, "abc def");
}

#[tokio::test]
async fn dispatch_selection_routes_by_provider_id() {
    struct SelectingProvider {
        selections: AtomicUsize,
    }

    #[async_trait]
    impl SearchProvider for SelectingProvider {
        fn descriptor(&self) -> &'static ProviderDescriptor {
            &TEST_DESCRIPTOR
        }

        async fn register(&self, _host: Arc<dyn Host>) -> Result<()> {
            Ok(())
        }

        async fn deregister(&self) -> Result<()> {
            Ok(())
        }

        fn search(&self, _query: &str, _sink: Arc<dyn ResultSink>) -> Vec<HomeEntry> {
            Vec::new()
        }

        async fn entry_selected(&self, _selection: &EntrySelection) -> Result<bool> {
            self.selections.fetch_add(1, Ordering::SeqCst);
            Ok(true)
        }
    }

    let mut registry = registry();
    registry
        .register(SelectingProvider {
            selections: AtomicUsize::new(0),
        })
        .await
        .expect("register selecting provider");

    let selection = EntrySelection {
        provider_id: "test".to_owned(),
        key: "entry".to_owned(),
        action: "open0".to_owned(),
        data: crate::entry::TemplateData::default(),
    };
    assert!(registry.dispatch_selection(&selection).await);

    let unknown = EntrySelection {
        provider_id: "missing".to_owned(),
        ..selection
    };
    assert!(!registry.dispatch_selection(&unknown).await);
}
