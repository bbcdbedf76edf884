//! Domain name to id resolution.
//!
//! Entries are read through from the metadata store and re-read once they are
//! older than the refresh interval. Misses are never cached, so a domain
//! registered right after a failed lookup is visible on the next request.
//! A lookup that overlaps an invalidation returns what it read but does not
//! cache it.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use cadence_core::{CadenceError, CadenceResult, ServerError};
use cadence_persistence::{DomainConfig, DomainInfo, MetadataManager};
use cadence_proto::DomainStatus;
use parking_lot::RwLock;
use tokio::time::Instant;

/// Resolved domain; info and config are always replaced together
#[derive(Debug, Clone)]
pub struct DomainCacheEntry {
    info: DomainInfo,
    config: DomainConfig,
    refreshed_at: Instant,
}

impl DomainCacheEntry {
    pub fn id(&self) -> &str {
        &self.info.id
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn info(&self) -> &DomainInfo {
        &self.info
    }

    pub fn config(&self) -> &DomainConfig {
        &self.config
    }

    pub fn refreshed_at(&self) -> Instant {
        self.refreshed_at
    }
}

#[derive(Default)]
struct Entries {
    by_name: HashMap<String, Arc<DomainCacheEntry>>,
    /// Bumped by every invalidation
    generation: u64,
}

pub struct DomainCache {
    metadata: Arc<dyn MetadataManager>,
    refresh_interval: Duration,
    entries: RwLock<Entries>,
}

impl DomainCache {
    pub fn new(metadata: Arc<dyn MetadataManager>, refresh_interval: Duration) -> Self {
        Self {
            metadata,
            refresh_interval,
            entries: RwLock::new(Entries::default()),
        }
    }

    /// Resolve a domain by name.
    ///
    /// Fails with `EntityNotExists` when the store has no such domain (or it
    /// is deleted) and with whatever the store raised when it is unreachable.
    pub async fn resolve(&self, name: &str) -> CadenceResult<Arc<DomainCacheEntry>> {
        if let Some(entry) = self.fresh_entry(name) {
            return Ok(entry);
        }

        let generation = self.entries.read().generation;
        let response = match self.metadata.get_domain(name).await {
            Ok(response) => response,
            Err(err) => {
                if matches!(err, CadenceError::Server(ServerError::EntityNotExists { .. })) {
                    self.invalidate(name);
                }
                return Err(err);
            }
        };

        if response.info.status == DomainStatus::Deleted {
            self.invalidate(name);
            return Err(ServerError::entity_not_exists(format!("Domain {name} is deleted.")).into());
        }

        let entry = Arc::new(DomainCacheEntry {
            info: response.info,
            config: response.config,
            refreshed_at: Instant::now(),
        });
        let cached = {
            let mut entries = self.entries.write();
            if entries.generation == generation {
                entries.by_name.insert(name.to_string(), entry.clone());
                true
            } else {
                false
            }
        };

        if cached {
            tracing::debug!(domain = %name, domain_id = %entry.id(), "Domain cache refreshed");
        } else {
            tracing::debug!(domain = %name, "Domain invalidated during lookup, not caching");
        }
        Ok(entry)
    }

    /// Drop the entry so the next resolve reads the store.
    pub fn invalidate(&self, name: &str) {
        let mut entries = self.entries.write();
        entries.generation += 1;
        entries.by_name.remove(name);
    }

    pub fn len(&self) -> usize {
        self.entries.read().by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().by_name.is_empty()
    }

    fn fresh_entry(&self, name: &str) -> Option<Arc<DomainCacheEntry>> {
        let entries = self.entries.read();
        entries
            .by_name
            .get(name)
            .filter(|entry| entry.refreshed_at.elapsed() < self.refresh_interval)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;
    use cadence_persistence::{
        CreateDomainRequest, CreateDomainResponse, GetDomainResponse, UpdateDomainRequest,
    };
    use cadence_testsuite::InMemoryMetadataManager;
    use tokio::sync::Notify;

    /// Holds the first `get_domain` after it has read the store, until released.
    struct PausingMetadata {
        inner: Arc<InMemoryMetadataManager>,
        pause_next: AtomicBool,
        read_done: Notify,
        release: Notify,
    }

    #[async_trait]
    impl MetadataManager for PausingMetadata {
        async fn create_domain(
            &self,
            request: CreateDomainRequest,
        ) -> CadenceResult<CreateDomainResponse> {
            self.inner.create_domain(request).await
        }

        async fn get_domain(&self, name: &str) -> CadenceResult<GetDomainResponse> {
            let response = self.inner.get_domain(name).await;
            if self.pause_next.swap(false, Ordering::SeqCst) {
                self.read_done.notify_one();
                self.release.notified().await;
            }
            response
        }

        async fn update_domain(&self, request: UpdateDomainRequest) -> CadenceResult<()> {
            self.inner.update_domain(request).await
        }
    }

    async fn register(metadata: &InMemoryMetadataManager, name: &str) -> String {
        metadata
            .create_domain(CreateDomainRequest {
                name: name.to_string(),
                status: DomainStatus::Registered,
                description: "orders".to_string(),
                owner_email: "team@example.com".to_string(),
                retention: 3,
                emit_metric: true,
            })
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_resolve_caches_entry() {
        let metadata = Arc::new(InMemoryMetadataManager::new());
        let id = register(&metadata, "orders").await;
        let cache = DomainCache::new(metadata.clone(), Duration::from_secs(60));

        let first = cache.resolve("orders").await.unwrap();
        let second = cache.resolve("orders").await.unwrap();

        assert_eq!(first.id(), id);
        assert_eq!(second.id(), id);
        assert_eq!(metadata.get_domain_calls(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_domain_is_not_negatively_cached() {
        let metadata = Arc::new(InMemoryMetadataManager::new());
        let cache = DomainCache::new(metadata.clone(), Duration::from_secs(60));

        let err = cache.resolve("late").await.unwrap_err();
        assert!(matches!(
            err,
            CadenceError::Server(ServerError::EntityNotExists { .. })
        ));
        assert!(cache.is_empty());

        register(&metadata, "late").await;
        assert!(cache.resolve("late").await.is_ok());
        assert_eq!(metadata.get_domain_calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_entry_is_refreshed() {
        let metadata = Arc::new(InMemoryMetadataManager::new());
        register(&metadata, "orders").await;
        let cache = DomainCache::new(metadata.clone(), Duration::from_secs(10));

        let before = cache.resolve("orders").await.unwrap();
        assert_eq!(before.info().description, "orders");

        let mut stored = metadata.get_domain("orders").await.unwrap();
        stored.info.description = "orders v2".to_string();
        stored.config.retention = 7;
        metadata
            .update_domain(UpdateDomainRequest {
                info: stored.info,
                config: stored.config,
            })
            .await
            .unwrap();

        let cached = cache.resolve("orders").await.unwrap();
        assert_eq!(cached.info().description, "orders");

        tokio::time::advance(Duration::from_secs(11)).await;

        let refreshed = cache.resolve("orders").await.unwrap();
        assert_eq!(refreshed.info().description, "orders v2");
        assert_eq!(refreshed.config().retention, 7);
    }

    #[tokio::test]
    async fn test_invalidate_forces_refetch() {
        let metadata = Arc::new(InMemoryMetadataManager::new());
        register(&metadata, "orders").await;
        let cache = DomainCache::new(metadata.clone(), Duration::from_secs(60));

        cache.resolve("orders").await.unwrap();
        cache.invalidate("orders");
        cache.resolve("orders").await.unwrap();

        assert_eq!(metadata.get_domain_calls(), 2);
    }

    #[tokio::test]
    async fn test_invalidate_during_lookup_is_not_undone() {
        let inner = Arc::new(InMemoryMetadataManager::new());
        register(&inner, "orders").await;
        let store = Arc::new(PausingMetadata {
            inner: inner.clone(),
            pause_next: AtomicBool::new(true),
            read_done: Notify::new(),
            release: Notify::new(),
        });
        let cache = Arc::new(DomainCache::new(store.clone(), Duration::from_secs(60)));

        let lookup = tokio::spawn({
            let cache = cache.clone();
            async move { cache.resolve("orders").await }
        });
        store.read_done.notified().await;

        let mut stored = inner.get_domain("orders").await.unwrap();
        stored.info.description = "orders v2".to_string();
        inner
            .update_domain(UpdateDomainRequest {
                info: stored.info,
                config: stored.config,
            })
            .await
            .unwrap();
        cache.invalidate("orders");
        store.release.notify_one();

        let raced = lookup.await.unwrap().unwrap();
        assert_eq!(raced.info().description, "orders");
        assert!(cache.is_empty());

        let next = cache.resolve("orders").await.unwrap();
        assert_eq!(next.info().description, "orders v2");
    }

    #[tokio::test]
    async fn test_store_outage_surfaces_error() {
        let metadata = Arc::new(InMemoryMetadataManager::new());
        register(&metadata, "orders").await;
        let cache = DomainCache::new(metadata.clone(), Duration::from_secs(60));

        metadata.set_unavailable(true);
        let err = cache.resolve("orders").await.unwrap_err();
        assert!(matches!(err, CadenceError::Persistence(_)));
    }

    #[tokio::test]
    async fn test_deleted_domain_does_not_resolve() {
        let metadata = Arc::new(InMemoryMetadataManager::new());
        register(&metadata, "gone").await;
        let mut stored = metadata.get_domain("gone").await.unwrap();
        stored.info.status = DomainStatus::Deleted;
        metadata
            .update_domain(UpdateDomainRequest {
                info: stored.info,
                config: stored.config,
            })
            .await
            .unwrap();

        let cache = DomainCache::new(metadata, Duration::from_secs(60));
        let err = cache.resolve("gone").await.unwrap_err();
        assert!(matches!(
            err,
            CadenceError::Server(ServerError::EntityNotExists { .. })
        ));
    }
}
