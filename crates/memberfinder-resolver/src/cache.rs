//! Build-once catalogue cache.
//!
//! Each target gets a [`OnceCell`] slot. The map lock is only held long
//! enough to fetch or insert the slot; the build itself runs inside the
//! cell, so concurrent first requests for one target block on a single
//! build while other targets proceed.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use memberfinder_core::{ResolutionError, TypeHash, TypeHost};
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::catalogue::Catalogue;
use crate::config::ResolverConfig;

type Slot = Arc<OnceCell<Arc<Catalogue>>>;

/// Catalogues keyed by target type.
#[derive(Default)]
pub struct CatalogueCache {
    slots: RwLock<FxHashMap<TypeHash, Slot>>,
    builds: AtomicUsize,
}

impl CatalogueCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the catalogue for `target`, building it on first request.
    ///
    /// Invalid targets fail before a slot is created. A build that fails
    /// leaves the slot empty, so the next request tries again.
    pub fn get_or_build<H: TypeHost + ?Sized>(
        &self,
        target: TypeHash,
        host: &H,
        config: &ResolverConfig,
    ) -> Result<Arc<Catalogue>, ResolutionError> {
        Catalogue::check_target(target, host)?;

        let slot = self.slot(target);
        slot.get_or_try_init(|| {
            self.builds.fetch_add(1, Ordering::Relaxed);
            Catalogue::build(target, host, config).map(Arc::new)
        })
        .cloned()
    }

    fn slot(&self, target: TypeHash) -> Slot {
        if let Some(slot) = self.slots.read().get(&target) {
            trace!(?target, "catalogue slot hit");
            return Arc::clone(slot);
        }

        let mut slots = self.slots.write();
        Arc::clone(slots.entry(target).or_default())
    }

    /// Get an already built catalogue without building.
    pub fn get(&self, target: TypeHash) -> Option<Arc<Catalogue>> {
        self.slots
            .read()
            .get(&target)
            .and_then(|slot| slot.get().cloned())
    }

    /// Number of built catalogues.
    pub fn len(&self) -> usize {
        self.slots
            .read()
            .values()
            .filter(|slot| slot.get().is_some())
            .count()
    }

    /// Check if no catalogue has been built yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of catalogue builds started, successful or not.
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::Relaxed)
    }
}

impl fmt::Debug for CatalogueCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogueCache")
            .field("catalogues", &self.len())
            .field("builds", &self.build_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use memberfinder_core::{ClassEntry, PrimitiveKind};
    use memberfinder_registry::TypeRegistry;
    use std::thread;

    fn registry() -> (TypeRegistry, TypeHash) {
        let mut registry = TypeRegistry::with_primitives();
        let widget = registry
            .register_type(ClassEntry::new("Widget").with_constructor(vec![]).into())
            .unwrap();
        (registry, widget)
    }

    #[test]
    fn builds_once() {
        let (registry, widget) = registry();
        let cache = CatalogueCache::new();
        let config = ResolverConfig::default();

        let first = cache.get_or_build(widget, &registry, &config).unwrap();
        let second = cache.get_or_build(widget, &registry, &config).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.build_count(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn get_does_not_build() {
        let (registry, widget) = registry();
        let cache = CatalogueCache::new();

        assert!(cache.get(widget).is_none());
        assert!(cache.is_empty());

        cache
            .get_or_build(widget, &registry, &ResolverConfig::default())
            .unwrap();
        assert!(cache.get(widget).is_some());
    }

    #[test]
    fn invalid_target_is_not_cached() {
        let (registry, _) = registry();
        let cache = CatalogueCache::new();
        let int = PrimitiveKind::Int32.type_hash();

        let err = cache
            .get_or_build(int, &registry, &ResolverConfig::default())
            .unwrap_err();
        assert!(err.is_invalid_target());
        assert_eq!(cache.build_count(), 0);
        assert!(cache.slots.read().is_empty());
    }

    #[test]
    fn concurrent_requests_share_one_build() {
        let (registry, widget) = registry();
        let cache = CatalogueCache::new();
        let config = ResolverConfig::default();

        let catalogues: Vec<_> = thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(|| cache.get_or_build(widget, &registry, &config).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(cache.build_count(), 1);
        assert!(catalogues.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    }
}
