//! Tests for plugging a custom host type system into the resolver, and for
//! sharing one resolver across threads.

use std::collections::VecDeque;
use std::sync::Arc;
use std::thread;

use memberfinder::prelude::*;
use memberfinder::TypeEntry;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing_subscriber::EnvFilter;

/// Route resolver logs to the test output; `RUST_LOG=memberfinder_resolver=trace`
/// shows per-candidate decisions.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A host that answers supertype queries by walking declared supertypes
/// directly, with no precomputed hierarchy.
#[derive(Default)]
struct ReflectionHost {
    types: FxHashMap<TypeHash, TypeEntry>,
}

impl ReflectionHost {
    fn with(mut self, entry: impl Into<TypeEntry>) -> Self {
        let entry = entry.into();
        self.types.insert(entry.type_hash(), entry);
        self
    }
}

impl TypeHost for ReflectionHost {
    fn get_type(&self, hash: TypeHash) -> Option<&TypeEntry> {
        self.types.get(&hash)
    }

    fn supertypes(&self, hash: TypeHash) -> Vec<TypeHash> {
        let mut seen = FxHashSet::default();
        let mut result = Vec::new();
        let mut queue: VecDeque<TypeHash> = self
            .get_type(hash)
            .map(|e| e.direct_supertypes().into())
            .unwrap_or_default();

        while let Some(next) = queue.pop_front() {
            if next == hash || !seen.insert(next) {
                continue;
            }
            result.push(next);
            if let Some(entry) = self.get_type(next) {
                queue.extend(entry.direct_supertypes());
            }
        }
        result
    }
}

fn reflection_host() -> ReflectionHost {
    let animal = TypeHash::from_name("Animal");
    let pet = TypeHash::from_name("Pet");
    let dog = TypeHash::from_name("Dog");
    let int = PrimitiveKind::Int32.type_hash();

    ReflectionHost::default()
        .with(ClassEntry::new("Animal").with_method("feed", vec![int]))
        .with(InterfaceEntry::new("Pet"))
        .with(ClassEntry::new("Dog").with_base(animal).with_interface(pet))
        .with(
            ClassEntry::new("Shelter")
                .with_constructor(vec![])
                .with_method("admit", vec![animal])
                .with_method("admit", vec![dog])
                .with_method("adopt", vec![pet]),
        )
        .with(memberfinder::PrimitiveEntry::new(PrimitiveKind::Int32))
}

// =============================================================================
// Custom Host
// =============================================================================

#[test]
fn test_custom_host_resolution() {
    init_tracing();
    let resolver = Resolver::new(reflection_host());
    let shelter = resolver.finder(TypeHash::from_name("Shelter")).unwrap();
    let dog = TypeHash::from_name("Dog");

    let admit = shelter.find_method("admit", &[ArgType::Type(dog)]).unwrap();
    assert_eq!(admit.params, vec![dog]);

    let adopt = shelter.find_method("adopt", &[ArgType::Type(dog)]).unwrap();
    assert_eq!(adopt.params, vec![TypeHash::from_name("Pet")]);
}

#[test]
fn test_custom_host_inherited_methods() {
    let resolver = Resolver::new(reflection_host());
    let dog = TypeHash::from_name("Dog");
    let int = PrimitiveKind::Int32.type_hash();

    let feed = resolver
        .find_method(dog, "feed", &[ArgType::Type(int)])
        .unwrap();
    assert_eq!(feed.declaring_type, TypeHash::from_name("Animal"));

    let err = resolver.find_constructor(dog, &[]).unwrap_err();
    assert!(matches!(err, ResolutionError::NotFound { member: None, .. }));
}

#[test]
fn test_shared_host() {
    let host = Arc::new(reflection_host());
    let first = Resolver::new(Arc::clone(&host));
    let second = Resolver::new(Arc::clone(&host));
    let shelter = TypeHash::from_name("Shelter");

    assert_eq!(
        first.find_constructor(shelter, &[]).unwrap(),
        second.find_constructor(shelter, &[]).unwrap()
    );
}

// =============================================================================
// Concurrency
// =============================================================================

#[test]
fn test_one_build_per_target_under_contention() {
    init_tracing();
    let resolver = Resolver::new(reflection_host());
    let targets = ["Shelter", "Dog", "Animal", "Pet"].map(TypeHash::from_name);
    let dog = ArgType::Type(TypeHash::from_name("Dog"));

    thread::scope(|s| {
        for worker in 0..16 {
            let resolver = &resolver;
            s.spawn(move || {
                for round in 0..50 {
                    let target = targets[(worker + round) % targets.len()];
                    resolver.catalogue(target).unwrap();
                    let admit = resolver
                        .find_method(targets[0], "admit", &[dog])
                        .unwrap();
                    assert_eq!(admit.params, vec![TypeHash::from_name("Dog")]);
                }
            });
        }
    });

    assert_eq!(resolver.cache().build_count(), targets.len());
    assert_eq!(resolver.cache().len(), targets.len());
}

#[test]
fn test_concurrent_results_agree() {
    init_tracing();
    let resolver = Arc::new(Resolver::new(reflection_host()));
    let shelter = TypeHash::from_name("Shelter");

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let resolver = Arc::clone(&resolver);
            thread::spawn(move || {
                resolver
                    .find_method(shelter, "admit", &[ArgType::Null])
                    .unwrap()
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(results[0].params, vec![TypeHash::from_name("Dog")]);
    assert_eq!(resolver.cache().build_count(), 1);
}
