//! Resolver entry points.
//!
//! [`Resolver`] owns a host, a configuration and the catalogue cache.
//! [`MemberFinder`] is a cheap per-target view over it.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use memberfinder_core::{ArgType, ArgValue, ResolutionError, TypeHash, TypeHost};
use tracing::debug;

use crate::cache::CatalogueCache;
use crate::callable::Callable;
use crate::catalogue::Catalogue;
use crate::config::ResolverConfig;
use crate::overload::{find_constructor_in, find_method_in};

/// Resolves constructor and method calls against a host type system.
///
/// Catalogues are built lazily, once per target, and shared by every
/// caller. The resolver is `Send + Sync` whenever the host is.
#[derive(Debug)]
pub struct Resolver<H> {
    host: H,
    config: ResolverConfig,
    cache: CatalogueCache,
}

impl<H: TypeHost> Resolver<H> {
    /// Create a resolver with the default configuration.
    pub fn new(host: H) -> Self {
        Self::with_config(host, ResolverConfig::default())
    }

    /// Create a resolver with an explicit configuration.
    pub fn with_config(host: H, config: ResolverConfig) -> Self {
        Self {
            host,
            config,
            cache: CatalogueCache::new(),
        }
    }

    /// The host type system.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// The catalogue cache.
    pub fn cache(&self) -> &CatalogueCache {
        &self.cache
    }

    /// Get the catalogue for `target`, building it if needed.
    pub fn catalogue(&self, target: TypeHash) -> Result<Arc<Catalogue>, ResolutionError> {
        self.cache.get_or_build(target, &self.host, &self.config)
    }

    /// Get a finder for `target`.
    ///
    /// Fails with `InvalidTarget` if the target cannot have members. The
    /// catalogue itself is built on the first lookup.
    pub fn finder(&self, target: TypeHash) -> Result<MemberFinder<'_, H>, ResolutionError> {
        Catalogue::check_target(target, &self.host)?;
        Ok(MemberFinder {
            resolver: self,
            target,
        })
    }

    /// Resolve a constructor of `target` for `args`.
    pub fn find_constructor(
        &self,
        target: TypeHash,
        args: &[ArgType],
    ) -> Result<Callable, ResolutionError> {
        let catalogue = self.catalogue(target)?;
        let result = find_constructor_in(&catalogue, args, &self.host, &self.config.conversion);
        self.log_outcome(&catalogue, None, args, &result);
        result.cloned()
    }

    /// Resolve method `name` of `target` for `args`.
    pub fn find_method(
        &self,
        target: TypeHash,
        name: &str,
        args: &[ArgType],
    ) -> Result<Callable, ResolutionError> {
        let catalogue = self.catalogue(target)?;
        let result = find_method_in(&catalogue, name, args, &self.host, &self.config.conversion);
        self.log_outcome(&catalogue, Some(name), args, &result);
        result.cloned()
    }

    fn log_outcome(
        &self,
        catalogue: &Catalogue,
        member: Option<&str>,
        args: &[ArgType],
        result: &Result<&Callable, ResolutionError>,
    ) {
        match result {
            Ok(callable) => debug!(
                target_type = catalogue.target_name(),
                member = member.unwrap_or("<init>"),
                handle = ?callable.handle,
                "resolved call"
            ),
            Err(err) => debug!(
                target_type = catalogue.target_name(),
                member = member.unwrap_or("<init>"),
                args = %self.host.format_args(args),
                error = %err,
                "resolution failed"
            ),
        }
    }
}

/// Member lookup for one target type.
///
/// Two finders are equal when they look up members of the same type.
#[derive(Debug)]
pub struct MemberFinder<'r, H> {
    resolver: &'r Resolver<H>,
    target: TypeHash,
}

impl<H> Clone for MemberFinder<'_, H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H> Copy for MemberFinder<'_, H> {}

impl<'r, H: TypeHost> MemberFinder<'r, H> {
    /// The target type.
    pub fn target(&self) -> TypeHash {
        self.target
    }

    /// The target's catalogue.
    pub fn catalogue(&self) -> Result<Arc<Catalogue>, ResolutionError> {
        self.resolver.catalogue(self.target)
    }

    /// Resolve a constructor for argument types.
    pub fn find_constructor(&self, args: &[ArgType]) -> Result<Callable, ResolutionError> {
        self.resolver.find_constructor(self.target, args)
    }

    /// Resolve a method for argument types.
    pub fn find_method(&self, name: &str, args: &[ArgType]) -> Result<Callable, ResolutionError> {
        self.resolver.find_method(self.target, name, args)
    }

    /// Resolve a constructor for argument values. `None` stands for null.
    pub fn find_constructor_for_values(
        &self,
        values: &[Option<&dyn ArgValue>],
    ) -> Result<Callable, ResolutionError> {
        self.find_constructor(&ArgType::of_values(values))
    }

    /// Resolve a method for argument values. `None` stands for null.
    pub fn find_method_for_values(
        &self,
        name: &str,
        values: &[Option<&dyn ArgValue>],
    ) -> Result<Callable, ResolutionError> {
        self.find_method(name, &ArgType::of_values(values))
    }
}

impl<H> PartialEq for MemberFinder<'_, H> {
    fn eq(&self, other: &Self) -> bool {
        self.target == other.target
    }
}

impl<H> Eq for MemberFinder<'_, H> {}

impl<H> Hash for MemberFinder<'_, H> {
    fn hash<S: Hasher>(&self, state: &mut S) {
        self.target.hash(state);
    }
}
