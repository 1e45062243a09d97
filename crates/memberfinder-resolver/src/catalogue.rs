//! Per-type member catalogues.
//!
//! A [`Catalogue`] lists every publicly invocable member of one target type:
//! constructors in a flat list, methods bucketed by name. Buckets hold
//! handles; the callables themselves live in a handle-keyed index. Both keep
//! encounter order, which is what makes resolution deterministic.
//!
//! Catalogues are built once and never mutated afterwards.

use memberfinder_core::{
    InvalidTargetReason, MemberEntry, ResolutionError, TypeEntry, TypeHash, TypeHost,
};
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::callable::Callable;
use crate::config::ResolverConfig;

/// The publicly invocable members of one type.
#[derive(Debug, Clone)]
pub struct Catalogue {
    target: TypeHash,
    target_name: String,
    constructors: Vec<TypeHash>,
    methods: FxHashMap<String, Vec<TypeHash>>,
    method_order: Vec<String>,
    callables: FxHashMap<TypeHash, Callable>,
}

impl Catalogue {
    /// Check that `target` can have a catalogue.
    ///
    /// Only known class and interface types qualify.
    pub fn check_target<H: TypeHost + ?Sized>(
        target: TypeHash,
        host: &H,
    ) -> Result<&TypeEntry, ResolutionError> {
        let invalid = |reason| ResolutionError::InvalidTarget {
            target: if target.is_empty() {
                "null".to_string()
            } else {
                host.type_name(target)
            },
            reason,
        };

        if target.is_empty() {
            return Err(invalid(InvalidTargetReason::Empty));
        }

        match host.get_type(target) {
            None => Err(invalid(InvalidTargetReason::Unknown)),
            Some(TypeEntry::Primitive(_)) => Err(invalid(InvalidTargetReason::Primitive)),
            Some(TypeEntry::Array(_)) => Err(invalid(InvalidTargetReason::Array)),
            Some(entry) => Ok(entry),
        }
    }

    /// Enumerate the public members of `target`.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn build<H: TypeHost + ?Sized>(
        target: TypeHash,
        host: &H,
        config: &ResolverConfig,
    ) -> Result<Self, ResolutionError> {
        let entry = Self::check_target(target, host)?;

        let mut catalogue = Catalogue {
            target,
            target_name: entry.name().to_string(),
            constructors: Vec::new(),
            methods: FxHashMap::default(),
            method_order: Vec::new(),
            callables: FxHashMap::default(),
        };

        for ctor in host.constructors(target) {
            if ctor.is_public() {
                catalogue.insert(Callable::from_member(ctor))?;
            }
        }

        let accessible_owners = if config.redirect_inaccessible && !entry.visibility().is_public() {
            Some(public_supertypes(target, host))
        } else {
            None
        };

        for method in host.methods(target) {
            if !method.is_public() {
                continue;
            }

            let method = match &accessible_owners {
                Some(owners) if !is_public_type(method.owner, host) => {
                    match find_accessible(method, owners, host) {
                        Some(accessible) => accessible,
                        None => {
                            trace!(
                                target_type = %catalogue.target_name,
                                method = method.name().unwrap_or_default(),
                                "dropping method with no public declaration"
                            );
                            continue;
                        }
                    }
                }
                _ => method,
            };

            catalogue.insert(Callable::from_member(method))?;
        }

        debug!(
            target_type = %catalogue.target_name,
            constructors = catalogue.constructors.len(),
            method_names = catalogue.methods.len(),
            callables = catalogue.callables.len(),
            "built member catalogue"
        );

        Ok(catalogue)
    }

    /// Add a callable. Re-adding the same member is a no-op; a different
    /// member under an existing handle is an `Internal` error.
    fn insert(&mut self, callable: Callable) -> Result<(), ResolutionError> {
        let handle = callable.handle;
        if let Some(existing) = self.callables.get(&handle) {
            if existing.name == callable.name
                && existing.params == callable.params
                && existing.declaring_type == callable.declaring_type
            {
                return Ok(());
            }
            return Err(ResolutionError::Internal {
                message: format!(
                    "handle {handle:?} in catalogue of '{}' is shared by '{}' and '{}'",
                    self.target_name,
                    existing.name.as_deref().unwrap_or("<init>"),
                    callable.name.as_deref().unwrap_or("<init>"),
                ),
            });
        }

        match &callable.name {
            None => self.constructors.push(handle),
            Some(name) => match self.methods.get_mut(name) {
                Some(bucket) => bucket.push(handle),
                None => {
                    self.method_order.push(name.clone());
                    self.methods.insert(name.clone(), vec![handle]);
                }
            },
        }

        self.callables.insert(handle, callable);
        Ok(())
    }

    /// The type this catalogue describes.
    pub fn target(&self) -> TypeHash {
        self.target
    }

    /// Name of the target type.
    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    /// Constructor handles, in declaration order.
    pub fn constructors(&self) -> &[TypeHash] {
        &self.constructors
    }

    /// Method handles named `name`, or `None` if no public method has that name.
    pub fn methods(&self, name: &str) -> Option<&[TypeHash]> {
        self.methods.get(name).map(Vec::as_slice)
    }

    /// Method names in the order first encountered.
    pub fn method_names(&self) -> impl Iterator<Item = &str> {
        self.method_order.iter().map(String::as_str)
    }

    /// Look up a callable by handle.
    pub fn callable(&self, handle: TypeHash) -> Option<&Callable> {
        self.callables.get(&handle)
    }

    /// Look up a callable that a bucket refers to.
    ///
    /// A miss means the catalogue is corrupt and is reported as
    /// [`ResolutionError::Internal`].
    pub fn lookup(&self, handle: TypeHash) -> Result<&Callable, ResolutionError> {
        self.callables
            .get(&handle)
            .ok_or_else(|| ResolutionError::Internal {
                message: format!(
                    "handle {handle:?} in catalogue of '{}' has no formal-type entry",
                    self.target_name
                ),
            })
    }

    /// Total number of catalogued callables.
    pub fn len(&self) -> usize {
        self.callables.len()
    }

    /// Check if the type has no public members at all.
    pub fn is_empty(&self) -> bool {
        self.callables.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn forget_callable(&mut self, handle: TypeHash) {
        self.callables.remove(&handle);
    }
}

fn is_public_type<H: TypeHost + ?Sized>(hash: TypeHash, host: &H) -> bool {
    host.get_type(hash)
        .is_some_and(|entry| entry.visibility().is_public())
}

/// Public supertypes of `target`: classes first, then interfaces, each group
/// in closure order.
fn public_supertypes<H: TypeHost + ?Sized>(target: TypeHash, host: &H) -> Vec<TypeHash> {
    let (classes, interfaces): (Vec<_>, Vec<_>) = host
        .supertypes(target)
        .into_iter()
        .filter_map(|hash| host.get_type(hash))
        .filter(|entry| entry.visibility().is_public())
        .partition(|entry| matches!(entry, TypeEntry::Class(_)));

    classes
        .into_iter()
        .chain(interfaces)
        .map(TypeEntry::type_hash)
        .collect()
}

fn find_accessible<'h, H: TypeHost + ?Sized>(
    method: &MemberEntry,
    owners: &[TypeHash],
    host: &'h H,
) -> Option<&'h MemberEntry> {
    owners
        .iter()
        .filter_map(|&owner| host.get_type(owner))
        .flat_map(TypeEntry::declared_methods)
        .find(|candidate| candidate.is_public() && candidate.same_signature(method))
}
