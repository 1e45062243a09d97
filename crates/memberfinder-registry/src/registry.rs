//! TypeRegistry - an in-memory host type system.
//!
//! [`TypeRegistry`] stores type entries by [`TypeHash`], keeps the subtype
//! graph in a [`TypeHierarchy`], and implements [`TypeHost`] so the resolver
//! can query it.
//!
//! # Thread Safety
//!
//! The registry is populated single-threaded and is read-only afterwards.
//! Sharing it across threads for resolution needs nothing more than `&` or
//! `Arc`; mutation after that point is the caller's problem.
//!
//! # Example
//!
//! ```
//! use memberfinder_core::{ClassEntry, PrimitiveKind, TypeHost};
//! use memberfinder_registry::TypeRegistry;
//!
//! let mut registry = TypeRegistry::with_primitives();
//! let object = registry.register_type(ClassEntry::new("Object").into()).unwrap();
//! let string = registry
//!     .register_type(ClassEntry::new("String").with_base(object).into())
//!     .unwrap();
//!
//! assert!(registry.is_subtype(string, object));
//! assert!(registry.get_by_name("int").is_some());
//! ```

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use memberfinder_core::{
    ArrayEntry, MemberEntry, PrimitiveEntry, PrimitiveKind, RegistrationError, TypeEntry,
    TypeHash, TypeHost,
};

use crate::TypeHierarchy;

/// Unified type registry.
#[derive(Default)]
pub struct TypeRegistry {
    /// Types by hash (primary storage).
    types: FxHashMap<TypeHash, TypeEntry>,

    /// Name -> hash index.
    names: FxHashMap<String, TypeHash>,

    /// Subtype graph.
    hierarchy: TypeHierarchy,
}

impl TypeRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with all primitives pre-registered.
    pub fn with_primitives() -> Self {
        let mut registry = Self::new();
        registry.register_all_primitives();
        registry
    }

    // ==========================================================================
    // Lookup
    // ==========================================================================

    /// Get a type by hash.
    pub fn get(&self, hash: TypeHash) -> Option<&TypeEntry> {
        self.types.get(&hash)
    }

    /// Get a type by its qualified name.
    pub fn get_by_name(&self, name: &str) -> Option<&TypeEntry> {
        self.names.get(name).and_then(|hash| self.types.get(hash))
    }

    /// Get a type's hash by its qualified name.
    pub fn hash_of(&self, name: &str) -> Option<TypeHash> {
        self.names.get(name).copied()
    }

    /// Check if a type is registered.
    pub fn contains(&self, hash: TypeHash) -> bool {
        self.types.contains_key(&hash)
    }

    /// Iterate over all types.
    pub fn types(&self) -> impl Iterator<Item = &TypeEntry> {
        self.types.values()
    }

    /// Number of registered types.
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// The subtype graph.
    pub fn hierarchy(&self) -> &TypeHierarchy {
        &self.hierarchy
    }

    // ==========================================================================
    // Registration
    // ==========================================================================

    /// Register a type.
    ///
    /// Supertypes may be registered later; their kinds are checked here when
    /// already known and by [`validate`](Self::validate) otherwise.
    pub fn register_type(&mut self, entry: TypeEntry) -> Result<TypeHash, RegistrationError> {
        let hash = entry.type_hash();
        let name = entry.name().to_string();

        if self.types.contains_key(&hash) || self.names.contains_key(&name) {
            return Err(RegistrationError::DuplicateType(name));
        }

        for sup in entry.direct_supertypes() {
            if let Some(sup_entry) = self.types.get(&sup) {
                check_supertype(&entry, sup_entry)?;
            }
        }
        check_members(&entry)?;

        self.hierarchy.add_supertypes(hash, &entry.direct_supertypes());
        debug!(type_name = %name, ?hash, "registered type");

        self.names.insert(name, hash);
        self.types.insert(hash, entry);
        Ok(hash)
    }

    /// Register a primitive type. Re-registering is a no-op.
    pub fn register_primitive(&mut self, kind: PrimitiveKind) -> TypeHash {
        let entry = PrimitiveEntry::new(kind);
        let hash = entry.type_hash;
        if !self.types.contains_key(&hash) {
            self.names.insert(kind.name().to_string(), hash);
            self.types.insert(hash, entry.into());
        }
        hash
    }

    /// Register all primitive types.
    pub fn register_all_primitives(&mut self) {
        for kind in PrimitiveKind::ALL {
            self.register_primitive(kind);
        }
    }

    /// Get or register the array type whose elements are `element`.
    ///
    /// Works for nested arrays: `array_of(array_of(int)?)` is `int[][]`.
    pub fn array_of(&mut self, element: TypeHash) -> Result<TypeHash, RegistrationError> {
        let hash = TypeHash::from_array(element);
        if self.types.contains_key(&hash) {
            return Ok(hash);
        }

        let element_name = self
            .types
            .get(&element)
            .map(|e| e.name().to_string())
            .ok_or_else(|| RegistrationError::TypeNotFound(format!("{element:?}")))?;

        let entry = ArrayEntry::new(element, &element_name);
        debug!(type_name = %entry.name, "registered array type");
        self.names.insert(entry.name.clone(), hash);
        self.types.insert(hash, entry.into());
        Ok(hash)
    }

    /// Check the registry for dangling supertype references, supertypes of the
    /// wrong kind and inheritance cycles.
    ///
    /// Returns every problem found.
    pub fn validate(&self) -> Vec<RegistrationError> {
        let mut errors = Vec::new();
        let mut reported = FxHashSet::default();

        for (sub, sup) in self.hierarchy.edges() {
            let Some(sub_entry) = self.types.get(&sub) else {
                continue;
            };
            match self.types.get(&sup) {
                Some(sup_entry) => {
                    if let Err(e) = check_supertype(sub_entry, sup_entry) {
                        errors.push(e);
                    }
                }
                None => {
                    if reported.insert(sup) {
                        errors.push(RegistrationError::TypeNotFound(format!(
                            "{:?} (supertype of '{}')",
                            sup,
                            sub_entry.name()
                        )));
                    }
                }
            }
        }

        if self.hierarchy.has_cycle() {
            errors.push(RegistrationError::InvalidSupertype {
                type_name: "<hierarchy>".to_string(),
                supertype: "<cycle>".to_string(),
                reason: "inheritance cycle",
            });
        }

        errors
    }
}

/// Check that `sup` is an acceptable direct supertype of `sub`.
fn check_supertype(sub: &TypeEntry, sup: &TypeEntry) -> Result<(), RegistrationError> {
    let invalid = |reason| RegistrationError::InvalidSupertype {
        type_name: sub.name().to_string(),
        supertype: sup.name().to_string(),
        reason,
    };

    match sub {
        TypeEntry::Class(class) => {
            if class.base_class == Some(sup.type_hash()) {
                if sup.as_class().is_none() {
                    return Err(invalid("base class must be a class"));
                }
            } else if sup.as_interface().is_none() {
                return Err(invalid("implemented type must be an interface"));
            }
        }
        TypeEntry::Interface(_) => {
            if sup.as_interface().is_none() {
                return Err(invalid("interfaces can only extend interfaces"));
            }
        }
        TypeEntry::Primitive(_) | TypeEntry::Array(_) => {
            return Err(invalid("type kind has no supertypes"));
        }
    }
    Ok(())
}

/// Check member declarations: names, owners and duplicate signatures.
fn check_members(entry: &TypeEntry) -> Result<(), RegistrationError> {
    let invalid = |reason: String| RegistrationError::InvalidMember {
        type_name: entry.name().to_string(),
        reason,
    };

    let members = entry.constructors().iter().chain(entry.declared_methods());
    let mut seen: Vec<&MemberEntry> = Vec::new();

    for member in members {
        if member.owner != entry.type_hash() {
            return Err(invalid(format!(
                "member {:?} is owned by another type",
                member.name().unwrap_or("<init>")
            )));
        }
        if let Some(name) = member.name()
            && name.is_empty()
        {
            return Err(invalid("method name is empty".to_string()));
        }
        if seen.iter().any(|m| m.same_signature(member)) {
            return Err(invalid(format!(
                "duplicate signature for {}",
                member.name().unwrap_or("<init>")
            )));
        }
        seen.push(member);
    }
    Ok(())
}

impl TypeHost for TypeRegistry {
    fn get_type(&self, hash: TypeHash) -> Option<&TypeEntry> {
        self.types.get(&hash)
    }

    fn supertypes(&self, hash: TypeHash) -> Vec<TypeHash> {
        self.hierarchy.supertypes(hash)
    }
}

impl std::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("types", &self.types.len())
            .field("hierarchy_nodes", &self.hierarchy.len())
            .finish()
    }
}
