//! Resolver construction from type declarations.
//!
//! [`ResolverBuilder`] collects type declarations, registers them all at
//! once, validates the resulting hierarchy and hands back a ready
//! [`Resolver`]. Declarations may refer to types declared later.
//!
//! # Example
//!
//! ```
//! use memberfinder::prelude::*;
//!
//! let object = TypeHash::from_name("Object");
//! let string = TypeHash::from_name("String");
//!
//! let mut builder = ResolverBuilder::new();
//! builder
//!     .add_type(ClassEntry::new("String").with_base(object))
//!     .add_type(
//!         ClassEntry::new("Object")
//!             .with_constructor(vec![])
//!             .with_method("equals", vec![object]),
//!     );
//!
//! let resolver = builder.build()?;
//! let equals = resolver.find_method(string, "equals", &[ArgType::Type(string)])?;
//! assert_eq!(equals.declaring_type, object);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use memberfinder_core::{RegistrationError, TypeEntry, TypeHash};
use memberfinder_registry::TypeRegistry;
use memberfinder_resolver::{Resolver, ResolverConfig};
use thiserror::Error;
use tracing::{debug, info};

/// Collects type declarations for a [`Resolver`].
#[derive(Debug)]
pub struct ResolverBuilder {
    /// Declared types, in declaration order
    types: Vec<TypeEntry>,

    /// Element types to create array types for
    arrays: Vec<TypeHash>,

    config: ResolverConfig,
}

impl Default for ResolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolverBuilder {
    /// Create an empty builder with the default configuration.
    ///
    /// Primitive types are always available.
    pub fn new() -> Self {
        Self {
            types: Vec::new(),
            arrays: Vec::new(),
            config: ResolverConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Enable or disable primitive widening.
    pub fn with_primitive_widening(mut self, enabled: bool) -> Self {
        self.config = self.config.with_primitive_widening(enabled);
        self
    }

    /// Declare a class or interface.
    pub fn add_type(&mut self, entry: impl Into<TypeEntry>) -> &mut Self {
        self.types.push(entry.into());
        self
    }

    /// Declare the array type of `element`.
    ///
    /// Arrays of arrays are declared by passing an array hash, e.g.
    /// `TypeHash::from_array(TypeHash::from_array(element))`, after the
    /// inner array.
    pub fn add_array(&mut self, element: TypeHash) -> &mut Self {
        self.arrays.push(element);
        self
    }

    /// Number of declared types and arrays.
    pub fn len(&self) -> usize {
        self.types.len() + self.arrays.len()
    }

    /// Check if nothing has been declared.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Register every declaration and build the resolver.
    ///
    /// # Errors
    ///
    /// Returns every registration and validation problem found, not just
    /// the first.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn build(self) -> Result<Resolver<TypeRegistry>, BuildError> {
        let registry = self.build_registry()?;
        Ok(Resolver::with_config(registry, self.config))
    }

    /// Register every declaration into a fresh registry.
    pub fn build_registry(&self) -> Result<TypeRegistry, BuildError> {
        let mut registry = TypeRegistry::with_primitives();
        let mut errors = Vec::new();

        for entry in &self.types {
            if let Err(err) = registry.register_type(entry.clone()) {
                errors.push(err);
            }
        }

        for &element in &self.arrays {
            if let Err(err) = registry.array_of(element) {
                errors.push(err);
            }
        }

        errors.extend(registry.validate());

        if !errors.is_empty() {
            debug!(count = errors.len(), "type registration failed");
            return Err(BuildError::Registration(errors));
        }

        info!(
            types = registry.type_count(),
            declared = self.len(),
            "type registry built"
        );
        Ok(registry)
    }
}

/// Errors from [`ResolverBuilder::build`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// One or more declarations were rejected.
    #[error("type registration failed with {} error(s): {}", .0.len(), join(.0))]
    Registration(Vec<RegistrationError>),
}

impl BuildError {
    /// The individual registration errors.
    pub fn errors(&self) -> &[RegistrationError] {
        match self {
            BuildError::Registration(errors) => errors,
        }
    }
}

fn join(errors: &[RegistrationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use memberfinder_core::{ArgType, ClassEntry, InterfaceEntry, PrimitiveKind};

    #[test]
    fn empty_builder_has_primitives() {
        let builder = ResolverBuilder::new();
        assert!(builder.is_empty());

        let registry = builder.build_registry().unwrap();
        assert!(registry.contains(PrimitiveKind::Double.type_hash()));
    }

    #[test]
    fn forward_references_resolve() {
        let list = TypeHash::from_name("List");
        let mut builder = ResolverBuilder::new();
        builder
            .add_type(ClassEntry::new("ArrayList").with_interface(list).with_constructor(vec![]))
            .add_type(InterfaceEntry::new("List"));

        let resolver = builder.build().unwrap();
        let array_list = TypeHash::from_name("ArrayList");
        assert!(resolver.find_constructor(array_list, &[]).is_ok());
    }

    #[test]
    fn arrays_are_registered() {
        let object = TypeHash::from_name("Object");
        let mut builder = ResolverBuilder::new();
        builder
            .add_type(ClassEntry::new("Object"))
            .add_array(object)
            .add_array(TypeHash::from_array(object));

        let registry = builder.build_registry().unwrap();
        assert!(registry.contains(TypeHash::from_array(object)));
        assert!(registry.contains(TypeHash::from_array(TypeHash::from_array(object))));
    }

    #[test]
    fn collects_all_errors() {
        let mut builder = ResolverBuilder::new();
        builder
            .add_type(ClassEntry::new("Widget"))
            .add_type(ClassEntry::new("Widget"))
            .add_type(ClassEntry::new("Gadget").with_base(TypeHash::from_name("Missing")));

        let err = builder.build().unwrap_err();
        assert_eq!(err.errors().len(), 2);
        assert!(matches!(err.errors()[0], RegistrationError::DuplicateType(_)));
        assert!(matches!(err.errors()[1], RegistrationError::TypeNotFound(_)));
        assert!(err.to_string().starts_with("type registration failed with 2 error(s)"));
    }

    #[test]
    fn widening_config_is_applied() {
        let int = PrimitiveKind::Int32.type_hash();
        let long = PrimitiveKind::Int64.type_hash();
        let mut builder = ResolverBuilder::new().with_primitive_widening(true);
        builder.add_type(ClassEntry::new("Math").with_method("abs", vec![long]));

        let resolver = builder.build().unwrap();
        assert!(resolver.config().conversion.primitive_widening);
        let math = TypeHash::from_name("Math");
        assert!(resolver.find_method(math, "abs", &[ArgType::Type(int)]).is_ok());
    }
}
