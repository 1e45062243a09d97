//! Compiler-style overload resolution over reflective type metadata.
//!
//! Given a target type, a member name and the types of the actual
//! arguments, memberfinder selects the constructor or method a compiler
//! would pick: an exact match if there is one, otherwise the single most
//! specific applicable member. It reports `NotFound` when nothing applies
//! and `Ambiguous` when several members tie.
//!
//! # Crates
//!
//! - `memberfinder-core`: type identities, type and member records, errors,
//!   and the [`TypeHost`] seam
//! - `memberfinder-registry`: [`TypeRegistry`], an in-memory host
//! - `memberfinder-resolver`: catalogues, compatibility rules and the
//!   [`Resolver`]
//!
//! Any host type system can be plugged in by implementing [`TypeHost`];
//! [`ResolverBuilder`] is the shortcut for declaring types directly.
//!
//! # Example
//!
//! ```
//! use memberfinder::prelude::*;
//!
//! let object = TypeHash::from_name("Object");
//! let string = TypeHash::from_name("String");
//! let int = PrimitiveKind::Int32.type_hash();
//!
//! let mut builder = ResolverBuilder::new();
//! builder
//!     .add_type(ClassEntry::new("Object"))
//!     .add_type(ClassEntry::new("String").with_base(object))
//!     .add_type(
//!         ClassEntry::new("Printer")
//!             .with_constructor(vec![])
//!             .with_method("print", vec![object])
//!             .with_method("print", vec![string])
//!             .with_method("print", vec![int]),
//!     );
//! let resolver = builder.build()?;
//!
//! let printer = resolver.finder(TypeHash::from_name("Printer"))?;
//! let print = printer.find_method("print", &[ArgType::Null])?;
//! assert_eq!(print.params, vec![string]);
//!
//! let err = printer.find_method("print", &[ArgType::Null, ArgType::Null]).unwrap_err();
//! assert!(err.is_not_found());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod builder;

pub use builder::{BuildError, ResolverBuilder};

pub use memberfinder_core::{
    ArgType, ArgValue, ArrayEntry, ClassEntry, InterfaceEntry, InvalidTargetReason, MemberEntry,
    MemberKind, NotFoundReason, PrimitiveEntry, PrimitiveKind, RegistrationError, ResolutionError,
    TypeEntry, TypeHash, TypeHost, Visibility,
};
pub use memberfinder_registry::{TypeHierarchy, TypeRegistry};
pub use memberfinder_resolver::{
    Callable, Catalogue, CatalogueCache, Conversion, ConversionKind, ConversionRules,
    MemberFinder, Resolver, ResolverConfig, conversion, overload,
};

/// Commonly used types.
pub mod prelude {
    pub use crate::{
        ArgType, ArgValue, BuildError, Callable, ClassEntry, InterfaceEntry, MemberEntry,
        MemberFinder, PrimitiveKind, ResolutionError, Resolver, ResolverBuilder, ResolverConfig,
        TypeHash, TypeHost, TypeRegistry, Visibility,
    };
}
