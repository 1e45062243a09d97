//! TypeEntry enum for unified type storage.

use crate::{PrimitiveKind, TypeHash, Visibility};

use super::{ArrayEntry, ClassEntry, InterfaceEntry, MemberEntry, PrimitiveEntry};

/// Unified type entry for registry storage.
///
/// This is the type descriptor the compatibility checker queries: whether a
/// type is primitive (and which kind), a reference type (class or interface),
/// or an array (and of what).
#[derive(Debug, Clone, PartialEq)]
pub enum TypeEntry {
    /// Primitive type (int, float, bool, etc.).
    Primitive(PrimitiveEntry),
    /// Class type.
    Class(ClassEntry),
    /// Interface type.
    Interface(InterfaceEntry),
    /// Array type.
    Array(ArrayEntry),
}

impl TypeEntry {
    /// Get the type hash for this entry.
    pub fn type_hash(&self) -> TypeHash {
        match self {
            TypeEntry::Primitive(e) => e.type_hash,
            TypeEntry::Class(e) => e.type_hash,
            TypeEntry::Interface(e) => e.type_hash,
            TypeEntry::Array(e) => e.type_hash,
        }
    }

    /// Get the qualified name.
    pub fn name(&self) -> &str {
        match self {
            TypeEntry::Primitive(e) => e.name(),
            TypeEntry::Class(e) => &e.name,
            TypeEntry::Interface(e) => &e.name,
            TypeEntry::Array(e) => &e.name,
        }
    }

    /// Get the visibility. Primitives and arrays are always public.
    pub fn visibility(&self) -> Visibility {
        match self {
            TypeEntry::Class(e) => e.visibility,
            TypeEntry::Interface(e) => e.visibility,
            TypeEntry::Primitive(_) | TypeEntry::Array(_) => Visibility::Public,
        }
    }

    // === Kind queries ===

    /// Check if this is a primitive type.
    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeEntry::Primitive(_))
    }

    /// Check if this is a reference type (class or interface).
    pub fn is_reference(&self) -> bool {
        matches!(self, TypeEntry::Class(_) | TypeEntry::Interface(_))
    }

    /// Check if this is an array type.
    pub fn is_array(&self) -> bool {
        matches!(self, TypeEntry::Array(_))
    }

    /// Get the primitive kind, if this is a primitive.
    pub fn primitive_kind(&self) -> Option<PrimitiveKind> {
        match self {
            TypeEntry::Primitive(e) => Some(e.kind),
            _ => None,
        }
    }

    /// Get the element type, if this is an array.
    pub fn array_element(&self) -> Option<TypeHash> {
        match self {
            TypeEntry::Array(e) => Some(e.element),
            _ => None,
        }
    }

    // === Downcasts ===

    /// Get as a class entry.
    pub fn as_class(&self) -> Option<&ClassEntry> {
        match self {
            TypeEntry::Class(e) => Some(e),
            _ => None,
        }
    }

    /// Get as an interface entry.
    pub fn as_interface(&self) -> Option<&InterfaceEntry> {
        match self {
            TypeEntry::Interface(e) => Some(e),
            _ => None,
        }
    }

    /// Get as an array entry.
    pub fn as_array(&self) -> Option<&ArrayEntry> {
        match self {
            TypeEntry::Array(e) => Some(e),
            _ => None,
        }
    }

    // === Structure ===

    /// Direct supertypes: base class, then implemented or extended interfaces.
    pub fn direct_supertypes(&self) -> Vec<TypeHash> {
        match self {
            TypeEntry::Class(e) => e.direct_supertypes().collect(),
            TypeEntry::Interface(e) => e.base_interfaces.clone(),
            TypeEntry::Primitive(_) | TypeEntry::Array(_) => Vec::new(),
        }
    }

    /// Constructors declared on this type.
    pub fn constructors(&self) -> &[MemberEntry] {
        match self {
            TypeEntry::Class(e) => &e.constructors,
            _ => &[],
        }
    }

    /// Methods declared on this type (not inherited ones).
    pub fn declared_methods(&self) -> &[MemberEntry] {
        match self {
            TypeEntry::Class(e) => &e.methods,
            TypeEntry::Interface(e) => &e.methods,
            _ => &[],
        }
    }
}

impl From<PrimitiveEntry> for TypeEntry {
    fn from(entry: PrimitiveEntry) -> Self {
        TypeEntry::Primitive(entry)
    }
}

impl From<ClassEntry> for TypeEntry {
    fn from(entry: ClassEntry) -> Self {
        TypeEntry::Class(entry)
    }
}

impl From<InterfaceEntry> for TypeEntry {
    fn from(entry: InterfaceEntry) -> Self {
        TypeEntry::Interface(entry)
    }
}

impl From<ArrayEntry> for TypeEntry {
    fn from(entry: ArrayEntry) -> Self {
        TypeEntry::Array(entry)
    }
}
