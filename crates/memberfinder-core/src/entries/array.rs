//! Array type entry.

use crate::TypeHash;

/// Registry entry for an array type.
///
/// Array identity is derived from the element identity, so `String[]`
/// registered by two different hosts is the same type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayEntry {
    /// Display name, e.g. `String[]`.
    pub name: String,
    /// Type hash for identity.
    pub type_hash: TypeHash,
    /// Element type hash.
    pub element: TypeHash,
}

impl ArrayEntry {
    /// Create an array entry for `element`, named after `element_name`.
    pub fn new(element: TypeHash, element_name: &str) -> Self {
        Self {
            name: format!("{element_name}[]"),
            type_hash: TypeHash::from_array(element),
            element,
        }
    }
}
