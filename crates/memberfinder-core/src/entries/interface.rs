//! Interface type entry.

use crate::{TypeHash, Visibility};

use super::MemberEntry;

/// Registry entry for an interface type.
///
/// Interfaces declare methods but never constructors.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceEntry {
    /// Qualified name.
    pub name: String,
    /// Type hash for identity.
    pub type_hash: TypeHash,
    /// Visibility of the interface itself.
    pub visibility: Visibility,
    /// Extended interfaces.
    pub base_interfaces: Vec<TypeHash>,
    /// Declared methods.
    pub methods: Vec<MemberEntry>,
}

impl InterfaceEntry {
    /// Create a public interface entry.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let type_hash = TypeHash::from_name(&name);
        Self {
            name,
            type_hash,
            visibility: Visibility::Public,
            base_interfaces: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Add an extended interface.
    pub fn with_base(mut self, base: TypeHash) -> Self {
        self.base_interfaces.push(base);
        self
    }

    /// Set the interface visibility.
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Add a method declaration.
    pub fn with_method(mut self, name: impl Into<String>, params: Vec<TypeHash>) -> Self {
        self.methods
            .push(MemberEntry::method(self.type_hash, name, params));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interface_methods() {
        let text = TypeHash::from_name("String");
        let iface = InterfaceEntry::new("Comparable")
            .with_base(TypeHash::from_name("Marker"))
            .with_method("compareTo", vec![text]);

        assert_eq!(iface.base_interfaces.len(), 1);
        assert_eq!(iface.methods[0].owner, iface.type_hash);
        assert_eq!(iface.methods[0].name(), Some("compareTo"));
    }
}
