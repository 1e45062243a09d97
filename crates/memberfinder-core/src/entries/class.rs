//! Class type entry.

use crate::{TypeHash, Visibility};

use super::MemberEntry;

/// Registry entry for a class type.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassEntry {
    /// Qualified name.
    pub name: String,
    /// Type hash for identity.
    pub type_hash: TypeHash,
    /// Visibility of the class itself.
    pub visibility: Visibility,

    // === Inheritance ===
    /// Base class type hash (single inheritance).
    pub base_class: Option<TypeHash>,
    /// Implemented interface type hashes.
    pub interfaces: Vec<TypeHash>,

    // === Members ===
    /// Declared constructors.
    pub constructors: Vec<MemberEntry>,
    /// Declared methods (inherited methods live on their declaring types).
    pub methods: Vec<MemberEntry>,
}

impl ClassEntry {
    /// Create a public class entry with no members.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let type_hash = TypeHash::from_name(&name);
        Self {
            name,
            type_hash,
            visibility: Visibility::Public,
            base_class: None,
            interfaces: Vec::new(),
            constructors: Vec::new(),
            methods: Vec::new(),
        }
    }

    // === Builder Methods ===

    /// Set the base class.
    pub fn with_base(mut self, base: TypeHash) -> Self {
        self.base_class = Some(base);
        self
    }

    /// Add an implemented interface.
    pub fn with_interface(mut self, interface: TypeHash) -> Self {
        self.interfaces.push(interface);
        self
    }

    /// Set the class visibility.
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Add a public constructor.
    pub fn with_constructor(mut self, params: Vec<TypeHash>) -> Self {
        self.constructors
            .push(MemberEntry::constructor(self.type_hash, params));
        self
    }

    /// Add a public method.
    pub fn with_method(mut self, name: impl Into<String>, params: Vec<TypeHash>) -> Self {
        self.methods
            .push(MemberEntry::method(self.type_hash, name, params));
        self
    }

    /// Add a prebuilt member. Constructors and methods are sorted by kind.
    ///
    /// The member's owner is rewritten to this class.
    pub fn with_member(mut self, member: MemberEntry) -> Self {
        let member = if member.is_constructor() {
            MemberEntry::constructor(self.type_hash, member.params)
                .with_visibility(member.visibility)
        } else {
            let name = member.name().unwrap_or_default().to_string();
            MemberEntry::method(self.type_hash, name, member.params)
                .with_visibility(member.visibility)
        };
        if member.is_constructor() {
            self.constructors.push(member);
        } else {
            self.methods.push(member);
        }
        self
    }

    /// Direct supertypes: base class first, then interfaces in declaration order.
    pub fn direct_supertypes(&self) -> impl Iterator<Item = TypeHash> + '_ {
        self.base_class
            .into_iter()
            .chain(self.interfaces.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Visibility;

    #[test]
    fn builder_sets_owner() {
        let int = TypeHash::from_name("int");
        let class = ClassEntry::new("Widget")
            .with_constructor(vec![int])
            .with_method("resize", vec![int, int]);

        assert_eq!(class.constructors.len(), 1);
        assert_eq!(class.methods.len(), 1);
        assert_eq!(class.methods[0].owner, class.type_hash);
        assert_eq!(class.methods[0].name(), Some("resize"));
    }

    #[test]
    fn with_member_rehomes_owner() {
        let elsewhere = TypeHash::from_name("Elsewhere");
        let member = MemberEntry::method(elsewhere, "draw", vec![])
            .with_visibility(Visibility::Protected);
        let class = ClassEntry::new("Widget").with_member(member);

        assert_eq!(class.methods[0].owner, class.type_hash);
        assert_eq!(class.methods[0].visibility, Visibility::Protected);
    }

    #[test]
    fn direct_supertypes_order() {
        let base = TypeHash::from_name("Base");
        let a = TypeHash::from_name("A");
        let b = TypeHash::from_name("B");
        let class = ClassEntry::new("Widget")
            .with_interface(a)
            .with_base(base)
            .with_interface(b);

        let supers: Vec<_> = class.direct_supertypes().collect();
        assert_eq!(supers, vec![base, a, b]);
    }
}
