//! Member entry for constructors and methods.

use crate::{TypeHash, Visibility};

/// Whether a member is a constructor or a named method.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MemberKind {
    /// Constructor (no name).
    Constructor,
    /// Named method.
    Method(String),
}

/// A constructor or method declared on a type.
///
/// `member_hash` is the opaque invocation handle the host uses to find the
/// implementation again once a member has been selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberEntry {
    /// Constructor or method name.
    pub kind: MemberKind,
    /// Formal parameter types, in order.
    pub params: Vec<TypeHash>,
    /// Declared visibility.
    pub visibility: Visibility,
    /// Type declaring this member.
    pub owner: TypeHash,
    /// Signature hash used as the invocation handle.
    pub member_hash: TypeHash,
}

impl MemberEntry {
    /// Create a public constructor declared on `owner`.
    pub fn constructor(owner: TypeHash, params: Vec<TypeHash>) -> Self {
        Self {
            kind: MemberKind::Constructor,
            member_hash: TypeHash::from_constructor(owner, &params),
            params,
            visibility: Visibility::Public,
            owner,
        }
    }

    /// Create a public method declared on `owner`.
    pub fn method(owner: TypeHash, name: impl Into<String>, params: Vec<TypeHash>) -> Self {
        let name = name.into();
        Self {
            member_hash: TypeHash::from_method(owner, &name, &params),
            kind: MemberKind::Method(name),
            params,
            visibility: Visibility::Public,
            owner,
        }
    }

    /// Set the visibility.
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Method name, or `None` for constructors.
    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            MemberKind::Constructor => None,
            MemberKind::Method(name) => Some(name),
        }
    }

    /// Check if this is a constructor.
    pub fn is_constructor(&self) -> bool {
        matches!(self.kind, MemberKind::Constructor)
    }

    /// Check if this member is public.
    pub fn is_public(&self) -> bool {
        self.visibility.is_public()
    }

    /// Check if `other` has the same name and parameter list.
    ///
    /// Owner is ignored: an override has the same signature as the
    /// declaration it replaces.
    pub fn same_signature(&self, other: &MemberEntry) -> bool {
        self.kind == other.kind && self.params == other.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_has_no_name() {
        let owner = TypeHash::from_name("Widget");
        let ctor = MemberEntry::constructor(owner, vec![]);
        assert!(ctor.is_constructor());
        assert_eq!(ctor.name(), None);
        assert_eq!(ctor.member_hash, TypeHash::from_constructor(owner, &[]));
    }

    #[test]
    fn override_shares_signature_but_not_handle() {
        let int = TypeHash::from_name("int");
        let base = MemberEntry::method(TypeHash::from_name("Base"), "run", vec![int]);
        let derived = MemberEntry::method(TypeHash::from_name("Derived"), "run", vec![int]);

        assert!(base.same_signature(&derived));
        assert_ne!(base.member_hash, derived.member_hash);
    }

    #[test]
    fn visibility_defaults_to_public() {
        let owner = TypeHash::from_name("Widget");
        let m = MemberEntry::method(owner, "hide", vec![]);
        assert!(m.is_public());
        assert!(!m.with_visibility(Visibility::Private).is_public());
    }
}
