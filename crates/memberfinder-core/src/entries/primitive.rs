//! Primitive value types.
//!
//! A primitive can be an argument or parameter type but never a resolution
//! target: it declares no members, and `null` never converts to it.

use crate::{PrimitiveKind, TypeHash};

/// A primitive value type such as `int` or `double`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimitiveEntry {
    pub kind: PrimitiveKind,
    /// Always `kind.type_hash()`.
    pub type_hash: TypeHash,
}

impl PrimitiveEntry {
    pub fn new(kind: PrimitiveKind) -> Self {
        Self {
            kind,
            type_hash: kind.type_hash(),
        }
    }

    /// Keyword spelling, as shown in signatures (`int`, `long`, ...).
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_follows_kind() {
        for kind in PrimitiveKind::ALL {
            let entry = PrimitiveEntry::new(kind);
            assert_eq!(entry.type_hash, kind.type_hash());
            assert_eq!(entry.name(), kind.name());
        }
        assert_eq!(PrimitiveEntry::new(PrimitiveKind::Int32).name(), "int");
    }
}
