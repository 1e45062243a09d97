//! Primitive numeric and boolean kinds.

use std::fmt;

use crate::TypeHash;

/// Primitive type kinds.
///
/// A primitive never has members, supertypes or a null value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float,
    Double,
}

impl PrimitiveKind {
    /// Every primitive kind, in registration order.
    pub const ALL: [PrimitiveKind; 11] = [
        PrimitiveKind::Bool,
        PrimitiveKind::Int8,
        PrimitiveKind::Int16,
        PrimitiveKind::Int32,
        PrimitiveKind::Int64,
        PrimitiveKind::Uint8,
        PrimitiveKind::Uint16,
        PrimitiveKind::Uint32,
        PrimitiveKind::Uint64,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
    ];

    /// Get the TypeHash for this primitive type.
    pub fn type_hash(self) -> TypeHash {
        TypeHash::from_name(self.name())
    }

    /// Get the name of this primitive type.
    pub const fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Bool => "bool",
            PrimitiveKind::Int8 => "int8",
            PrimitiveKind::Int16 => "int16",
            PrimitiveKind::Int32 => "int",
            PrimitiveKind::Int64 => "int64",
            PrimitiveKind::Uint8 => "uint8",
            PrimitiveKind::Uint16 => "uint16",
            PrimitiveKind::Uint32 => "uint",
            PrimitiveKind::Uint64 => "uint64",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
        }
    }

    /// Look up a primitive kind by its name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Check if this is a signed or unsigned integer kind.
    pub const fn is_integer(self) -> bool {
        !matches!(
            self,
            PrimitiveKind::Bool | PrimitiveKind::Float | PrimitiveKind::Double
        )
    }

    /// Check if this is a floating point kind.
    pub const fn is_float(self) -> bool {
        matches!(self, PrimitiveKind::Float | PrimitiveKind::Double)
    }

    /// Kinds this kind may be widened to, nearest first.
    ///
    /// Only consulted when widening is enabled in the conversion rules. Every
    /// pair listed here is a promotion that never loses the sign and never
    /// narrows the integer range.
    pub const fn widening_targets(self) -> &'static [PrimitiveKind] {
        use PrimitiveKind::*;
        match self {
            Int8 => &[Int16, Int32, Int64, Float, Double],
            Int16 => &[Int32, Int64, Float, Double],
            Int32 => &[Int64, Float, Double],
            Int64 => &[Float, Double],
            Uint8 => &[Uint16, Int16, Uint32, Int32, Uint64, Int64, Float, Double],
            Uint16 => &[Uint32, Int32, Uint64, Int64, Float, Double],
            Uint32 => &[Uint64, Int64, Float, Double],
            Uint64 => &[Float, Double],
            Float => &[Double],
            Double | Bool => &[],
        }
    }

    /// Check if a value of this kind widens to `target`.
    pub fn widens_to(self, target: PrimitiveKind) -> bool {
        self.widening_targets().contains(&target)
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for kind in PrimitiveKind::ALL {
            assert_eq!(PrimitiveKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(PrimitiveKind::from_name("String"), None);
    }

    #[test]
    fn int_is_32_bit() {
        assert_eq!(PrimitiveKind::Int32.name(), "int");
        assert_eq!(PrimitiveKind::Int32.type_hash(), TypeHash::from_name("int"));
    }

    #[test]
    fn widening_is_one_directional() {
        assert!(PrimitiveKind::Int32.widens_to(PrimitiveKind::Int64));
        assert!(!PrimitiveKind::Int64.widens_to(PrimitiveKind::Int32));
        assert!(PrimitiveKind::Float.widens_to(PrimitiveKind::Double));
        assert!(!PrimitiveKind::Double.widens_to(PrimitiveKind::Float));
    }

    #[test]
    fn signed_never_widens_to_unsigned() {
        for kind in [
            PrimitiveKind::Int8,
            PrimitiveKind::Int16,
            PrimitiveKind::Int32,
            PrimitiveKind::Int64,
        ] {
            for target in kind.widening_targets() {
                assert!(
                    !matches!(
                        target,
                        PrimitiveKind::Uint8
                            | PrimitiveKind::Uint16
                            | PrimitiveKind::Uint32
                            | PrimitiveKind::Uint64
                    ),
                    "{kind} must not widen to {target}"
                );
            }
        }
    }

    #[test]
    fn bool_does_not_widen() {
        assert!(PrimitiveKind::Bool.widening_targets().is_empty());
        assert!(!PrimitiveKind::Bool.is_integer());
        assert!(PrimitiveKind::Double.is_float());
    }
}
