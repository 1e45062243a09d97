//! Actual argument types.
//!
//! A resolution request describes each argument either by its type or as an
//! untyped null. Callers holding values rather than types can derive the list
//! through [`ArgValue`].

use std::fmt;

use crate::{PrimitiveKind, TypeHash};

/// The type of one actual argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgType {
    /// An absent or null value. Fits any reference or array parameter.
    Null,
    /// A value of a known type.
    Type(TypeHash),
}

impl ArgType {
    /// Get the type hash, or `None` for a null argument.
    pub fn type_hash(self) -> Option<TypeHash> {
        match self {
            ArgType::Null => None,
            ArgType::Type(hash) => Some(hash),
        }
    }

    /// Check if this is a null argument.
    pub fn is_null(self) -> bool {
        matches!(self, ArgType::Null)
    }

    /// Describe an optional argument value.
    pub fn of(value: Option<&dyn ArgValue>) -> Self {
        value.map_or(ArgType::Null, |v| ArgType::Type(v.type_hash()))
    }

    /// Describe a list of optional argument values.
    pub fn of_values(values: &[Option<&dyn ArgValue>]) -> Vec<ArgType> {
        values.iter().map(|v| ArgType::of(*v)).collect()
    }

    /// Convert a slice of type hashes.
    pub fn from_types(types: &[TypeHash]) -> Vec<ArgType> {
        types.iter().copied().map(ArgType::Type).collect()
    }
}

impl From<TypeHash> for ArgType {
    fn from(hash: TypeHash) -> Self {
        ArgType::Type(hash)
    }
}

impl fmt::Display for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgType::Null => write!(f, "null"),
            ArgType::Type(hash) => write!(f, "{hash}"),
        }
    }
}

/// A value that knows its own type identity.
///
/// Implemented for the Rust primitives that map onto [`PrimitiveKind`]. Host
/// object types implement it to report their registered type.
pub trait ArgValue {
    /// The type of this value.
    fn type_hash(&self) -> TypeHash;
}

macro_rules! impl_primitive_arg {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl ArgValue for $ty {
                fn type_hash(&self) -> TypeHash {
                    PrimitiveKind::$kind.type_hash()
                }
            }
        )*
    };
}

impl_primitive_arg! {
    bool => Bool,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => Uint8,
    u16 => Uint16,
    u32 => Uint32,
    u64 => Uint64,
    f32 => Float,
    f64 => Double,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Widget;

    impl ArgValue for Widget {
        fn type_hash(&self) -> TypeHash {
            TypeHash::from_name("Widget")
        }
    }

    #[test]
    fn primitive_values_map_to_kinds() {
        let int: &dyn ArgValue = &5i32;
        let double: &dyn ArgValue = &1.5f64;
        assert_eq!(ArgType::of(Some(int)), ArgType::Type(TypeHash::from_name("int")));
        assert_eq!(ArgType::of(Some(double)), ArgType::Type(TypeHash::from_name("double")));
    }

    #[test]
    fn missing_value_is_null() {
        let widget: &dyn ArgValue = &Widget;
        let flag: &dyn ArgValue = &true;
        let args = ArgType::of_values(&[Some(widget), None, Some(flag)]);
        assert_eq!(
            args,
            vec![
                ArgType::Type(TypeHash::from_name("Widget")),
                ArgType::Null,
                ArgType::Type(TypeHash::from_name("bool")),
            ]
        );
        assert!(args[1].is_null());
        assert_eq!(args[1].type_hash(), None);
    }
}
