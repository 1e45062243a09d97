//! Type compatibility checking.
//!
//! Decides whether an actual argument type can be passed where a formal
//! parameter type is declared, and whether a whole argument list fits a
//! parameter list. Overload resolution is built on these two questions.
//!
//! ## Rules
//!
//! Each position is checked on its own:
//! 1. Identity (same type)
//! 2. Null to reference or array (never to a primitive)
//! 3. Reference widening (subtype to supertype or implemented interface)
//! 4. Primitive identity, or widening when [`ConversionRules`] allows it
//! 5. Array covariance (element types compatible, recursively)
//!
//! Unknown types are compatible only with themselves.
//!
//! Arrays are not reference types here: an array argument never converts
//! to a class or interface parameter, not even a root type like `Object`.
//! Reflection runtimes whose arrays subclass the root object would accept
//! `String[]` for an `Object` parameter; this crate reports `NoApplicable`.

use memberfinder_core::{ArgType, TypeEntry, TypeHash, TypeHost};

mod array;
mod primitive;
mod reference;

pub use array::find_array_conversion;
pub use primitive::find_primitive_conversion;
pub use reference::{find_null_conversion, find_reference_conversion};

/// Options controlling which conversions are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConversionRules {
    /// Allow promotions from [`PrimitiveKind::widening_targets`]. Off by
    /// default: primitives then only match their own kind.
    ///
    /// Never applies to array elements.
    ///
    /// [`PrimitiveKind::widening_targets`]: memberfinder_core::PrimitiveKind::widening_targets
    pub primitive_widening: bool,
}

impl ConversionRules {
    /// Identity-only primitive rules.
    pub const STRICT: ConversionRules = ConversionRules {
        primitive_widening: false,
    };

    /// Rules with primitive widening enabled.
    pub const WIDENING: ConversionRules = ConversionRules {
        primitive_widening: true,
    };
}

/// A conversion that makes an actual argument acceptable to a formal parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// The kind of conversion being performed.
    pub kind: ConversionKind,
}

/// The kind of conversion being performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionKind {
    /// No conversion needed (exact match).
    Identity,

    /// Null argument to a reference parameter.
    NullToReference,

    /// Null argument to an array parameter.
    NullToArray,

    /// Subtype to one of its supertypes or implemented interfaces.
    ReferenceWidening {
        /// The supertype being widened to.
        target: TypeHash,
    },

    /// Primitive promotion (only with widening enabled).
    PrimitiveWidening {
        /// Source type hash.
        from: TypeHash,
        /// Target type hash.
        to: TypeHash,
    },

    /// Array whose element type converts to the formal element type.
    ArrayCovariance {
        /// How the element converts.
        element: Box<ConversionKind>,
    },
}

impl Conversion {
    /// Create an identity conversion.
    pub(crate) fn identity() -> Self {
        Self {
            kind: ConversionKind::Identity,
        }
    }

    pub(crate) fn new(kind: ConversionKind) -> Self {
        Self { kind }
    }

    /// Check if this is an exact match (no conversion).
    pub fn is_exact(&self) -> bool {
        matches!(self.kind, ConversionKind::Identity)
    }
}

/// Find the conversion that lets `actual` be passed as `formal`.
///
/// Returns `None` if the types are incompatible.
pub fn find_conversion<H: TypeHost + ?Sized>(
    actual: ArgType,
    formal: TypeHash,
    host: &H,
    rules: &ConversionRules,
) -> Option<Conversion> {
    let actual = match actual {
        ArgType::Null => return find_null_conversion(formal, host),
        ArgType::Type(hash) => hash,
    };

    if actual == formal {
        return Some(Conversion::identity());
    }

    let actual_entry = host.get_type(actual)?;
    let formal_entry = host.get_type(formal)?;

    match (actual_entry, formal_entry) {
        (TypeEntry::Primitive(from), TypeEntry::Primitive(to)) => {
            find_primitive_conversion(from.kind, to.kind, rules)
        }
        (from, to) if from.is_reference() && to.is_reference() => {
            find_reference_conversion(actual, formal, host)
        }
        (TypeEntry::Array(from), TypeEntry::Array(to)) => {
            find_array_conversion(from.element, to.element, host)
        }
        _ => None,
    }
}

/// Check if `actual` can be passed as `formal`.
pub fn is_compatible<H: TypeHost + ?Sized>(
    actual: ArgType,
    formal: TypeHash,
    host: &H,
    rules: &ConversionRules,
) -> bool {
    find_conversion(actual, formal, host, rules).is_some()
}

/// Check if a parameter list accepts an argument list.
///
/// True iff both lists have the same length and every position is
/// compatible. There are no default or variable-arity parameters.
pub fn is_applicable<H: TypeHost + ?Sized>(
    formals: &[TypeHash],
    actuals: &[ArgType],
    host: &H,
    rules: &ConversionRules,
) -> bool {
    formals.len() == actuals.len()
        && formals
            .iter()
            .zip(actuals)
            .all(|(&formal, &actual)| is_compatible(actual, formal, host, rules))
}

/// Find the per-position conversions for an applicable argument list.
///
/// Returns `None` if the lists are not applicable.
pub fn find_conversions<H: TypeHost + ?Sized>(
    formals: &[TypeHash],
    actuals: &[ArgType],
    host: &H,
    rules: &ConversionRules,
) -> Option<Vec<Conversion>> {
    if formals.len() != actuals.len() {
        return None;
    }
    formals
        .iter()
        .zip(actuals)
        .map(|(&formal, &actual)| find_conversion(actual, formal, host, rules))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use memberfinder_core::{ClassEntry, InterfaceEntry, PrimitiveKind};
    use memberfinder_registry::TypeRegistry;

    struct Types {
        registry: TypeRegistry,
        object: TypeHash,
        string: TypeHash,
        int: TypeHash,
        long: TypeHash,
    }

    fn setup() -> Types {
        let mut registry = TypeRegistry::with_primitives();
        let object = registry
            .register_type(ClassEntry::new("Object").into())
            .unwrap();
        let seq = registry
            .register_type(InterfaceEntry::new("CharSequence").into())
            .unwrap();
        let string = registry
            .register_type(
                ClassEntry::new("String")
                    .with_base(object)
                    .with_interface(seq)
                    .into(),
            )
            .unwrap();
        Types {
            registry,
            object,
            string,
            int: PrimitiveKind::Int32.type_hash(),
            long: PrimitiveKind::Int64.type_hash(),
        }
    }

    #[test]
    fn identity_is_exact() {
        let t = setup();
        let conv = find_conversion(t.string.into(), t.string, &t.registry, &ConversionRules::STRICT);
        assert!(conv.unwrap().is_exact());
    }

    #[test]
    fn null_matches_reference_not_primitive() {
        let t = setup();
        let rules = ConversionRules::STRICT;
        assert!(is_compatible(ArgType::Null, t.string, &t.registry, &rules));
        assert!(!is_compatible(ArgType::Null, t.int, &t.registry, &rules));
    }

    #[test]
    fn reference_widening_is_one_way() {
        let t = setup();
        let rules = ConversionRules::STRICT;
        assert!(is_compatible(t.string.into(), t.object, &t.registry, &rules));
        assert!(!is_compatible(t.object.into(), t.string, &t.registry, &rules));
    }

    #[test]
    fn primitives_need_exact_kind_by_default() {
        let t = setup();
        assert!(!is_compatible(t.int.into(), t.long, &t.registry, &ConversionRules::STRICT));
        assert!(is_compatible(t.int.into(), t.long, &t.registry, &ConversionRules::WIDENING));
    }

    #[test]
    fn primitive_and_reference_never_mix() {
        let t = setup();
        let rules = ConversionRules::WIDENING;
        assert!(!is_compatible(t.int.into(), t.object, &t.registry, &rules));
        assert!(!is_compatible(t.string.into(), t.int, &t.registry, &rules));
    }

    #[test]
    fn unknown_types_only_match_themselves() {
        let t = setup();
        let ghost = TypeHash::from_name("Ghost");
        let rules = ConversionRules::STRICT;
        assert!(is_compatible(ghost.into(), ghost, &t.registry, &rules));
        assert!(!is_compatible(ghost.into(), t.object, &t.registry, &rules));
        assert!(!is_compatible(ArgType::Null, ghost, &t.registry, &rules));
    }

    #[test]
    fn arity_mismatch_is_not_applicable() {
        let t = setup();
        let rules = ConversionRules::STRICT;
        assert!(is_applicable(&[t.int], &[t.int.into()], &t.registry, &rules));
        assert!(!is_applicable(&[t.int], &[], &t.registry, &rules));
        assert!(!is_applicable(
            &[t.int, t.int],
            &[t.int.into(), t.int.into(), t.int.into()],
            &t.registry,
            &rules
        ));
    }

    #[test]
    fn positions_are_independent() {
        let t = setup();
        let rules = ConversionRules::STRICT;
        let formals = [t.object, t.int];
        assert!(is_applicable(&formals, &[t.string.into(), t.int.into()], &t.registry, &rules));
        assert!(!is_applicable(&formals, &[t.string.into(), ArgType::Null], &t.registry, &rules));
    }

    #[test]
    fn conversions_per_position() {
        let t = setup();
        let convs = find_conversions(
            &[t.object, t.string],
            &[t.string.into(), ArgType::Null],
            &t.registry,
            &ConversionRules::STRICT,
        )
        .unwrap();
        assert_eq!(
            convs[0].kind,
            ConversionKind::ReferenceWidening { target: t.object }
        );
        assert_eq!(convs[1].kind, ConversionKind::NullToReference);
    }
}
