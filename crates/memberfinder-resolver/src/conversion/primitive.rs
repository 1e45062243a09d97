//! Primitive conversions.
//!
//! Same kind is always compatible (and handled as identity before we get
//! here). Anything else needs widening enabled and an entry in the kind's
//! widening table.

use memberfinder_core::PrimitiveKind;

use super::{Conversion, ConversionKind, ConversionRules};

/// Find a conversion between two primitive kinds.
pub fn find_primitive_conversion(
    from: PrimitiveKind,
    to: PrimitiveKind,
    rules: &ConversionRules,
) -> Option<Conversion> {
    if from == to {
        return Some(Conversion::identity());
    }

    if rules.primitive_widening && from.widens_to(to) {
        return Some(Conversion::new(ConversionKind::PrimitiveWidening {
            from: from.type_hash(),
            to: to.type_hash(),
        }));
    }

    None
}
