//! Array conversions.
//!
//! An array converts to another array when its element type converts to the
//! other's element type under the identity, reference and primitive-identity
//! rules. Nested arrays recurse to any depth. Primitive widening is never
//! applied to elements: `int[]` is not an `int64[]`.

use memberfinder_core::{ArgType, TypeHash, TypeHost};

use super::{Conversion, ConversionKind, ConversionRules, find_conversion};

/// Find a conversion from an array of `from_element` to an array of `to_element`.
pub fn find_array_conversion<H: TypeHost + ?Sized>(
    from_element: TypeHash,
    to_element: TypeHash,
    host: &H,
) -> Option<Conversion> {
    let element = find_conversion(
        ArgType::Type(from_element),
        to_element,
        host,
        &ConversionRules::STRICT,
    )?;

    if element.is_exact() {
        return Some(Conversion::identity());
    }

    Some(Conversion::new(ConversionKind::ArrayCovariance {
        element: Box::new(element.kind),
    }))
}
