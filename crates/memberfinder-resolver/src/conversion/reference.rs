//! Reference conversions.
//!
//! This module handles conversions involving reference types:
//! - Null to any reference or array
//! - Subtype to supertype or implemented interface

use memberfinder_core::{TypeEntry, TypeHash, TypeHost};

use super::{Conversion, ConversionKind};

/// Find the conversion for a null argument passed as `formal`.
///
/// Null stands in for any reference or array, never for a primitive.
pub fn find_null_conversion<H: TypeHost + ?Sized>(
    formal: TypeHash,
    host: &H,
) -> Option<Conversion> {
    match host.get_type(formal)? {
        TypeEntry::Class(_) | TypeEntry::Interface(_) => {
            Some(Conversion::new(ConversionKind::NullToReference))
        }
        TypeEntry::Array(_) => Some(Conversion::new(ConversionKind::NullToArray)),
        TypeEntry::Primitive(_) => None,
    }
}

/// Find the widening conversion from reference `actual` to reference `formal`.
pub fn find_reference_conversion<H: TypeHost + ?Sized>(
    actual: TypeHash,
    formal: TypeHash,
    host: &H,
) -> Option<Conversion> {
    if actual == formal {
        return Some(Conversion::identity());
    }

    host.is_subtype(actual, formal)
        .then(|| Conversion::new(ConversionKind::ReferenceWidening { target: formal }))
}
