//! Deterministic hash-based type identity.
//!
//! [`TypeHash`] is a 64-bit hash that identifies types, array types, methods
//! and constructors. Hashes are computed from names and signatures, so the same
//! type always gets the same identity no matter which host registered it or in
//! what order.
//!
//! # Examples
//!
//! ```
//! use memberfinder_core::TypeHash;
//!
//! let string = TypeHash::from_name("String");
//! assert_eq!(string, TypeHash::from_name("String"));
//!
//! // Arrays are identified by their element type
//! let strings = TypeHash::from_array(string);
//! assert_ne!(strings, string);
//! assert_eq!(strings, TypeHash::from_array(TypeHash::from_name("String")));
//! ```

use std::fmt;
use xxhash_rust::xxh64::xxh64;

/// Domain-specific mixing constants for hash computation.
///
/// Different entity kinds sharing a name still produce distinct hashes.
pub mod hash_constants {
    /// Separator constant for chaining components.
    pub const SEP: u64 = 0x4bc94d6bd06053ad;

    /// Domain marker for named type hashes.
    pub const TYPE: u64 = 0x2fac10b63a6cc57c;

    /// Domain marker for array type hashes.
    pub const ARRAY: u64 = 0x6c1d5e93b2a7f048;

    /// Domain marker for method hashes.
    pub const METHOD: u64 = 0x7d3c8b4a92e15f6d;

    /// Domain marker for constructor hashes.
    pub const CONSTRUCTOR: u64 = 0x9a7f3d5e2b8c4601;

    /// Base marker for parameter positions.
    pub const PARAM: u64 = 0x9e3779b97f4a7c15;
}

/// A deterministic 64-bit hash identifying a type or a member signature.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TypeHash(pub u64);

impl TypeHash {
    /// Empty hash. Stands in for "no type" and is never a valid target.
    pub const EMPTY: TypeHash = TypeHash(0);

    /// Create a type hash from a qualified type name.
    #[inline]
    pub fn from_name(name: &str) -> Self {
        TypeHash(hash_constants::TYPE ^ xxh64(name.as_bytes(), 0))
    }

    /// Create the hash of the array type whose elements are `element`.
    ///
    /// Nested arrays chain: `from_array(from_array(int))` is `int[][]`.
    #[inline]
    pub fn from_array(element: TypeHash) -> Self {
        TypeHash(
            hash_constants::ARRAY
                .wrapping_mul(hash_constants::SEP)
                .wrapping_add(element.0.rotate_left(17)),
        )
    }

    /// Create a method hash from owner type, method name and parameter types.
    ///
    /// Parameter order matters: `f(int, float)` and `f(float, int)` differ.
    #[inline]
    pub fn from_method(owner: TypeHash, name: &str, param_hashes: &[TypeHash]) -> Self {
        // The owner seeds the name hash so owner and name never commute
        let seed = hash_constants::METHOD ^ xxh64(name.as_bytes(), owner.0);
        TypeHash(mix_params(seed, param_hashes))
    }

    /// Create a constructor hash from owner type and parameter types.
    #[inline]
    pub fn from_constructor(owner: TypeHash, param_hashes: &[TypeHash]) -> Self {
        let seed = hash_constants::CONSTRUCTOR ^ owner.0;
        TypeHash(mix_params(seed, param_hashes))
    }

    /// Check if this is the empty hash.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the underlying u64 value.
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

fn mix_params(mut hash: u64, params: &[TypeHash]) -> u64 {
    for (i, param) in params.iter().enumerate() {
        let marker = hash_constants::PARAM.wrapping_mul(i as u64 + 1);
        // wrapping_mul keeps parameter order significant
        hash = hash
            .wrapping_mul(hash_constants::SEP)
            .wrapping_add(marker ^ param.0);
    }
    hash
}

impl fmt::Debug for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeHash({:#018x})", self.0)
    }
}

impl fmt::Display for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}
