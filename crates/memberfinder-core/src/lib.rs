//! Core types for memberfinder.
//!
//! This crate holds everything shared between a host type registry and the
//! resolver:
//!
//! - [`TypeHash`]: deterministic identity for types and member signatures
//! - [`PrimitiveKind`], [`Visibility`]: basic type system vocabulary
//! - [`entries`]: host type records (classes, interfaces, arrays, members)
//! - [`ArgType`], [`ArgValue`]: actual argument descriptions
//! - [`TypeHost`]: the read-only seam the resolver queries
//! - [`error`]: registration and resolution errors

mod arg_type;
pub mod entries;
pub mod error;
mod host;
mod primitive_kind;
mod type_hash;
mod visibility;

pub use arg_type::{ArgType, ArgValue};
pub use entries::{
    ArrayEntry, ClassEntry, InterfaceEntry, MemberEntry, MemberKind, PrimitiveEntry, TypeEntry,
};
pub use error::{
    InvalidTargetReason, NotFoundReason, RegistrationError, ResolutionError,
};
pub use host::TypeHost;
pub use primitive_kind::PrimitiveKind;
pub use type_hash::{TypeHash, hash_constants};
pub use visibility::Visibility;
