//! Host type entries.
//!
//! These are the records a host type system hands to the resolver:
//!
//! - [`TypeEntry`] - Unified enum wrapping every type kind
//! - [`ClassEntry`] - Concrete reference types with constructors and methods
//! - [`InterfaceEntry`] - Interface types with method declarations
//! - [`ArrayEntry`] - Array types, linked to their element type
//! - [`PrimitiveEntry`] - Built-in numeric and boolean types
//! - [`MemberEntry`] - A constructor or method declaration

mod array;
mod class;
mod interface;
mod member;
mod primitive;
mod type_entry;

pub use array::ArrayEntry;
pub use class::ClassEntry;
pub use interface::InterfaceEntry;
pub use member::{MemberEntry, MemberKind};
pub use primitive::PrimitiveEntry;
pub use type_entry::TypeEntry;
