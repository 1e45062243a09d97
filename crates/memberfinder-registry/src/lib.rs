//! memberfinder Registry crate.
//!
//! Provides [`TypeRegistry`], an in-memory host type system implementing
//! [`memberfinder_core::TypeHost`], and [`TypeHierarchy`], the subtype graph
//! it answers supertype queries from.

mod hierarchy;
mod registry;

pub use hierarchy::{SupertypeEdge, TypeHierarchy};
pub use registry::TypeRegistry;
