//! Call resolution for memberfinder.
//!
//! Given a target type and the types of the actual arguments, selects the
//! constructor or method to invoke using compiler-style overload rules, or
//! reports why none or several qualify.
//!
//! - [`conversion`]: per-argument compatibility
//! - [`Catalogue`]: the public members of one type, built once
//! - [`overload`]: exact match, applicability, most-specific selection
//! - [`Resolver`] and [`MemberFinder`]: the entry points
//!
//! All type knowledge comes from a [`memberfinder_core::TypeHost`].

mod cache;
mod callable;
mod catalogue;
mod config;
pub mod conversion;
mod finder;
pub mod overload;

pub use cache::CatalogueCache;
pub use callable::Callable;
pub use catalogue::Catalogue;
pub use config::ResolverConfig;
pub use conversion::{Conversion, ConversionKind, ConversionRules};
pub use finder::{MemberFinder, Resolver};
