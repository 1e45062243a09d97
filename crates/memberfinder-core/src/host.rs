//! The host type system seam.
//!
//! Everything the resolver knows about types comes through [`TypeHost`]. A
//! host runtime implements it over whatever introspection it has; the resolver
//! never mutates it.

use std::sync::Arc;

use rustc_hash::FxHashSet;

use crate::{ArgType, MemberEntry, TypeEntry, TypeHash};

/// Read-only access to a host's type metadata.
pub trait TypeHost {
    /// Look up a type by identity.
    fn get_type(&self, hash: TypeHash) -> Option<&TypeEntry>;

    /// Transitive supertypes of `hash`, excluding `hash` itself.
    ///
    /// Order is breadth-first from the type: base class before interfaces at
    /// each level, each type listed once.
    fn supertypes(&self, hash: TypeHash) -> Vec<TypeHash>;

    /// Check if `sub` is `sup` or one of its transitive subtypes.
    fn is_subtype(&self, sub: TypeHash, sup: TypeHash) -> bool {
        sub == sup || self.supertypes(sub).contains(&sup)
    }

    /// Constructors declared on `hash`.
    fn constructors(&self, hash: TypeHash) -> Vec<&MemberEntry> {
        self.get_type(hash)
            .map(|entry| entry.constructors().iter().collect())
            .unwrap_or_default()
    }

    /// All methods visible on `hash`: declared ones first, then inherited ones
    /// in supertype order. An inherited method with the same signature as one
    /// already collected is hidden by it.
    fn methods(&self, hash: TypeHash) -> Vec<&MemberEntry> {
        let mut seen: FxHashSet<(&str, &[TypeHash])> = FxHashSet::default();
        let mut methods = Vec::new();

        let chain = std::iter::once(hash).chain(self.supertypes(hash));
        for owner in chain {
            let Some(entry) = self.get_type(owner) else {
                continue;
            };
            for method in entry.declared_methods() {
                let key = (method.name().unwrap_or_default(), method.params.as_slice());
                if seen.insert(key) {
                    methods.push(method);
                }
            }
        }

        methods
    }

    /// Human-readable type name for diagnostics.
    fn type_name(&self, hash: TypeHash) -> String {
        self.get_type(hash)
            .map(|e| e.name().to_string())
            .unwrap_or_else(|| format!("{hash:?}"))
    }

    /// Render an argument list for diagnostics, e.g. `String, null, int`.
    fn format_args(&self, args: &[ArgType]) -> String {
        args.iter()
            .map(|arg| match arg {
                ArgType::Null => "null".to_string(),
                ArgType::Type(hash) => self.type_name(*hash),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

macro_rules! forward_type_host {
    ($($ptr:ty),*) => {$(
        impl<T: TypeHost + ?Sized> TypeHost for $ptr {
            fn get_type(&self, hash: TypeHash) -> Option<&TypeEntry> {
                (**self).get_type(hash)
            }

            fn supertypes(&self, hash: TypeHash) -> Vec<TypeHash> {
                (**self).supertypes(hash)
            }

            fn is_subtype(&self, sub: TypeHash, sup: TypeHash) -> bool {
                (**self).is_subtype(sub, sup)
            }

            fn constructors(&self, hash: TypeHash) -> Vec<&MemberEntry> {
                (**self).constructors(hash)
            }

            fn methods(&self, hash: TypeHash) -> Vec<&MemberEntry> {
                (**self).methods(hash)
            }

            fn type_name(&self, hash: TypeHash) -> String {
                (**self).type_name(hash)
            }

            fn format_args(&self, args: &[ArgType]) -> String {
                (**self).format_args(args)
            }
        }
    )*};
}

forward_type_host!(&T, Box<T>, Arc<T>);
