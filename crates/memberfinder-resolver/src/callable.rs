//! Catalogued members.

use memberfinder_core::{ArgType, MemberEntry, TypeHash, TypeHost};

/// A constructor or method as seen by resolution.
///
/// Immutable once catalogued. The `handle` is the host's invocation handle;
/// the resolver never interprets it beyond using it as a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Callable {
    /// Method name, `None` for constructors.
    pub name: Option<String>,
    /// Formal parameter types, in order.
    pub params: Vec<TypeHash>,
    /// Opaque invocation handle.
    pub handle: TypeHash,
    /// Type that declares the member.
    pub declaring_type: TypeHash,
}

impl Callable {
    /// Describe a host member.
    pub fn from_member(member: &MemberEntry) -> Self {
        Self {
            name: member.name().map(str::to_string),
            params: member.params.clone(),
            handle: member.member_hash,
            declaring_type: member.owner,
        }
    }

    /// Check if this is a constructor.
    pub fn is_constructor(&self) -> bool {
        self.name.is_none()
    }

    /// Number of formal parameters.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// The formal list read as an argument list.
    ///
    /// Used to ask whether one candidate could be passed to another.
    pub fn param_args(&self) -> Vec<ArgType> {
        ArgType::from_types(&self.params)
    }

    /// Check if the formal list equals `args` position for position.
    ///
    /// A null argument never matches exactly.
    pub fn matches_exactly(&self, args: &[ArgType]) -> bool {
        self.params.len() == args.len()
            && self
                .params
                .iter()
                .zip(args)
                .all(|(&param, &arg)| arg == ArgType::Type(param))
    }

    /// Render as `name(A, B)`, or `Owner(A, B)` for a constructor.
    pub fn signature<H: TypeHost + ?Sized>(&self, host: &H) -> String {
        let params = host.format_args(&self.param_args());
        match &self.name {
            Some(name) => format!("{name}({params})"),
            None => format!("{}({params})", host.type_name(self.declaring_type)),
        }
    }
}
