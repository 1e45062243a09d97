//! Error types for memberfinder.
//!
//! ## Error Hierarchy
//!
//! ```text
//! RegistrationError  - Host registry population errors
//! ResolutionError    - Catalogue building and member selection errors
//! ├── InvalidTarget  - Target has no member catalogue
//! ├── NotFound       - No member name, no members, or nothing applicable
//! ├── Ambiguous      - Two or more mutually non-comparable candidates
//! └── Internal       - Catalogue invariant violated (a bug, not a caller error)
//! ```

use std::fmt;

use thiserror::Error;

// ============================================================================
// Registration Errors
// ============================================================================

/// Errors raised while populating a host type registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A type with this name or hash already exists.
    #[error("duplicate type: {0}")]
    DuplicateType(String),

    /// A referenced type was not registered.
    #[error("type not found: {0}")]
    TypeNotFound(String),

    /// A declared supertype has the wrong kind.
    #[error("type '{type_name}' cannot extend '{supertype}': {reason}")]
    InvalidSupertype {
        /// The type declaring the supertype.
        type_name: String,
        /// The offending supertype.
        supertype: String,
        /// Why it's rejected.
        reason: &'static str,
    },

    /// A member declaration is malformed.
    #[error("invalid member on '{type_name}': {reason}")]
    InvalidMember {
        /// The declaring type.
        type_name: String,
        /// Why it's rejected.
        reason: String,
    },
}

// ============================================================================
// Resolution Errors
// ============================================================================

/// Why a type cannot be used as a resolution target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidTargetReason {
    /// The empty hash was supplied.
    Empty,
    /// The host does not know the type.
    Unknown,
    /// Primitive types have no members.
    Primitive,
    /// Array types have no member catalogue.
    Array,
}

impl fmt::Display for InvalidTargetReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidTargetReason::Empty => write!(f, "null target type"),
            InvalidTargetReason::Unknown => write!(f, "unknown target type"),
            InvalidTargetReason::Primitive => write!(f, "primitive target type"),
            InvalidTargetReason::Array => write!(f, "array target type"),
        }
    }
}

/// Why no member was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotFoundReason {
    /// No method with this name exists.
    UnknownName,
    /// The target declares no public constructors.
    NoCandidates,
    /// Candidates exist but none accepts the arguments.
    NoApplicable,
}

/// Errors raised while resolving a constructor or method.
///
/// Every variant carries the inputs needed to format a diagnostic. None is
/// retryable: resolution is deterministic in its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    /// The target type has no member catalogue.
    #[error("invalid target '{target}': {reason}")]
    InvalidTarget {
        /// Target type name.
        target: String,
        /// What is wrong with it.
        reason: InvalidTargetReason,
    },

    /// No member matches.
    #[error("{}", describe_not_found(target, member.as_deref(), args, *reason))]
    NotFound {
        /// Target type name.
        target: String,
        /// Method name, `None` for constructors.
        member: Option<String>,
        /// Argument types as a string.
        args: String,
        /// Which step failed.
        reason: NotFoundReason,
    },

    /// Several candidates match and none is most specific.
    #[error(
        "ambiguous request for {}({args}): {candidates}",
        member_path(target, member.as_deref())
    )]
    Ambiguous {
        /// Target type name.
        target: String,
        /// Method name, `None` for constructors.
        member: Option<String>,
        /// Argument types as a string.
        args: String,
        /// The mutually non-comparable candidate signatures.
        candidates: String,
    },

    /// A catalogue invariant was violated.
    #[error("internal error: {message}")]
    Internal {
        /// The error message.
        message: String,
    },
}

impl ResolutionError {
    /// Check if this is a caller-facing `NotFound`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ResolutionError::NotFound { .. })
    }

    /// Check if this is a caller-facing `Ambiguous`.
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, ResolutionError::Ambiguous { .. })
    }

    /// Check if this is an `InvalidTarget`.
    pub fn is_invalid_target(&self) -> bool {
        matches!(self, ResolutionError::InvalidTarget { .. })
    }

    /// Check if this reports a bug rather than a caller error.
    pub fn is_internal(&self) -> bool {
        matches!(self, ResolutionError::Internal { .. })
    }
}

fn member_path(target: &str, member: Option<&str>) -> String {
    match member {
        Some(name) => format!("{target}.{name}"),
        None => format!("constructor {target}"),
    }
}

fn describe_not_found(
    target: &str,
    member: Option<&str>,
    args: &str,
    reason: NotFoundReason,
) -> String {
    match reason {
        NotFoundReason::UnknownName => {
            format!("no method named {}", member_path(target, member))
        }
        NotFoundReason::NoCandidates => {
            format!("no public {} declared", member_path(target, member))
        }
        NotFoundReason::NoApplicable => {
            format!("no {} matching ({args})", member_path(target, member))
        }
    }
}
