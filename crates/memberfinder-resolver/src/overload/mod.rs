//! Overload resolution.
//!
//! Given one bucket of a [`Catalogue`] (the constructors, or the methods
//! sharing a name) and an argument list, selects the single member to call:
//!
//! 1. A candidate whose formals equal the arguments exactly wins immediately.
//! 2. Otherwise every applicable candidate is collected.
//! 3. One candidate is returned as is; several go through
//!    [`specificity::most_specific`].

mod specificity;

pub use specificity::{is_more_specific, most_specific};

use memberfinder_core::{ArgType, NotFoundReason, ResolutionError, TypeHash, TypeHost};
use tracing::trace;

use crate::callable::Callable;
use crate::catalogue::Catalogue;
use crate::conversion::{ConversionRules, is_applicable};

/// Resolve a constructor call against a catalogue.
pub fn find_constructor_in<'c, H: TypeHost + ?Sized>(
    catalogue: &'c Catalogue,
    args: &[ArgType],
    host: &H,
    rules: &ConversionRules,
) -> Result<&'c Callable, ResolutionError> {
    resolve_in_bucket(catalogue, catalogue.constructors(), None, args, host, rules)
}

/// Resolve a method call against a catalogue.
pub fn find_method_in<'c, H: TypeHost + ?Sized>(
    catalogue: &'c Catalogue,
    name: &str,
    args: &[ArgType],
    host: &H,
    rules: &ConversionRules,
) -> Result<&'c Callable, ResolutionError> {
    let Some(bucket) = catalogue.methods(name) else {
        return Err(not_found(
            catalogue,
            Some(name),
            args,
            host,
            NotFoundReason::UnknownName,
        ));
    };

    resolve_in_bucket(catalogue, bucket, Some(name), args, host, rules)
}

/// Select the member of `bucket` to call with `args`.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn resolve_in_bucket<'c, H: TypeHost + ?Sized>(
    catalogue: &'c Catalogue,
    bucket: &[TypeHash],
    member: Option<&str>,
    args: &[ArgType],
    host: &H,
    rules: &ConversionRules,
) -> Result<&'c Callable, ResolutionError> {
    if bucket.is_empty() {
        return Err(not_found(
            catalogue,
            member,
            args,
            host,
            NotFoundReason::NoCandidates,
        ));
    }

    let mut candidates = Vec::new();
    for &handle in bucket {
        let callable = catalogue.lookup(handle)?;

        if callable.matches_exactly(args) {
            trace!(?handle, "exact match");
            return Ok(callable);
        }

        if is_applicable(&callable.params, args, host, rules) {
            trace!(?handle, "applicable candidate");
            candidates.push(callable);
        }
    }

    match candidates.as_slice() {
        [] => Err(not_found(
            catalogue,
            member,
            args,
            host,
            NotFoundReason::NoApplicable,
        )),
        [only] => Ok(*only),
        _ => match most_specific(&candidates, host, rules).as_slice() {
            [best] => Ok(*best),
            ambiguous => Err(ambiguous_error(catalogue, member, args, ambiguous, host)),
        },
    }
}

fn not_found<H: TypeHost + ?Sized>(
    catalogue: &Catalogue,
    member: Option<&str>,
    args: &[ArgType],
    host: &H,
    reason: NotFoundReason,
) -> ResolutionError {
    ResolutionError::NotFound {
        target: catalogue.target_name().to_string(),
        member: member.map(str::to_string),
        args: host.format_args(args),
        reason,
    }
}

fn ambiguous_error<H: TypeHost + ?Sized>(
    catalogue: &Catalogue,
    member: Option<&str>,
    args: &[ArgType],
    candidates: &[&Callable],
    host: &H,
) -> ResolutionError {
    let candidates = candidates
        .iter()
        .map(|c| c.signature(host))
        .collect::<Vec<_>>()
        .join(", ");

    ResolutionError::Ambiguous {
        target: catalogue.target_name().to_string(),
        member: member.map(str::to_string),
        args: host.format_args(args),
        candidates,
    }
}
