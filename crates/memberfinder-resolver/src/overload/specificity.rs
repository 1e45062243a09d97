//! Most-specific candidate selection.
//!
//! Candidates are only partially ordered: `a` is more specific than `b` when
//! `a`'s formals could themselves be passed to `b`. Two candidates can each
//! fail that test against the other, so selection keeps a running set of
//! mutually non-comparable candidates instead of sorting.

use memberfinder_core::TypeHost;
use tracing::trace;

use crate::callable::Callable;
use crate::conversion::{ConversionRules, is_applicable};

/// Check if `first` is more specific than `second`.
///
/// True when every formal of `first` is compatible with the corresponding
/// formal of `second`. A candidate is more specific than itself.
pub fn is_more_specific<H: TypeHost + ?Sized>(
    first: &Callable,
    second: &Callable,
    host: &H,
    rules: &ConversionRules,
) -> bool {
    is_applicable(&second.params, &first.param_args(), host, rules)
}

/// Reduce applicable candidates to the most specific ones.
///
/// Returns a single candidate when one is more specific than all others,
/// otherwise the ambiguous set in encounter order.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn most_specific<'c, H: TypeHost + ?Sized>(
    candidates: &[&'c Callable],
    host: &H,
    rules: &ConversionRules,
) -> Vec<&'c Callable> {
    let mut most: Vec<&'c Callable> = Vec::new();

    for &candidate in candidates {
        if most.is_empty() {
            most.push(candidate);
            continue;
        }

        let mut more_specific = true;
        let mut less_specific = false;

        for &current in &most {
            if !is_more_specific(candidate, current, host, rules) {
                more_specific = false;
                less_specific = is_more_specific(current, candidate, host, rules);
                break;
            }
        }

        if more_specific {
            trace!(handle = ?candidate.handle, "candidate replaces most specific set");
            most.clear();
            most.push(candidate);
        } else if !less_specific {
            trace!(handle = ?candidate.handle, "candidate joins most specific set");
            most.push(candidate);
        }
    }

    most
}
