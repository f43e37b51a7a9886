// origin.rs — Origin validation.
//
// An origin is the requesting client application's network origin. It is
// independent of the agent: a rule may admit alice but only from one app.
//
// A request origin listed in the caller's trusted origins switches origin
// checking off for the whole evaluation, not just for one rule. The engine
// applies that once, up front, through `effective_origin`, and then checks
// every rule against the result.

use wac_graph::Term;

use crate::authorization::Authorization;

/// The origin to check rules against after the trusted-origin bypass.
///
/// Returns `None` (nothing to check) when the request has no origin or its
/// origin is exactly one of `trusted_origins`.
pub fn effective_origin<'a>(origin: Option<&'a Term>, trusted_origins: &[Term]) -> Option<&'a Term> {
    match origin {
        Some(o) if trusted_origins.contains(o) => None,
        other => other,
    }
}

/// Whether a rule accepts a request coming from `origin`.
///
/// `origin` must already be the effective origin.
pub fn origin_allowed(auth: &Authorization, origin: Option<&Term>) -> bool {
    match origin {
        None => true,
        Some(o) => !auth.is_origin_restricted() || auth.origins.contains(o),
    }
}

/// Single-rule form: bypass and check in one call.
pub fn satisfies_origin(auth: &Authorization, origin: Option<&Term>, trusted_origins: &[Term]) -> bool {
    origin_allowed(auth, effective_origin(origin, trusted_origins))
}
