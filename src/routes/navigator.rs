//! One navigation attempt, end to end.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app shell calls `navigate` whenever the location changes. The guard
//! runs on every hop, including hops produced by redirect records, so a
//! redirect can never land an anonymous visitor on an auth-only view.
//!
//! ERROR HANDLING
//! ==============
//! Unmatched paths are an outcome, not an error. Errors are reserved for a
//! broken table: unknown redirect names, parameterized redirect targets, and
//! redirect chains longer than `MAX_REDIRECTS`.

#[cfg(test)]
#[path = "navigator_test.rs"]
mod navigator_test;

use leptos::logging::{log, warn};

use super::pattern::normalize_path;
use super::{Decision, Resolved, RouteError, RouteTable, RouteTarget, decide, guard};
use crate::state::session::SessionFlag;

/// Upper bound on redirect hops for a single navigation.
pub const MAX_REDIRECTS: usize = 8;

/// Why the first redirect of a navigation happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectReason {
    /// The guard rejected an anonymous visit to an auth-only route.
    Unauthenticated,
    /// The matched record is itself a redirect.
    RouteRedirect,
    /// The matched record defers to the default-destination policy.
    DefaultDestination,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The requested path renders as-is.
    Render(Resolved),
    /// Replace the location with `to`, which renders without further hops.
    Redirect { to: String, reason: RedirectReason },
    NotFound { path: String },
}

/// Resolve, guard, and follow redirects for `path`.
///
/// # Errors
///
/// Returns a `RouteError` when a redirect target cannot be built or the
/// redirect chain exceeds `MAX_REDIRECTS`.
pub fn navigate(table: &RouteTable, path: &str, session: &SessionFlag) -> Result<NavigationOutcome, RouteError> {
    let requested = normalize_path(path);
    let mut current = requested.clone();
    let mut first_reason = None;

    for _ in 0..=MAX_REDIRECTS {
        let resolved = match table.resolve(&current) {
            Ok(resolved) => resolved,
            Err(RouteError::NotFound { path }) => {
                warn!("no route for {path} (requested {requested})");
                return Ok(NavigationOutcome::NotFound { path });
            }
            Err(e) => return Err(e),
        };

        let (next, reason) = match guard(&resolved, session) {
            Decision::RedirectTo(target) => (table.href(&target)?, RedirectReason::Unauthenticated),
            Decision::Proceed => match resolved.target() {
                RouteTarget::View(_) => {
                    return Ok(match first_reason {
                        None => NavigationOutcome::Render(resolved),
                        Some(reason) => NavigationOutcome::Redirect { to: resolved.path, reason },
                    });
                }
                RouteTarget::Redirect(target) => (table.href(&target)?, RedirectReason::RouteRedirect),
                RouteTarget::DefaultDestination => (table.href(&decide(session))?, RedirectReason::DefaultDestination),
            },
        };

        log!("redirect {current} -> {next} ({reason:?})");
        first_reason.get_or_insert(reason);
        current = next;
    }

    warn!("redirect limit reached for {requested}");
    Err(RouteError::RedirectLoop { path: requested })
}
