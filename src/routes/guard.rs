//! Pre-navigation auth guard and the root landing policy.
//!
//! Both functions are pure: the caller reads the session flag at decision
//! time and passes it in. Applying the decision (cancelling the current
//! navigation, pushing the redirect) belongs to the router runtime.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::definitions::{AUTHENTICATED_ROOT, LOGIN};
use super::{RedirectTarget, Resolved};
use crate::state::session::SessionFlag;

/// Outcome of guarding one navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    RedirectTo(RedirectTarget),
}

/// Target used whenever an anonymous visitor hits an auth-only route.
pub const LOGIN_TARGET: RedirectTarget = RedirectTarget::Name(LOGIN);

/// Gate a resolved navigation on the current session flag.
pub fn guard(target: &Resolved, session: &SessionFlag) -> Decision {
    let requires_auth = target.route.requires_auth() || target.matched().iter().any(|record| record.requires_auth);
    if requires_auth && !session.is_authenticated() {
        Decision::RedirectTo(LOGIN_TARGET)
    } else {
        Decision::Proceed
    }
}

/// Pick where `/` sends the visitor.
pub fn decide(session: &SessionFlag) -> RedirectTarget {
    if session.is_authenticated() {
        RedirectTarget::Path(AUTHENTICATED_ROOT)
    } else {
        LOGIN_TARGET
    }
}
