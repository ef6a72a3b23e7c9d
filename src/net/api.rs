//! REST API helpers for communicating with the Biblo backend.
//!
//! Browser builds (`csr`) make real HTTP calls via `gloo-net`. Other builds
//! return `None` so shared code stays callable in native tests.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option` outputs instead of panics; a failed identity fetch
//! only hides the username in the layout.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::CurrentUser;
use crate::config::ApiConfig;
use crate::state::session::SessionFlag;

pub const CURRENT_USER_PATH: &str = "/api/auth/me";

#[cfg(any(test, feature = "csr"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Fetch the signed-in identity from `/api/auth/me`.
/// Returns `None` without a token, on any failure, or outside the browser.
pub async fn fetch_current_user(config: &ApiConfig, session: &SessionFlag) -> Option<CurrentUser> {
    #[cfg(feature = "csr")]
    {
        let token = session.token()?;
        let resp = gloo_net::http::Request::get(&config.endpoint(CURRENT_USER_PATH))
            .header("Authorization", &bearer_header(token))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            leptos::logging::warn!("identity fetch failed: {}", resp.status());
            return None;
        }
        resp.json::<CurrentUser>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, session);
        None
    }
}
