//! Sign-in and sign-up screens.
//!
//! Credential exchange happens against the backend's `/api/auth/*` endpoints
//! and ends with the token stored under the session key; routing only
//! observes that slot afterwards.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::definitions::{LOGIN_PATH, REGISTER_PATH};

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Biblo"</h1>
                <p class="auth-card__subtitle">"Sign in to find study partners."</p>
                <A href=REGISTER_PATH>"Create an account"</A>
            </div>
        </div>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Join Biblo"</h1>
                <p class="auth-card__subtitle">"Create an account to join communities."</p>
                <A href=LOGIN_PATH>"Already registered? Sign in"</A>
            </div>
        </div>
    }
}
