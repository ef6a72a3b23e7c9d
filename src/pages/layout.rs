//! Shell for the authenticated section: navigation, identity, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every `/authenticated/*` page. Logout clears the session slot and
//! navigates to the login route; the guard then sees the cleared slot on
//! every later navigation.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::routes::definitions::LOGIN_PATH;
use crate::util::session_storage::SharedSessionStore;

/// Section navigation as `(href, label)`.
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("/authenticated/profile", "Profile"),
    ("/authenticated/communities", "Communities"),
    ("/authenticated/matches", "Matches"),
    ("/authenticated/chat", "Chat"),
];

#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    let store = expect_context::<SharedSessionStore>();
    let navigate = use_navigate();
    let username = RwSignal::new(None::<String>);

    #[cfg(feature = "csr")]
    {
        let config = expect_context::<crate::config::ApiConfig>();
        let session = store.read();
        leptos::task::spawn_local(async move {
            if let Some(user) = crate::net::api::fetch_current_user(&config, &session).await {
                username.set(Some(user.username));
            }
        });
    }

    let on_logout = move |_| {
        store.clear();
        leptos::logging::log!("session cleared");
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="app-layout">
            <nav class="app-nav">
                {NAV_LINKS
                    .iter()
                    .map(|&(href, label)| view! { <A href=href>{label}</A> })
                    .collect_view()}
                <span class="app-nav__user">{move || username.get().unwrap_or_default()}</span>
                <button class="app-nav__logout" on:click=on_logout>
                    "Log out"
                </button>
            </nav>
            <main class="app-main">{children()}</main>
        </div>
    }
}
