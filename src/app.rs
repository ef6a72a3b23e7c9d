//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::NavigateOptions;
use leptos_router::components::Router;
use leptos_router::hooks::{use_location, use_navigate};

use crate::config::ApiConfig;
use crate::pages::not_found::NotFoundPage;
use crate::pages::render_resolved;
use crate::routes::definitions::app_routes;
use crate::routes::{self, NavigationOutcome, RouteTable};
use crate::util::session_storage::{LocalStorageSession, SharedSessionStore};

/// Root application component.
///
/// Provides the API config and session store contexts, compiles the route
/// table once, and hands every location change to `RouteOutlet`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(ApiConfig::from_build_env());
    let store: SharedSessionStore = Arc::new(LocalStorageSession);
    provide_context(store);

    let table = match RouteTable::compile(app_routes()) {
        Ok(table) => Arc::new(table),
        Err(e) => {
            leptos::logging::error!("route table rejected: {e}");
            return view! { <p class="app-error">"Navigation is unavailable."</p> }.into_any();
        }
    };

    view! {
        <Stylesheet id="leptos" href="/pkg/biblo-web.css"/>
        <Title text="Biblo"/>

        <Router>
            <RouteOutlet table=table/>
        </Router>
    }
    .into_any()
}

/// Guarded outlet: resolves the current location, applies redirects, and
/// renders the resulting page.
#[component]
fn RouteOutlet(table: Arc<RouteTable>) -> impl IntoView {
    let store = expect_context::<SharedSessionStore>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    // Only the pathname is tracked. The session slot is read at decision
    // time, so login/logout takes effect on the next navigation.
    let outcome = Memo::new(move |_| {
        let path = pathname.get();
        routes::navigate(&table, &path, &store.read())
    });

    Effect::new(move || {
        if let Ok(NavigationOutcome::Redirect { to, .. }) = outcome.get() {
            navigate(&to, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match outcome.get() {
        Ok(NavigationOutcome::Render(resolved)) => render_resolved(&resolved),
        Ok(NavigationOutcome::Redirect { .. }) => ().into_any(),
        Ok(NavigationOutcome::NotFound { .. }) => view! { <NotFoundPage/> }.into_any(),
        Err(e) => {
            leptos::logging::error!("navigation failed: {e}");
            view! { <p class="app-error">{e.to_string()}</p> }.into_any()
        }
    }
}
