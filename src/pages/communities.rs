//! Community list and detail pages.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn CommunitiesPage() -> impl IntoView {
    view! {
        <section class="communities-page">
            <h2>"Communities"</h2>
            <p>"Browse study groups by course or topic."</p>
        </section>
    }
}

#[component]
pub fn CommunityDetailPage(community_id: String) -> impl IntoView {
    view! {
        <section class="community-detail-page">
            <A href="/authenticated/communities">"All communities"</A>
            <h2>"Community " {community_id}</h2>
        </section>
    }
}
