use leptos::prelude::*;

/// Study-partner discovery.
#[component]
pub fn MatchesPage() -> impl IntoView {
    view! {
        <section class="matches-page">
            <h2>"Matches"</h2>
        </section>
    }
}
