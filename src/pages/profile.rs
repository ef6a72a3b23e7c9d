//! Profile page; the section's default landing view.

use leptos::prelude::*;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <section class="profile-page">
            <h2>"Profile"</h2>
        </section>
    }
}
