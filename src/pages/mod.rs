//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The route table names views by `ViewId`; this module maps a resolved
//! navigation onto page components and wraps them in their layouts,
//! innermost first.

pub mod auth;
pub mod chat;
pub mod communities;
pub mod layout;
pub mod matches;
pub mod not_found;
pub mod profile;

use leptos::prelude::*;

use self::auth::{LoginPage, RegisterPage};
use self::chat::ChatPage;
use self::communities::{CommunitiesPage, CommunityDetailPage};
use self::layout::AppLayout;
use self::matches::MatchesPage;
use self::profile::ProfilePage;
use crate::routes::definitions::{CHAT_ROOM_ID, COMMUNITY_ID};
use crate::routes::{Params, Resolved, ViewId};

/// Render a resolved route, leaf page inside its layouts.
pub fn render_resolved(resolved: &Resolved) -> AnyView {
    let mut rendered = match resolved.view() {
        Some(leaf) => page(leaf, &resolved.params),
        None => ().into_any(),
    };
    for layout in resolved.layouts().rev() {
        rendered = wrap_in_layout(layout, rendered);
    }
    rendered
}

fn page(id: ViewId, params: &Params) -> AnyView {
    match id {
        ViewId::Login => view! { <LoginPage/> }.into_any(),
        ViewId::Register => view! { <RegisterPage/> }.into_any(),
        ViewId::Profile => view! { <ProfilePage/> }.into_any(),
        ViewId::Communities => view! { <CommunitiesPage/> }.into_any(),
        ViewId::CommunityDetail => {
            let community_id = params.get(COMMUNITY_ID).unwrap_or_default().to_owned();
            view! { <CommunityDetailPage community_id=community_id/> }.into_any()
        }
        ViewId::Matches => view! { <MatchesPage/> }.into_any(),
        ViewId::Chat => {
            let chat_room_id = params.get(CHAT_ROOM_ID).map(str::to_owned);
            view! { <ChatPage chat_room_id=chat_room_id/> }.into_any()
        }
        // A bare layout has no page content of its own.
        ViewId::AppLayout => ().into_any(),
    }
}

fn wrap_in_layout(layout: ViewId, inner: AnyView) -> AnyView {
    match layout {
        ViewId::AppLayout => view! { <AppLayout>{inner}</AppLayout> }.into_any(),
        _ => inner,
    }
}
