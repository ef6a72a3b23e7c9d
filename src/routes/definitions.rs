//! The application's route tree.

#[cfg(test)]
#[path = "definitions_test.rs"]
mod definitions_test;

use super::{RedirectTarget, RouteDef, ViewId};

pub const LOGIN: &str = "Login";
pub const REGISTER: &str = "Register";
pub const PROFILE: &str = "Profile";
pub const COMMUNITIES: &str = "Communities";
pub const COMMUNITY_DETAIL: &str = "CommunityDetail";
pub const MATCHES: &str = "Matches";
pub const CHAT: &str = "Chat";

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";

/// Landing path for signed-in users.
pub const AUTHENTICATED_ROOT: &str = "/authenticated";

pub const COMMUNITY_ID: &str = "communityId";
pub const CHAT_ROOM_ID: &str = "chatRoomId";

/// Declarations for every addressable screen, in match order.
pub fn app_routes() -> Vec<RouteDef> {
    vec![
        RouteDef::view(LOGIN_PATH, ViewId::Login).named(LOGIN),
        RouteDef::view(REGISTER_PATH, ViewId::Register).named(REGISTER),
        RouteDef::view(AUTHENTICATED_ROOT, ViewId::AppLayout)
            .requires_auth()
            .with_children(vec![
                RouteDef::redirect("", RedirectTarget::Name(PROFILE)),
                RouteDef::view("profile", ViewId::Profile).named(PROFILE),
                RouteDef::view("communities", ViewId::Communities).named(COMMUNITIES),
                RouteDef::view("communities/:communityId", ViewId::CommunityDetail).named(COMMUNITY_DETAIL),
                RouteDef::view("matches", ViewId::Matches).named(MATCHES),
                RouteDef::view("chat/:chatRoomId?", ViewId::Chat).named(CHAT),
            ]),
        RouteDef::default_destination("/"),
    ]
}
