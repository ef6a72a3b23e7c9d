use super::*;
use crate::routes::definitions::{AUTHENTICATED_ROOT, CHAT_ROOM_ID, app_routes};
use crate::routes::{RedirectTarget, RouteDef, ViewId};

fn table() -> RouteTable {
    RouteTable::compile(app_routes()).unwrap()
}

fn signed_in() -> SessionFlag {
    SessionFlag::present("abc123")
}

#[test]
fn public_page_renders_directly() {
    let outcome = navigate(&table(), "/auth/register", &SessionFlag::absent()).unwrap();
    let NavigationOutcome::Render(resolved) = outcome else {
        panic!("expected render, got {outcome:?}");
    };
    assert_eq!(resolved.view(), Some(ViewId::Register));
}

#[test]
fn anonymous_profile_visit_redirects_to_login() {
    assert_eq!(
        navigate(&table(), "/authenticated/profile", &SessionFlag::absent()).unwrap(),
        NavigationOutcome::Redirect { to: "/auth/login".to_owned(), reason: RedirectReason::Unauthenticated }
    );
}

#[test]
fn signed_in_chat_without_room_renders() {
    let outcome = navigate(&table(), "/authenticated/chat", &signed_in()).unwrap();
    let NavigationOutcome::Render(resolved) = outcome else {
        panic!("expected render, got {outcome:?}");
    };
    assert_eq!(resolved.view(), Some(ViewId::Chat));
    assert_eq!(resolved.params.get(CHAT_ROOM_ID), None);
    assert_eq!(resolved.layouts().collect::<Vec<_>>(), vec![ViewId::AppLayout]);
}

#[test]
fn root_sends_signed_in_visitor_through_section_index_to_profile() {
    assert_eq!(
        navigate(&table(), "/", &signed_in()).unwrap(),
        NavigationOutcome::Redirect {
            to: "/authenticated/profile".to_owned(),
            reason: RedirectReason::DefaultDestination,
        }
    );
}

#[test]
fn root_sends_anonymous_visitor_to_login() {
    assert_eq!(
        navigate(&table(), "/", &SessionFlag::absent()).unwrap(),
        NavigationOutcome::Redirect { to: "/auth/login".to_owned(), reason: RedirectReason::DefaultDestination }
    );
}

#[test]
fn section_index_redirects_to_profile_when_signed_in() {
    assert_eq!(
        navigate(&table(), AUTHENTICATED_ROOT, &signed_in()).unwrap(),
        NavigationOutcome::Redirect { to: "/authenticated/profile".to_owned(), reason: RedirectReason::RouteRedirect }
    );
}

#[test]
fn section_index_is_guarded_before_its_redirect() {
    assert_eq!(
        navigate(&table(), "/authenticated/", &SessionFlag::absent()).unwrap(),
        NavigationOutcome::Redirect { to: "/auth/login".to_owned(), reason: RedirectReason::Unauthenticated }
    );
}

#[test]
fn unknown_path_is_not_found() {
    assert_eq!(
        navigate(&table(), "/authenticated/settings", &signed_in()).unwrap(),
        NavigationOutcome::NotFound { path: "/authenticated/settings".to_owned() }
    );
}

#[test]
fn flag_change_applies_on_next_navigation() {
    let table = table();
    let mut session = SessionFlag::absent();
    assert!(matches!(
        navigate(&table, "/authenticated/matches", &session).unwrap(),
        NavigationOutcome::Redirect { .. }
    ));

    session = signed_in();
    assert!(matches!(
        navigate(&table, "/authenticated/matches", &session).unwrap(),
        NavigationOutcome::Render(_)
    ));
}

#[test]
fn redirect_cycle_is_reported() {
    let defs = vec![
        RouteDef::redirect("/a", RedirectTarget::Path("/b")),
        RouteDef::redirect("/b", RedirectTarget::Path("/a")),
    ];
    let table = RouteTable::compile(defs).unwrap();
    assert_eq!(
        navigate(&table, "/a", &SessionFlag::absent()),
        Err(RouteError::RedirectLoop { path: "/a".to_owned() })
    );
}

#[test]
fn redirect_to_unknown_name_is_an_error() {
    let defs = vec![RouteDef::redirect("/a", RedirectTarget::Name("Missing"))];
    let table = RouteTable::compile(defs).unwrap();
    assert_eq!(
        navigate(&table, "/a", &SessionFlag::absent()),
        Err(RouteError::UnknownRouteName { name: "Missing".to_owned() })
    );
}

#[test]
fn redirect_to_missing_path_is_not_found() {
    let defs = vec![RouteDef::redirect("/a", RedirectTarget::Path("/gone"))];
    let table = RouteTable::compile(defs).unwrap();
    assert_eq!(
        navigate(&table, "/a", &SessionFlag::absent()).unwrap(),
        NavigationOutcome::NotFound { path: "/gone".to_owned() }
    );
}
