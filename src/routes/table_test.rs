use super::*;
use crate::routes::RouteDef;

fn sample_defs() -> Vec<RouteDef> {
    vec![
        RouteDef::view("/open", ViewId::Login).named("Open"),
        RouteDef::view("/members", ViewId::AppLayout).requires_auth().with_children(vec![
            RouteDef::redirect("", RedirectTarget::Name("Home")),
            RouteDef::view("home", ViewId::Profile).named("Home"),
            RouteDef::view("rooms/:roomId", ViewId::Chat).named("Room"),
            RouteDef::view("/absolute", ViewId::Matches).named("Absolute"),
        ]),
        RouteDef::default_destination("/"),
    ]
}

#[test]
fn compile_flattens_children_in_declaration_order() {
    let table = RouteTable::compile(sample_defs()).unwrap();
    let patterns: Vec<String> = table.routes().iter().map(|r| r.pattern().to_string()).collect();
    assert_eq!(patterns, vec!["/open", "/members", "/members/home", "/members/rooms/:roomId", "/absolute", "/"]);
}

#[test]
fn compile_records_every_name_including_layouts() {
    let defs = vec![RouteDef::view("/a", ViewId::AppLayout).named("Shell").with_children(vec![
        RouteDef::view("b", ViewId::Profile).named("B"),
    ])];
    let table = RouteTable::compile(defs).unwrap();
    assert_eq!(table.names(), &["Shell", "B"]);
    assert!(table.route_named("Shell").is_none());
    assert!(table.route_named("B").is_some());
}

#[test]
fn compile_rejects_duplicate_names_across_levels() {
    let defs = vec![
        RouteDef::view("/a", ViewId::Login).named("Same"),
        RouteDef::view("/b", ViewId::AppLayout).with_children(vec![RouteDef::view("c", ViewId::Profile).named("Same")]),
    ];
    assert_eq!(RouteTable::compile(defs), Err(RouteError::DuplicateName { name: "Same".to_owned() }));
}

#[test]
fn compile_rejects_invalid_child_pattern() {
    let defs = vec![RouteDef::view("/chat/:room?", ViewId::AppLayout).with_children(vec![RouteDef::view(
        "tail",
        ViewId::Chat,
    )])];
    assert!(matches!(RouteTable::compile(defs), Err(RouteError::InvalidPattern { .. })));
}

#[test]
fn children_inherit_requires_auth_from_layout() {
    let table = RouteTable::compile(sample_defs()).unwrap();
    let home = table.resolve("/members/home").unwrap();
    assert!(home.route.requires_auth());
    assert!(!home.route.leaf().requires_auth);
    assert_eq!(home.matched().len(), 2);
    assert_eq!(home.layouts().collect::<Vec<_>>(), vec![ViewId::AppLayout]);

    let open = table.resolve("/open").unwrap();
    assert!(!open.route.requires_auth());
    assert_eq!(open.layouts().count(), 0);
}

#[test]
fn resolve_captures_params_and_normalizes_path() {
    let table = RouteTable::compile(sample_defs()).unwrap();
    let room = table.resolve("/members/rooms/17/?tab=files").unwrap();
    assert_eq!(room.path, "/members/rooms/17");
    assert_eq!(room.name(), Some("Room"));
    assert_eq!(room.view(), Some(ViewId::Chat));
    assert_eq!(room.params.get("roomId"), Some("17"));
}

#[test]
fn resolve_empty_child_matches_parent_path() {
    let table = RouteTable::compile(sample_defs()).unwrap();
    let resolved = table.resolve("/members/").unwrap();
    assert_eq!(resolved.target(), RouteTarget::Redirect(RedirectTarget::Name("Home")));
    assert_eq!(resolved.view(), None);
}

#[test]
fn resolve_unknown_path_is_not_found() {
    let table = RouteTable::compile(sample_defs()).unwrap();
    assert_eq!(table.resolve("/nowhere/at/all"), Err(RouteError::NotFound { path: "/nowhere/at/all".to_owned() }));
}

#[test]
fn href_handles_paths_names_and_failures() {
    let table = RouteTable::compile(sample_defs()).unwrap();
    assert_eq!(table.href(&RedirectTarget::Path("/members/")).unwrap(), "/members");
    assert_eq!(table.href(&RedirectTarget::Name("Home")).unwrap(), "/members/home");
    assert_eq!(
        table.href(&RedirectTarget::Name("Ghost")),
        Err(RouteError::UnknownRouteName { name: "Ghost".to_owned() })
    );
    assert_eq!(
        table.href(&RedirectTarget::Name("Room")),
        Err(RouteError::MissingParam { name: "Room".to_owned(), param: "roomId".to_owned() })
    );
}

#[test]
fn join_paths_covers_relative_absolute_and_empty_children() {
    assert_eq!(join_paths("", "/a"), "/a");
    assert_eq!(join_paths("/a", ""), "/a");
    assert_eq!(join_paths("/a/", "b"), "/a/b");
    assert_eq!(join_paths("/a", "/b"), "/b");
}
