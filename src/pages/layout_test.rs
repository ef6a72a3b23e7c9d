use super::*;
use crate::routes::RouteTable;
use crate::routes::definitions::app_routes;

#[test]
fn nav_links_point_at_authenticated_views() {
    let table = RouteTable::compile(app_routes()).unwrap();
    for (href, label) in NAV_LINKS {
        let resolved = table.resolve(href).unwrap();
        assert!(resolved.view().is_some(), "{label} should render a view");
        assert!(resolved.route.requires_auth(), "{label} should be guarded");
    }
}

#[test]
fn nav_labels_match_route_names() {
    let table = RouteTable::compile(app_routes()).unwrap();
    for (href, label) in NAV_LINKS {
        assert_eq!(table.resolve(href).unwrap().name(), Some(label));
    }
}
