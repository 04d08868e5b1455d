use super::*;
use crate::router::{ROUTES, match_route};

fn bound_pattern(name: RouteName) -> String {
    match (head(name), param(name)) {
        ("", _) => "/".to_owned(),
        (head, "") => format!("/{head}"),
        (head, param) => format!("/{head}/:{param}"),
    }
}

#[test]
fn every_table_route_is_bound_once() {
    for entry in &ROUTES {
        let bound = BOUND_ROUTES.iter().filter(|name| **name == entry.name).count();
        assert_eq!(bound, 1, "{} bound {bound} times", entry.path);
    }
    assert_eq!(BOUND_ROUTES.len(), ROUTES.len());
}

#[test]
fn bound_segments_rebuild_table_paths() {
    for name in BOUND_ROUTES {
        let pattern = bound_pattern(name);
        assert_eq!(match_route(&pattern).map(|entry| entry.name), Some(name));
        assert_eq!(pattern, crate::router::route(name).path);
    }
}

#[test]
fn param_routes_bind_id() {
    assert_eq!(head(RouteName::PostDetail), "post");
    assert_eq!(param(RouteName::PostDetail), "id");
    assert_eq!(param(RouteName::Admin), "");
}
