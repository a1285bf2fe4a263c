use http::Method;

use super::{MethodPolicy, Router};
use crate::route::Target;

fn literal(body: &str) -> Target {
    Target::Literal(body.to_string())
}

#[test]
fn test_literal_route_exact_equality() {
    let mut router = Router::new();
    router.get("/about", literal("about"), None, None);
    assert!(router.match_path(Method::GET, "/about").is_some());
    assert!(router.match_path(Method::GET, "/about/").is_none());
    assert!(router.match_path(Method::GET, "/abou").is_none());
}

#[test]
fn test_wildcard_route_matches_everything() {
    let mut router = Router::new();
    router.map("GET", "*", literal("catch-all"), None, None);
    let m = router.match_path(Method::GET, "/anything/at/all").unwrap();
    assert!(m.params.is_empty());
}

#[test]
fn test_raw_regex_route_is_anchored() {
    let mut router = Router::new();
    router.get("@/v[0-9]+/status", literal("status"), None, None);
    assert!(router.match_path(Method::GET, "/v2/status").is_some());
    assert!(router.match_path(Method::GET, "/api/v2/status").is_none());
}

#[test]
fn test_raw_regex_named_captures() {
    let mut router = Router::new();
    router.get("@/tags/(?P<tag>[a-z]+)", literal("tag"), None, None);
    let m = router.match_path(Method::GET, "/tags/rust").unwrap();
    assert_eq!(m.param("tag"), Some("rust"));
}

#[test]
fn test_query_string_stripped_before_matching() {
    let mut router = Router::new();
    router.get("/search", literal("search"), None, None);
    assert!(router
        .match_path(Method::GET, "/search?q=routers&page=2")
        .is_some());
}

#[test]
fn test_method_substring_containment() {
    let mut router = Router::new();
    router.map("GET|POST", "/form", literal("form"), None, None);
    assert!(router.match_path(Method::GET, "/form").is_some());
    assert!(router.match_path(Method::POST, "/form").is_some());
    assert!(router.match_path(Method::PUT, "/form").is_none());
    // Substring containment is case-insensitive.
    let lowercase = Method::from_bytes(b"post").unwrap();
    assert!(router.match_path(lowercase, "/form").is_some());
}

#[test]
fn test_method_substring_looseness_is_preserved() {
    let mut router = Router::new();
    router.map("GETX", "/odd", literal("odd"), None, None);
    assert!(router.match_path(Method::GET, "/odd").is_some());
}

#[test]
fn test_method_exact_policy() {
    let mut router = Router::new();
    router.set_method_policy(MethodPolicy::Exact);
    router.map("GETX", "/odd", literal("odd"), None, None);
    router.map("GET|POST", "/form", literal("form"), None, None);
    assert!(router.match_path(Method::GET, "/odd").is_none());
    assert!(router.match_path(Method::GET, "/form").is_some());
    let lowercase = Method::from_bytes(b"post").unwrap();
    assert!(router.match_path(lowercase, "/form").is_some());
}

#[test]
fn test_params_extracted_in_capture_order() {
    let mut router = Router::new();
    router.get("/a/[i:first]/b/[a:second]", literal("x"), None, None);
    let m = router.match_path(Method::GET, "/a/1/b/two").unwrap();
    assert_eq!(
        m.params.as_slice(),
        &[
            ("first".to_string(), "1".to_string()),
            ("second".to_string(), "two".to_string())
        ]
    );
}

#[test]
fn test_unnamed_captures_discarded() {
    let mut router = Router::new();
    router.get("/x/[i]/[a:kept]", literal("x"), None, None);
    let m = router.match_path(Method::GET, "/x/9/word").unwrap();
    assert_eq!(m.params.len(), 1);
    assert_eq!(m.param("kept"), Some("word"));
}

#[test]
fn test_registration_order_wins_over_specificity() {
    let mut router = Router::new();
    router.get("/user/[a:name]", literal("param"), None, Some("user.page"));
    router.get("/user/admin", literal("literal"), None, Some("user.admin"));
    let m = router.match_path(Method::GET, "/user/admin").unwrap();
    assert_eq!(m.name(), Some("user.page"));
    assert_eq!(m.param("name"), Some("admin"));
}

#[test]
fn test_first_bracket_prefix_rejection() {
    let mut router = Router::new();
    router.get("/users/[i:id]", literal("user"), None, None);
    assert!(router.match_path(Method::GET, "/teams/42").is_none());
}

#[test]
fn test_uncompilable_route_skipped() {
    let mut router = Router::new();
    router.get("/broken/[(:oops]", literal("broken"), None, None);
    router.get("/ok", literal("ok"), None, None);
    assert!(router.match_path(Method::GET, "/broken/x").is_none());
    assert!(router.match_path(Method::GET, "/ok").is_some());
}

#[test]
fn test_duplicate_name_recorded_and_first_mapping_kept() {
    let mut router = Router::new();
    router.get("/first", literal("first"), None, Some("page"));
    router.get("/second", literal("second"), None, Some("page"));
    assert_eq!(router.errors().len(), 1);
    assert_eq!(
        router.errors()[0],
        crate::error::RouteError::DuplicateRouteName {
            name: "page".to_string()
        }
    );
    assert_eq!(router.generate("page", &[]).unwrap(), "/first");
    // The duplicate route itself is still appended and reachable.
    assert!(router.match_path(Method::GET, "/second").is_some());
}

#[test]
fn test_display_errors_renders_lines() {
    let mut router = Router::new();
    router.get("/a", literal("a"), None, Some("dup"));
    router.get("/b", literal("b"), None, Some("dup"));
    let rendered = router.display_errors();
    assert!(rendered.contains("can not redeclare route 'dup'"));
    assert!(rendered.ends_with('\n'));
}

#[test]
fn test_group_applies_prefix_and_shared_hook() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::route::RouteDef;

    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let hook: crate::route::Hook = Arc::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let mut router = Router::new();
    router.group(
        "/admin",
        vec![
            RouteDef::new("GET", "/users", "Users:index").named("admin.users"),
            RouteDef::new("GET", "/posts/[i:id]", "Posts:show"),
        ],
        Some(hook),
    );

    let m = router.match_path(Method::GET, "/admin/posts/3").unwrap();
    assert_eq!(m.param("id"), Some("3"));
    m.middleware().unwrap()();
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert!(router.match_path(Method::GET, "/admin/users").is_some());
    assert!(router.match_path(Method::GET, "/users").is_none());
}

#[test]
fn test_custom_match_types_merge_over_defaults() {
    let mut router = Router::new();
    router.add_match_types([("uuid".to_string(), "[0-9a-f-]{36}".to_string())]);
    router.get("/things/[uuid:id]", literal("thing"), None, None);
    assert!(router
        .match_path(Method::GET, "/things/0bd799a6-3c0c-4b8f-9c3a-7a0d1a9e1234")
        .is_some());
    assert!(router.match_path(Method::GET, "/things/short").is_none());
}
