use http::Method;
use wayfinder::{routes_from_json, RequestContext, RouteError, Router, Target};

fn sample_router() -> Router {
    let mut router = Router::new();
    router.get("/", "home sweet home", None, Some("home"));
    router.get(
        "/users/[i:id]",
        Target::handler(|_| {}),
        None,
        Some("user.show"),
    );
    router.map("GET|POST", "/users/[i:id]/edit", "Users:edit", None, Some("user.edit"));
    router.get("/files/[**:path]", "Files:serve", None, Some("files"));
    router
}

#[test]
fn test_placeholder_free_pattern_requires_exact_path() {
    let router = sample_router();
    assert!(router.match_path(Method::GET, "/").is_some());
    assert!(router.match_path(Method::GET, "//").is_none());
    assert!(router.match_path(Method::GET, "/home").is_none());
}

#[test]
fn test_integer_placeholder_rejects_non_digits() {
    let router = sample_router();
    assert!(router.match_path(Method::GET, "/users/42").is_some());
    assert!(router.match_path(Method::GET, "/users/4x2").is_none());
    assert!(router.match_path(Method::GET, "/users/abc").is_none());
}

#[test]
fn test_match_through_request_context() {
    let router = sample_router();
    let ctx = RequestContext::new("/users/42?tab=posts", Method::GET);
    let m = router.match_route(&ctx).unwrap();
    assert_eq!(m.name(), Some("user.show"));
    assert_eq!(m.param("id"), Some("42"));
}

#[test]
fn test_context_fallbacks() {
    let query = [("route".to_string(), "/users/9".to_string())]
        .into_iter()
        .collect();
    let ctx = RequestContext::from_parts(None, None, query, Default::default());
    assert_eq!(ctx.path(), "/users/9");
    assert_eq!(ctx.method(), &Method::GET);

    let bare = RequestContext::from_parts(None, None, Default::default(), Default::default());
    assert_eq!(bare.path(), "/");
}

#[test]
fn test_catch_all_spans_separators() {
    let router = sample_router();
    let m = router
        .match_path(Method::GET, "/files/img/logo.png")
        .unwrap();
    assert_eq!(m.param("path"), Some("img/logo.png"));
}

#[test]
fn test_optional_group_matches_both_shapes() {
    let mut router = Router::new();
    router.get("/items[/[i:id]]?", "Items:show", None, Some("items"));

    let bare = router.match_path(Method::GET, "/items").unwrap();
    assert!(bare.param("id").is_none());

    let with_id = router.match_path(Method::GET, "/items/42").unwrap();
    assert_eq!(with_id.param("id"), Some("42"));
}

#[test]
fn test_round_trip_generate_then_match() {
    let router = sample_router();
    let url = router
        .generate("user.edit", &[("id", "1234")])
        .unwrap();
    assert_eq!(url, "/users/1234/edit");
    let m = router.match_path(Method::POST, &url).unwrap();
    assert_eq!(m.param("id"), Some("1234"));
}

#[test]
fn test_round_trip_with_base_path() {
    let mut router = sample_router();
    router.set_base_path("/app");
    let url = router.generate("user.show", &[("id", "8")]).unwrap();
    assert_eq!(url, "/app/users/8");
    // Matching operates on transport paths; the caller strips the base.
    let m = router
        .match_path(Method::GET, url.strip_prefix("/app").unwrap())
        .unwrap();
    assert_eq!(m.param("id"), Some("8"));
}

#[test]
fn test_add_routes_from_json_document() {
    let source = serde_json::json!([
        ["GET", "/reports", "Reports:index", "reports"],
        ["GET|POST", "/reports/[i:id]", "Reports:show"]
    ]);
    let mut router = Router::new();
    router.add_routes(routes_from_json(&source).unwrap());

    assert!(router.match_path(Method::GET, "/reports").is_some());
    let m = router.match_path(Method::POST, "/reports/3").unwrap();
    assert_eq!(m.param("id"), Some("3"));
    assert_eq!(router.generate("reports", &[]).unwrap(), "/reports");
}

#[test]
fn test_routes_from_json_rejects_non_array() {
    let err = routes_from_json(&serde_json::json!({"not": "routes"})).unwrap_err();
    assert!(matches!(err, RouteError::InvalidRouteSource(_)));

    let err = routes_from_json(&serde_json::json!([["GET", "/x"]])).unwrap_err();
    assert!(matches!(err, RouteError::InvalidRouteSource(_)));
}
