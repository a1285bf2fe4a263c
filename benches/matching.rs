use criterion::{black_box, criterion_group, criterion_main, Criterion};
use http::Method;
use wayfinder::{Router, Target};

fn build_router() -> Router {
    let mut router = Router::new();
    router.get("/", "home", None, Some("home"));
    router.get("/health", "ok", None, None);
    router.get("/users", "Users:index", None, Some("users"));
    router.get("/users/[i:id]", "Users:show", None, Some("user.show"));
    router.get("/users/[i:id]/posts", "Posts:index", None, None);
    router.get("/users/[i:id]/posts/[i:post_id]", "Posts:show", None, None);
    router.get("/pages/[a:slug]", "Pages:show", None, Some("page"));
    router.get("/files/[**:path]", "Files:serve", None, None);
    router.get("/feed.[:format]?", "Feed:render", None, Some("feed"));
    router.get(
        "/archive/[i:year]/[i:month]?",
        Target::handler(|_| {}),
        None,
        Some("archive"),
    );
    router
}

fn bench_match(c: &mut Criterion) {
    let router = build_router();

    c.bench_function("match_literal", |b| {
        b.iter(|| black_box(router.match_path(Method::GET, black_box("/health"))))
    });

    c.bench_function("match_two_params", |b| {
        b.iter(|| black_box(router.match_path(Method::GET, black_box("/users/42/posts/7"))))
    });

    c.bench_function("match_miss", |b| {
        b.iter(|| black_box(router.match_path(Method::GET, black_box("/no/such/route"))))
    });
}

fn bench_generate(c: &mut Criterion) {
    let router = build_router();

    c.bench_function("generate_one_param", |b| {
        b.iter(|| black_box(router.generate("user.show", black_box(&[("id", "42")]))))
    });
}

criterion_group!(benches, bench_match, bench_generate);
criterion_main!(benches);
