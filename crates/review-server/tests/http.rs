//! Tests for the HTTP routes.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use review_server::{create_schema, server};
use reviewdb::Store;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> axum::Router {
    server::router(create_schema(Store::seeded()))
}

fn graphql_post(uri: &str, query: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "query": query }).to_string()))
        .expect("valid request")
}

async fn body_json(body: Body) -> Value {
    let bytes = to_bytes(body, usize::MAX).await.expect("readable body");
    serde_json::from_slice(&bytes).expect("JSON body")
}

#[tokio::test]
async fn test_post_graphql() {
    let req = graphql_post("/graphql", r#"{ game(id: "5") { title } }"#);
    let res = app().oneshot(req).await.expect("response");

    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res.into_body()).await;
    assert_eq!(body["data"]["game"]["title"], "Pokemon Scarlet");
}

#[tokio::test]
async fn test_post_root() {
    let res = app().oneshot(graphql_post("/", "{ authors { name } }")).await.expect("response");

    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res.into_body()).await;
    assert_eq!(
        body["data"]["authors"],
        json!([{ "name": "mario" }, { "name": "yoshi" }, { "name": "peach" }])
    );
}

#[tokio::test]
async fn test_get_playground() {
    for uri in ["/graphql", "/"] {
        let req = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .expect("valid request");

        let res = app().oneshot(req).await.expect("response");

        assert_eq!(res.status(), StatusCode::OK, "GET {uri}");
        let content_type = res.headers()[header::CONTENT_TYPE].to_str().expect("ascii header");
        assert!(content_type.starts_with("text/html"), "GET {uri}: {content_type}");
    }
}

#[tokio::test]
async fn test_mutations_persist_across_requests() {
    let app = app();

    let res = app
        .clone()
        .oneshot(graphql_post("/graphql", r#"mutation { deleteGame(id: "2") { id } }"#))
        .await
        .expect("response");
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.oneshot(graphql_post("/graphql", "{ games { id } }")).await.expect("response");
    let body = body_json(res.into_body()).await;
    assert_eq!(
        body["data"]["games"],
        json!([{ "id": "1" }, { "id": "3" }, { "id": "4" }, { "id": "5" }])
    );
}
