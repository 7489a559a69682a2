use axum::body::{Body, to_bytes};
use axum::Json;
use axum::http::header::{ACCEPT_LANGUAGE, COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderName, Method, Request};
use axum::response::{IntoResponse, Response};
use tower::ServiceExt;

use super::*;
use crate::config::{ServerConfig, UpstreamTimeouts};

/// Router pointed at a port nothing listens on.
fn test_router() -> Router {
    let config = ServerConfig {
        port: 0,
        api_upstream: "http://127.0.0.1:9".to_owned(),
        timeouts: UpstreamTimeouts { request_secs: 2, connect_secs: 1 },
    };
    api_routes(AppState::new(&config).unwrap())
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

#[tokio::test]
async fn healthz_is_ok() {
    let response = test_router()
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_action_is_not_found() {
    let response = test_router()
        .oneshot(post_json("/api/v1/user/delete", "{}"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json["error"].as_str().unwrap().contains("delete"));
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway() {
    let response = test_router()
        .oneshot(post_json("/api/v1/user/login", r#"{"email":"a@b.com","password":"x"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json["error"].as_str().unwrap().starts_with("upstream request failed"));
}

#[tokio::test]
async fn user_actions_only_accept_post() {
    let response = test_router()
        .oneshot(Request::builder().uri("/api/v1/user/me").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

/// Stand-in user API: rejects login and echoes what it received.
async fn echo_login(headers: HeaderMap, body: String) -> Response {
    let header = |name: HeaderName| headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_owned);
    let echo = serde_json::json!({
        "message": "Worng Password and Email",
        "cookie": header(COOKIE),
        "acceptLanguage": header(ACCEPT_LANGUAGE),
        "body": body,
    });
    (StatusCode::UNAUTHORIZED, [(SET_COOKIE, "token=abc; Path=/")], Json(echo)).into_response()
}

async fn spawn_upstream() -> String {
    let upstream = Router::new().route("/api/v1/user/login", post(echo_login));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, upstream).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn forward_relays_upstream_response() {
    let config = ServerConfig {
        port: 0,
        api_upstream: spawn_upstream().await,
        timeouts: UpstreamTimeouts { request_secs: 5, connect_secs: 2 },
    };
    let router = api_routes(AppState::new(&config).unwrap());

    let sent = r#"{"email":"a@b.com","password":"x"}"#;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/user/login")
        .header("content-type", "application/json")
        .header("cookie", "token=old")
        .header("accept-language", "en")
        .body(Body::from(sent))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.headers().get("set-cookie").unwrap(), "token=abc; Path=/");
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["message"], "Worng Password and Email");
    assert_eq!(json["cookie"], "token=old");
    assert_eq!(json["acceptLanguage"], serde_json::Value::Null);
    assert_eq!(json["body"], sent);
}
