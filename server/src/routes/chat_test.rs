use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderValue, Request};
use axum::routing::post;
use http_body_util::BodyExt;
use tower::ServiceExt;

use super::*;
use crate::llm::OpenAiClient;
use crate::llm::config::{LlmConfig, LlmTimeouts};
use crate::routes::api_routes;

const SSE_BODY: &str = "data: {\"choices\":[{\"delta\":{\"content\":\"Try the \"}}]}\n\n\
data: {\"choices\":[{\"delta\":{\"content\":\"Pegasus.\"}}]}\n\n\
data: [DONE]\n\n";

async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn llm_for(base_url: String) -> Arc<OpenAiClient> {
    let cfg = LlmConfig {
        api_key: "sk-test".to_owned(),
        model: "gpt-4o-mini".to_owned(),
        openai_base_url: base_url,
        timeouts: LlmTimeouts { request_secs: 5, connect_secs: 2 },
    };
    Arc::new(OpenAiClient::new(cfg).unwrap())
}

fn chat_request(auth: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header(CONTENT_TYPE, "application/json");
    if let Some(auth) = auth {
        builder = builder.header(AUTHORIZATION, auth);
    }
    builder.body(Body::from(body.to_owned())).unwrap()
}

const ONE_MESSAGE: &str = r#"{"messages":[{"role":"user","content":"Best running shoe?"}]}"#;

async fn body_text(resp: Response) -> String {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// =============================================================================
// check_bearer
// =============================================================================

fn headers_with(auth: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(auth).unwrap());
    headers
}

#[test]
fn bearer_missing_header_rejected() {
    assert_eq!(check_bearer(&HeaderMap::new(), None), Err(BearerRejection::Missing));
}

#[test]
fn bearer_wrong_scheme_rejected() {
    assert_eq!(check_bearer(&headers_with("Basic abc"), None), Err(BearerRejection::Malformed));
}

#[test]
fn bearer_any_token_accepted_without_configured_key() {
    assert_eq!(check_bearer(&headers_with("Bearer anything"), None), Ok(()));
    assert_eq!(check_bearer(&headers_with("Bearer "), None), Ok(()));
}

#[test]
fn bearer_must_match_configured_key() {
    assert_eq!(check_bearer(&headers_with("Bearer pk_live"), Some("pk_live")), Ok(()));
    assert_eq!(
        check_bearer(&headers_with("Bearer pk_other"), Some("pk_live")),
        Err(BearerRejection::Mismatch)
    );
}

// =============================================================================
// handler
// =============================================================================

#[tokio::test]
async fn chat_without_authorization_is_401() {
    let resp = api_routes(AppState::default())
        .oneshot(chat_request(None, ONE_MESSAGE))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn chat_with_wrong_key_is_401() {
    let state = AppState { publishable_key: Some(Arc::from("pk_live")), ..AppState::default() };
    let resp = api_routes(state)
        .oneshot(chat_request(Some("Bearer pk_wrong"), ONE_MESSAGE))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn chat_with_invalid_body_is_400() {
    let resp = api_routes(AppState::default())
        .oneshot(chat_request(Some("Bearer pk"), "{not json"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn chat_with_empty_messages_is_400() {
    let resp = api_routes(AppState::default())
        .oneshot(chat_request(Some("Bearer pk"), r#"{"messages":[]}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(resp).await.contains("messages must not be empty"));
}

#[tokio::test]
async fn chat_without_llm_is_503() {
    let resp = api_routes(AppState::default())
        .oneshot(chat_request(Some("Bearer pk"), ONE_MESSAGE))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert!(body_text(resp).await.contains("\"error\""));
}

#[tokio::test]
async fn chat_upstream_failure_is_502() {
    let router = Router::new().route(
        "/chat/completions",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base = spawn_upstream(router).await;
    let state = AppState { llm: Some(llm_for(base)), ..AppState::default() };

    let resp = api_routes(state)
        .oneshot(chat_request(Some("Bearer pk"), ONE_MESSAGE))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn chat_pipes_upstream_event_stream() {
    let router = Router::new().route("/chat/completions", post(|| async { SSE_BODY }));
    let base = spawn_upstream(router).await;
    let state = AppState {
        llm: Some(llm_for(base)),
        publishable_key: Some(Arc::from("pk_live")),
        system_prompt: Arc::from("sys"),
        ..AppState::default()
    };

    let resp = api_routes(state)
        .oneshot(chat_request(Some("Bearer pk_live"), ONE_MESSAGE))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get(CONTENT_TYPE).unwrap(), "text/event-stream");
    assert_eq!(body_text(resp).await, SSE_BODY);
}

#[tokio::test]
async fn healthz_is_ok() {
    let req = Request::builder().uri("/healthz").body(Body::empty()).unwrap();
    let resp = api_routes(AppState::default()).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
