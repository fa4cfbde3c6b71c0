use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::routing::get;
use http_body_util::BodyExt;
use tower::ServiceExt;

use super::*;
use crate::routes::api_routes;
use crate::services::voice::{SIGNED_URL_PATH, VoiceClient, VoiceConfig};

async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn state_for(base_url: String) -> AppState {
    let cfg = VoiceConfig { api_key: "xi-test".to_owned(), agent_id: "agent-7".to_owned(), base_url };
    AppState { voice: Some(Arc::new(VoiceClient::new(cfg).unwrap())), ..AppState::default() }
}

fn token_request(method: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri("/api/voice/token")
        .body(Body::empty())
        .unwrap()
}

async fn decode(resp: Response) -> VoiceTokenResponse {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn token_without_voice_is_503() {
    let resp = api_routes(AppState::default()).oneshot(token_request("POST")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(decode(resp).await, VoiceTokenResponse::failed(NOT_CONFIGURED));
}

#[tokio::test]
async fn token_returns_signed_url() {
    let router = Router::new().route(
        SIGNED_URL_PATH,
        get(|| async { axum::Json(serde_json::json!({ "signed_url": "wss://voice.test/abc" })) }),
    );
    let base = spawn_upstream(router).await;

    for method in ["POST", "GET"] {
        let resp = api_routes(state_for(base.clone())).oneshot(token_request(method)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(decode(resp).await, VoiceTokenResponse::signed("wss://voice.test/abc"));
    }
}

#[tokio::test]
async fn token_upstream_failure_is_500() {
    let router = Router::new().route(
        SIGNED_URL_PATH,
        get(|| async { (StatusCode::UNAUTHORIZED, "bad key") }),
    );
    let base = spawn_upstream(router).await;

    let resp = api_routes(state_for(base)).oneshot(token_request("POST")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(decode(resp).await, VoiceTokenResponse::failed(TOKEN_FAILED));
}
