use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;
use tracing::Subscriber;
use tracing::span::{Attributes, Id};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};

use super::*;

/// Counts `request` spans opened by `TraceLayer`.
#[derive(Clone, Default)]
struct RequestSpans(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for RequestSpans {
    fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, _ctx: Context<'_, S>) {
        if attrs.metadata().name() == "request" {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

// =============================================================================
// api_routes
// =============================================================================

#[tokio::test]
async fn api_routes_trace_each_request() {
    let spans = RequestSpans::default();
    let _guard = tracing::subscriber::set_default(tracing_subscriber::registry().with(spans.clone()));

    let app = api_routes(AppState::default());
    for _ in 0..2 {
        let req = Request::builder().uri("/healthz").body(Body::empty()).unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
    assert_eq!(spans.0.load(Ordering::SeqCst), 2);
}

#[test]
fn error_response_wraps_message() {
    let resp = error_response(StatusCode::BAD_GATEWAY, "Chat upstream failed");
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}
