use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use jomun_api::{routes, state::AppState};
use jomun_testkit::{StubEngine, StubOutcome, civil_hit};

fn test_app(engine: Arc<StubEngine>) -> Router {
	routes::router(AppState::with_service(jomun_testkit::test_service(engine)))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
	let response =
		app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap()).await.unwrap();
	let status = response.status();
	let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
	let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

	(status, json)
}

#[tokio::test]
async fn search_route_returns_the_rescored_page() {
	let engine = StubEngine::new();

	engine.set(
		"civil-articles",
		StubOutcome::Hits(vec![civil_hit(218, 0, "제218조(수도 등 시설권)", "토지소유자는...", 0.4)]),
	);

	let (status, json) = get_json(test_app(engine), "/search?q=218&scope=civil").await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(json["query"], "218");
	assert_eq!(json["scope"], "civil");
	assert_eq!(json["count"], 1);
	assert_eq!(json["hits"][0]["lawCode"], "CIVIL_CODE");
	assert_eq!(json["hits"][0]["joCode"], "021800");
}

#[tokio::test]
async fn unknown_scope_maps_to_bad_request() {
	let engine = StubEngine::new();
	let (status, json) = get_json(test_app(engine), "/search?q=218&scope=commercial").await;

	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(json["error_code"], "invalid_scope");
}

#[tokio::test]
async fn blank_query_maps_to_bad_request() {
	let engine = StubEngine::new();
	let (status, json) = get_json(test_app(engine), "/search?q=%20%20").await;

	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(json["error_code"], "invalid_query");
}

#[tokio::test]
async fn single_index_timeout_maps_to_gateway_timeout() {
	let engine = StubEngine::new();

	engine.set("criminal-articles", StubOutcome::Timeout);

	// "살인", percent-encoded: the http crate rejects raw non-ASCII URIs.
	let (status, json) =
		get_json(test_app(engine), "/search?q=%EC%82%B4%EC%9D%B8&scope=criminal").await;

	assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
	assert_eq!(json["error_code"], "engine_timeout");
}

#[tokio::test]
async fn degraded_all_scope_search_still_succeeds() {
	let engine = StubEngine::new();

	engine.set(
		"civil-articles",
		StubOutcome::Hits(vec![civil_hit(750, 0, "제750조(불법행위의 내용)", "고의 또는 과실...", 1.0)]),
	);
	engine.set("criminal-articles", StubOutcome::Unavailable);

	// "손해배상", percent-encoded.
	let (status, json) = get_json(
		test_app(engine),
		"/search?q=%EC%86%90%ED%95%B4%EB%B0%B0%EC%83%81&scope=all",
	)
	.await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(json["count"], 1);
}
