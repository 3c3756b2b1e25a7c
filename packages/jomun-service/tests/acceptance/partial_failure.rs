use jomun_service::ServiceError;
use jomun_testkit::{StubEngine, StubOutcome, civil_hit};

use super::{CIVIL, CRIMINAL, run_search};

#[tokio::test]
async fn all_scope_degrades_when_one_index_is_down() {
	let engine = StubEngine::new();

	engine.set(CIVIL, StubOutcome::Hits(vec![civil_hit(750, 0, "제750조", "고의 또는 과실로 인한 손해배상...", 1.0)]));
	engine.set(CRIMINAL, StubOutcome::Unavailable);

	let response = run_search(&engine, "손해배상", "all", false).await.unwrap();

	assert_eq!(response.count, 1);
	assert_eq!(response.hits[0].law_code, "CIVIL_CODE");
}

#[tokio::test]
async fn all_scope_fails_only_when_both_indices_are_down() {
	let engine = StubEngine::new();

	engine.set(CIVIL, StubOutcome::Timeout);
	engine.set(CRIMINAL, StubOutcome::Unavailable);

	let err = run_search(&engine, "손해배상", "all", false).await.unwrap_err();

	assert!(matches!(err, ServiceError::AllIndicesUnavailable));
}

#[tokio::test]
async fn single_scope_failure_propagates_loudly() {
	let engine = StubEngine::new();

	engine.set(CRIMINAL, StubOutcome::Timeout);

	let err = run_search(&engine, "살인", "criminal", false).await.unwrap_err();

	assert!(matches!(err, ServiceError::EngineTimeout { index } if index == CRIMINAL));
}

#[tokio::test]
async fn missing_index_surfaces_as_its_own_condition() {
	let engine = StubEngine::new();

	engine.set(CIVIL, StubOutcome::IndexNotFound);

	let err = run_search(&engine, "소유권", "civil", false).await.unwrap_err();

	assert!(matches!(err, ServiceError::IndexNotFound { index } if index == CIVIL));
}

#[tokio::test]
async fn malformed_hit_fails_a_single_scope_request() {
	let engine = StubEngine::new();

	engine.set(
		CIVIL,
		StubOutcome::Hits(vec![serde_json::json!({
			"articleNo": 218,
			"joCode": "021800",
			"heading": "제218조",
			// body missing
			"_rankingScore": 0.5
		})]),
	);

	let err = run_search(&engine, "소유권", "civil", false).await.unwrap_err();

	assert!(matches!(err, ServiceError::MalformedHit { field: "body", .. }));
}
