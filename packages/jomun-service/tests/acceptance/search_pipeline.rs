use jomun_service::{SearchRequest, search::rescore};
use jomun_testkit::{StubEngine, StubOutcome, civil_hit, criminal_hit};

use super::{CIVIL, CRIMINAL, run_search};

#[tokio::test]
async fn numeric_query_puts_the_exact_article_first() {
	let engine = StubEngine::new();

	engine.set(
		CIVIL,
		StubOutcome::Hits(vec![
			civil_hit(218, 2, "제218조의2", "본문", 0.95),
			civil_hit(218, 0, "제218조(수도 등 시설권)", "토지소유자는...", 0.40),
		]),
	);

	let response = run_search(&engine, "218", "civil", false).await.unwrap();
	let top = &response.hits[0];

	assert_eq!(top.article_no, 218);
	assert_eq!(top.article_sub_no, 0);
	assert!(top.app_score >= top.ranking_score + rescore::EXACT_ARTICLE_BONUS);
}

#[tokio::test]
async fn citation_query_puts_the_exact_jo_code_first() {
	let engine = StubEngine::new();

	engine.set(
		CIVIL,
		StubOutcome::Hits(vec![
			civil_hit(219, 0, "제219조(주위토지통행권)", "어느 토지와 공로사이에...", 3.5),
			civil_hit(218, 0, "제218조(수도 등 시설권)", "토지소유자는...", 0.2),
		]),
	);

	let response = run_search(&engine, "제218조", "civil", false).await.unwrap();
	let top = &response.hits[0];

	assert_eq!(top.jo_code, "021800");
	assert!(top.app_score >= top.ranking_score + rescore::EXACT_JO_CODE_BONUS);
}

#[tokio::test]
async fn all_scope_merges_both_indices_into_one_ranking() {
	let engine = StubEngine::new();

	engine.set(CIVIL, StubOutcome::Hits(vec![civil_hit(750, 0, "제750조(불법행위의 내용)", "고의 또는 과실로 인한 위법행위로 타인에게 상해...", 0.7)]));
	engine.set(
		CRIMINAL,
		StubOutcome::Hits(vec![criminal_hit(257, 0, "제257조(상해, 존속상해)", "사람의 신체를 상해한 자는...", 0.9)]),
	);

	let response = run_search(&engine, "상해", "all", false).await.unwrap();

	assert_eq!(response.count, 2);
	assert_eq!(engine.search_calls.load(std::sync::atomic::Ordering::SeqCst), 2);

	let law_codes: Vec<&str> = response.hits.iter().map(|hit| hit.law_code.as_str()).collect();

	assert!(law_codes.contains(&"CIVIL_CODE"));
	assert!(law_codes.contains(&"CRIMINAL_CODE"));
	// Ordered by app score, highest first.
	assert!(response.hits[0].app_score >= response.hits[1].app_score);
}

#[tokio::test]
async fn single_scope_queries_only_its_index() {
	let engine = StubEngine::new();

	engine.set(CIVIL, StubOutcome::Hits(vec![civil_hit(1, 0, "제1조", "민사에 관하여 법률에 규정이 없으면...", 0.5)]));

	run_search(&engine, "목적", "civil", false).await.unwrap();

	let payloads = engine.payloads();

	assert_eq!(payloads.len(), 1);
	assert_eq!(payloads[0].0, CIVIL);
}

#[tokio::test]
async fn engine_calls_overfetch_with_zero_offset() {
	let engine = StubEngine::new();
	let service = jomun_testkit::test_service(engine.clone());

	service
		.search(SearchRequest {
			query: "불법행위".to_string(),
			scope: "civil".to_string(),
			limit: Some(10),
			offset: Some(5),
			strict: false,
		})
		.await
		.unwrap();

	let payloads = engine.payloads();

	// (limit + offset) * overfetch_factor, offset always 0 at the engine.
	assert_eq!(payloads[0].1.limit, 30);
	assert_eq!(payloads[0].1.offset, 0);
	assert!(payloads[0].1.show_ranking_score);
}

#[tokio::test]
async fn pagination_slices_after_rescoring() {
	let engine = StubEngine::new();
	let hits = (1..=6).map(|n| civil_hit(n, 0, "", "소유권 관련 조문", n as f64)).collect();

	engine.set(CIVIL, StubOutcome::Hits(hits));

	let service = jomun_testkit::test_service(engine.clone());
	let response = service
		.search(SearchRequest {
			query: "소유권".to_string(),
			scope: "civil".to_string(),
			limit: Some(2),
			offset: Some(2),
			strict: false,
		})
		.await
		.unwrap();

	assert_eq!(response.count, 6);
	assert_eq!(response.limit, 2);
	assert_eq!(response.offset, 2);
	// Scores 6..1 descending; the page skips the top two.
	assert_eq!(response.hits.len(), 2);
	assert_eq!(response.hits[0].article_no, 4);
	assert_eq!(response.hits[1].article_no, 3);
}

#[tokio::test]
async fn limit_is_clamped_to_the_page_cap() {
	let engine = StubEngine::new();
	let service = jomun_testkit::test_service(engine.clone());
	let response = service
		.search(SearchRequest {
			query: "소유권".to_string(),
			scope: "civil".to_string(),
			limit: Some(500),
			offset: None,
			strict: false,
		})
		.await
		.unwrap();

	assert_eq!(response.limit, 50);
}

#[tokio::test]
async fn invalid_scope_is_rejected_before_any_engine_call() {
	let engine = StubEngine::new();
	let err = run_search(&engine, "목적", "commercial", false).await.unwrap_err();

	assert!(matches!(err, jomun_service::ServiceError::InvalidScope { .. }));
	assert_eq!(engine.search_calls.load(std::sync::atomic::Ordering::SeqCst), 0);
}

#[tokio::test]
async fn blank_query_is_rejected() {
	let engine = StubEngine::new();
	let err = run_search(&engine, "   ", "all", false).await.unwrap_err();

	assert!(matches!(err, jomun_service::ServiceError::InvalidQuery { .. }));
}

#[tokio::test]
async fn response_hits_use_wire_field_names() {
	let engine = StubEngine::new();

	engine.set(CIVIL, StubOutcome::Hits(vec![civil_hit(218, 0, "제218조", "본문", 0.4)]));

	let response = run_search(&engine, "218", "civil", false).await.unwrap();
	let json = serde_json::to_value(&response).unwrap();
	let hit = &json["hits"][0];

	assert_eq!(hit["lawCode"], "CIVIL_CODE");
	assert_eq!(hit["articleNo"], 218);
	assert_eq!(hit["joCode"], "021800");
	assert!(hit.get("rankingScore").is_some());
	assert!(hit.get("appScore").is_some());
	assert_eq!(hit["bonuses"][0]["name"], "exact_article_no");
}
