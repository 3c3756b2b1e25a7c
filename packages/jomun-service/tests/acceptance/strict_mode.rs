use jomun_testkit::{StubEngine, StubOutcome, civil_hit};

use super::{CIVIL, run_search};

fn mixed_term_hits() -> StubOutcome {
	StubOutcome::Hits(vec![
		// Engine matching is OR-like: one hit carries both terms, one only one.
		civil_hit(750, 0, "제750조(불법행위의 내용)", "고의 또는 과실로 인한 위법행위... 악의", 2.0),
		civil_hit(390, 0, "제390조(채무불이행과 손해배상)", "채무자가 과실 없이 이행하지 아니한 때", 1.5),
	])
}

#[tokio::test]
async fn strict_mode_enforces_and_semantics() {
	let engine = StubEngine::new();

	engine.set(CIVIL, mixed_term_hits());

	let response = run_search(&engine, "악의 과실", "civil", true).await.unwrap();

	assert_eq!(response.count, 1);

	for hit in &response.hits {
		let haystack = format!("{} {}", hit.heading, hit.body);

		assert!(haystack.contains("악의"));
		assert!(haystack.contains("과실"));
	}
}

#[tokio::test]
async fn loose_mode_keeps_partial_matches() {
	let engine = StubEngine::new();

	engine.set(CIVIL, mixed_term_hits());

	let response = run_search(&engine, "악의 과실", "civil", false).await.unwrap();

	assert_eq!(response.count, 2);
}

#[tokio::test]
async fn strict_results_are_a_subset_of_loose_results() {
	let engine = StubEngine::new();

	engine.set(CIVIL, mixed_term_hits());

	let strict = run_search(&engine, "악의 과실", "civil", true).await.unwrap();
	let loose = run_search(&engine, "악의 과실", "civil", false).await.unwrap();

	assert!(strict.count <= loose.count);

	let loose_codes: Vec<&str> = loose.hits.iter().map(|hit| hit.jo_code.as_str()).collect();

	for hit in &strict.hits {
		assert!(loose_codes.contains(&hit.jo_code.as_str()));
	}
}

#[tokio::test]
async fn strict_flag_is_inert_for_non_keyword_queries() {
	let engine = StubEngine::new();

	// An exact-match hit whose body shares nothing with the query text.
	engine.set(CIVIL, StubOutcome::Hits(vec![civil_hit(218, 0, "제218조", "본문", 0.3)]));

	let response = run_search(&engine, "218", "civil", true).await.unwrap();

	assert_eq!(response.count, 1);
}
