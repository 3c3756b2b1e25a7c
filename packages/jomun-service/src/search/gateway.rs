//! Per-index gateway: translates the classified query into an engine request
//! and normalizes the engine's hits into one shape. The two indices differ
//! (the civil index predates the `lawCode` field), and that asymmetry is
//! handled here, in one visible dispatch, not defaulted away downstream.

use serde_json::Value;

use jomun_domain::{
	law::LawCode,
	query::{Classification, NormalizedQuery},
};
use jomun_providers::meili::SearchPayload;

use crate::{JomunService, ServiceError, ServiceResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetIndex {
	Civil,
	Criminal,
}
impl TargetIndex {
	pub fn law_code(self) -> LawCode {
		match self {
			Self::Civil => LawCode::Civil,
			Self::Criminal => LawCode::Criminal,
		}
	}

	pub fn index_name(self, cfg: &jomun_config::Engine) -> &str {
		match self {
			Self::Civil => &cfg.index_civil,
			Self::Criminal => &cfg.index_criminal,
		}
	}
}

/// An engine hit normalized to the common shape. `ranking_score` is the
/// engine's native relevance score, propagated unmodified.
#[derive(Debug, Clone, PartialEq)]
pub struct RawHit {
	pub law_code: String,
	pub index: String,
	pub article_no: u32,
	pub article_sub_no: u32,
	pub jo_code: String,
	pub heading: String,
	pub body: String,
	pub ranking_score: f64,
}

impl JomunService {
	pub(crate) async fn gateway_search(
		&self,
		target: TargetIndex,
		query: &NormalizedQuery,
		limit: u32,
	) -> ServiceResult<Vec<RawHit>> {
		let index = target.index_name(&self.cfg.engine);
		let payload = build_payload(query, limit);
		let results = self
			.providers
			.engine
			.search(&self.cfg.engine, index, payload)
			.await
			.map_err(|err| map_engine_error(index, err))?;

		materialize_hits(target, index, results.hits)
	}
}

/// Always a free-text query; number and citation lookups additionally pin the
/// engine to the detected article via an exact filter. `articleSubNo` is not a
/// filterable attribute, so sub-number exactness is the rescorer's job.
pub fn build_payload(query: &NormalizedQuery, limit: u32) -> SearchPayload {
	let filter = match query.classification {
		Classification::ArticleNumber => {
			query.detected_article_no.map(|article_no| format!("articleNo = {article_no}"))
		},
		Classification::Citation => {
			query.detected_jo_code.as_ref().map(|jo_code| format!("joCode = '{jo_code}'"))
		},
		Classification::Keyword => None,
	};

	// Pagination happens after cross-index rescoring, so the engine always
	// sees offset 0 with the overfetched limit.
	SearchPayload { q: query.raw_text.clone(), limit, offset: 0, filter, show_ranking_score: true }
}

pub(crate) fn materialize_hits(
	target: TargetIndex,
	index: &str,
	hits: Vec<Value>,
) -> ServiceResult<Vec<RawHit>> {
	hits.into_iter().map(|hit| materialize_hit(target, index, hit)).collect()
}

fn materialize_hit(target: TargetIndex, index: &str, hit: Value) -> ServiceResult<RawHit> {
	let law_code = match target {
		// Stored civil documents omit the field; supply it synthetically.
		TargetIndex::Civil => LawCode::Civil.as_str().to_string(),
		TargetIndex::Criminal => required_str(&hit, index, "lawCode")?.to_string(),
	};
	let article_no = required_u64(&hit, index, "articleNo")? as u32;
	let article_sub_no = hit.get("articleSubNo").and_then(Value::as_u64).unwrap_or(0) as u32;
	let jo_code = required_str(&hit, index, "joCode")?.to_string();
	let heading = hit.get("heading").and_then(Value::as_str).unwrap_or_default().to_string();
	let body = required_str(&hit, index, "body")?.to_string();
	let ranking_score = hit
		.get("_rankingScore")
		.and_then(Value::as_f64)
		.ok_or_else(|| malformed(index, "_rankingScore"))?;

	Ok(RawHit {
		law_code,
		index: index.to_string(),
		article_no,
		article_sub_no,
		jo_code,
		heading,
		body,
		ranking_score,
	})
}

fn required_str<'a>(hit: &'a Value, index: &str, field: &'static str) -> ServiceResult<&'a str> {
	hit.get(field).and_then(Value::as_str).ok_or_else(|| malformed(index, field))
}

fn required_u64(hit: &Value, index: &str, field: &'static str) -> ServiceResult<u64> {
	hit.get(field).and_then(Value::as_u64).ok_or_else(|| malformed(index, field))
}

fn malformed(index: &str, field: &'static str) -> ServiceError {
	ServiceError::MalformedHit { index: index.to_string(), field }
}

fn map_engine_error(index: &str, err: jomun_providers::Error) -> ServiceError {
	use jomun_providers::Error;

	match err {
		Error::Timeout { index } => ServiceError::EngineTimeout { index },
		Error::Unavailable { index, message } => ServiceError::EngineUnavailable { index, message },
		Error::IndexNotFound { index } => ServiceError::IndexNotFound { index },
		Error::Engine { index, status, message } => ServiceError::EngineUnavailable {
			index,
			message: format!("HTTP {status}: {message}"),
		},
		Error::InvalidResponse { message } | Error::Unhealthy { message } => {
			ServiceError::EngineUnavailable { index: index.to_string(), message }
		},
	}
}
