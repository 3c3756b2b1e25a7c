//! Search orchestration: classify the query once, fan out to the targeted
//! indices, enforce strict-mode term matching, rescore, paginate.

pub mod gateway;
pub mod rescore;

use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use jomun_domain::query::{self, Classification, ClassifyError};

use crate::{
	JomunService, ServiceError, ServiceResult,
	search::{
		gateway::{RawHit, TargetIndex},
		rescore::{ScoreBonus, ScoredHit},
	},
};

/// The subset of corpora a request targets. A closed set; anything else is
/// rejected before the pipeline runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
	All,
	Civil,
	Criminal,
}
impl Scope {
	pub fn parse(value: &str) -> Result<Self, ServiceError> {
		match value {
			"all" => Ok(Self::All),
			"civil" => Ok(Self::Civil),
			"criminal" => Ok(Self::Criminal),
			other => Err(ServiceError::InvalidScope { scope: other.to_string() }),
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::All => "all",
			Self::Civil => "civil",
			Self::Criminal => "criminal",
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
	pub query: String,
	#[serde(default = "default_scope")]
	pub scope: String,
	pub limit: Option<u32>,
	pub offset: Option<u32>,
	#[serde(default)]
	pub strict: bool,
}

fn default_scope() -> String {
	"all".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
	pub law_code: String,
	pub index: String,
	pub article_no: u32,
	pub article_sub_no: u32,
	pub jo_code: String,
	pub heading: String,
	pub body: String,
	pub ranking_score: f64,
	pub app_score: f64,
	pub bonuses: Vec<ScoreBonus>,
}
impl From<ScoredHit> for SearchHit {
	fn from(scored: ScoredHit) -> Self {
		let ScoredHit { hit, app_score, bonuses } = scored;

		Self {
			law_code: hit.law_code,
			index: hit.index,
			article_no: hit.article_no,
			article_sub_no: hit.article_sub_no,
			jo_code: hit.jo_code,
			heading: hit.heading,
			body: hit.body,
			ranking_score: hit.ranking_score,
			app_score,
			bonuses,
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
	pub query: String,
	pub scope: String,
	pub limit: u32,
	pub offset: u32,
	pub hits: Vec<SearchHit>,
	/// Surviving rescored candidates, not the page size. Pagination UIs key
	/// off this.
	pub count: usize,
}

impl JomunService {
	pub async fn search(&self, req: SearchRequest) -> ServiceResult<SearchResponse> {
		let scope = Scope::parse(&req.scope)?;
		let normalized = query::classify(&req.query).map_err(|err| match err {
			ClassifyError::Empty => ServiceError::InvalidQuery {
				message: "Query must be non-empty.".to_string(),
			},
		})?;
		let limit = req
			.limit
			.unwrap_or(self.cfg.search.default_limit)
			.clamp(1, jomun_config::MAX_SEARCH_LIMIT);
		let offset = req.offset.unwrap_or(0);
		// Rescoring can reorder across indices, so every index must contribute
		// at least the whole requested window.
		let candidate_limit =
			limit.saturating_add(offset).saturating_mul(self.cfg.search.overfetch_factor);
		let trace_id = Uuid::new_v4();

		tracing::debug!(
			%trace_id,
			query = %normalized.raw_text,
			classification = normalized.classification.as_str(),
			scope = scope.as_str(),
			limit,
			offset,
			strict = req.strict,
			"Search request accepted."
		);

		let mut hits = match scope {
			Scope::All => {
				let civil = self.gateway_search(TargetIndex::Civil, &normalized, candidate_limit);
				let criminal =
					self.gateway_search(TargetIndex::Criminal, &normalized, candidate_limit);
				// Concurrent fan-out: total latency is bounded by the slower
				// index, and dropping this future cancels both calls.
				let (civil, criminal) = tokio::join!(civil, criminal);

				merge_fanout(trace_id, civil, criminal)?
			},
			Scope::Civil => {
				self.gateway_search(TargetIndex::Civil, &normalized, candidate_limit).await?
			},
			Scope::Criminal => {
				self.gateway_search(TargetIndex::Criminal, &normalized, candidate_limit).await?
			},
		};

		if req.strict && normalized.classification == Classification::Keyword {
			hits.retain(|hit| contains_every_term(hit, &normalized.search_terms));
		}

		let scored = rescore::rescore(hits, &normalized);
		let count = scored.len();
		let page = scored
			.into_iter()
			.skip(offset as usize)
			.take(limit as usize)
			.map(SearchHit::from)
			.collect();

		Ok(SearchResponse {
			query: normalized.raw_text,
			scope: scope.as_str().to_string(),
			limit,
			offset,
			hits: page,
			count,
		})
	}
}

/// Partial-failure policy for the two-index fan-out: one failed index degrades
/// the result, both failed indices fail the request.
fn merge_fanout(
	trace_id: Uuid,
	civil: ServiceResult<Vec<RawHit>>,
	criminal: ServiceResult<Vec<RawHit>>,
) -> ServiceResult<Vec<RawHit>> {
	match (civil, criminal) {
		(Ok(mut civil), Ok(criminal)) => {
			civil.extend(criminal);

			Ok(civil)
		},
		(Ok(hits), Err(err)) | (Err(err), Ok(hits)) => {
			warn!(%trace_id, error = %err, "One index failed; serving the surviving index only.");

			Ok(hits)
		},
		(Err(civil_err), Err(criminal_err)) => {
			warn!(
				%trace_id,
				civil_error = %civil_err,
				criminal_error = %criminal_err,
				"Both indices failed."
			);

			Err(ServiceError::AllIndicesUnavailable)
		},
	}
}

/// Strict mode enforces AND semantics the engine's own matching does not:
/// every term must appear as a case-insensitive substring of heading + body.
fn contains_every_term(hit: &RawHit, terms: &[String]) -> bool {
	let haystack = format!("{} {}", hit.heading, hit.body).to_lowercase();

	terms.iter().all(|term| haystack.contains(&term.to_lowercase()))
}
