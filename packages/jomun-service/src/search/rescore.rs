//! Deterministic application-level scoring on top of the engine's relevance
//! score. The bonus magnitudes dwarf any engine score, which is what
//! guarantees exact citation and article-number hits outrank everything else
//! regardless of how the engine ranked them.

use serde::{Deserialize, Serialize};

use jomun_domain::query::{Classification, NormalizedQuery};

use crate::search::gateway::RawHit;

pub const EXACT_JO_CODE_BONUS: f64 = 1_000.0;
pub const EXACT_ARTICLE_BONUS: f64 = 900.0;
pub const HEADING_MATCH_BONUS: f64 = 50.0;

/// One applied bonus component, kept on the hit for transparency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBonus {
	pub name: String,
	pub score: f64,
}

#[derive(Debug, Clone)]
pub struct ScoredHit {
	pub hit: RawHit,
	pub app_score: f64,
	pub bonuses: Vec<ScoreBonus>,
}

/// Score and order the merged candidates. Pure: re-invoking with the same
/// input yields the same output. The sort is a total order: app score
/// descending, then joCode ascending, then law code ascending (two laws can
/// legitimately share a joCode under an all-corpora search).
pub fn rescore(hits: Vec<RawHit>, query: &NormalizedQuery) -> Vec<ScoredHit> {
	let mut scored: Vec<ScoredHit> = hits.into_iter().map(|hit| score_hit(hit, query)).collect();

	scored.sort_by(|a, b| {
		b.app_score
			.total_cmp(&a.app_score)
			.then_with(|| a.hit.jo_code.cmp(&b.hit.jo_code))
			.then_with(|| a.hit.law_code.cmp(&b.hit.law_code))
	});

	scored
}

fn score_hit(hit: RawHit, query: &NormalizedQuery) -> ScoredHit {
	let mut bonuses = Vec::new();

	if let Some(bonus) = exact_bonus(&hit, query) {
		bonuses.push(bonus);
	}
	if heading_matches(&hit, &query.search_terms) {
		bonuses.push(ScoreBonus { name: "heading_match".to_string(), score: HEADING_MATCH_BONUS });
	}

	let app_score = hit.ranking_score + bonuses.iter().map(|bonus| bonus.score).sum::<f64>();

	ScoredHit { hit, app_score, bonuses }
}

/// At most one of the two exact bonuses applies to a hit: the joCode bonus for
/// citation lookups, the article-number bonus otherwise.
fn exact_bonus(hit: &RawHit, query: &NormalizedQuery) -> Option<ScoreBonus> {
	match query.classification {
		Classification::Citation => {
			if query.detected_jo_code.as_deref() == Some(hit.jo_code.as_str()) {
				return Some(ScoreBonus {
					name: "exact_jo_code".to_string(),
					score: EXACT_JO_CODE_BONUS,
				});
			}

			exact_article_bonus(hit, query)
		},
		Classification::ArticleNumber => exact_article_bonus(hit, query),
		Classification::Keyword => None,
	}
}

fn exact_article_bonus(hit: &RawHit, query: &NormalizedQuery) -> Option<ScoreBonus> {
	let matches = query.detected_article_no == Some(hit.article_no)
		&& query.detected_article_sub_no == Some(hit.article_sub_no);

	matches.then(|| ScoreBonus {
		name: "exact_article_no".to_string(),
		score: EXACT_ARTICLE_BONUS,
	})
}

/// Awarded once, however many terms match the heading.
fn heading_matches(hit: &RawHit, terms: &[String]) -> bool {
	if terms.is_empty() {
		return false;
	}

	let heading = hit.heading.to_lowercase();

	terms.iter().any(|term| heading.contains(&term.to_lowercase()))
}
