//! Indexing-time document preparation. Runs only in the offline indexing
//! workflow, never on the query path.

use serde::Serialize;
use serde_json::Value;

use jomun_domain::ngram;
use jomun_storage::models::Article;

use crate::search::gateway::TargetIndex;

/// The document shape pushed to the engine. Field names match the live index
/// settings: camelCase article fields, plus the historical snake_case
/// `body_ngram`. The civil index has never stored `lawCode`; the gateway
/// re-supplies it at query time.
#[derive(Debug, Clone, Serialize)]
pub struct IndexDocument {
	#[serde(rename = "lawCode", skip_serializing_if = "Option::is_none")]
	pub law_code: Option<String>,
	#[serde(rename = "articleNo")]
	pub article_no: i32,
	#[serde(rename = "articleSubNo")]
	pub article_sub_no: i32,
	#[serde(rename = "joCode")]
	pub jo_code: String,
	pub heading: String,
	pub body: String,
	pub notes: Value,
	pub body_ngram: String,
}

pub fn prepare_for_indexing(article: &Article, target: TargetIndex) -> IndexDocument {
	IndexDocument {
		law_code: match target {
			TargetIndex::Civil => None,
			TargetIndex::Criminal => Some(article.law_code.clone()),
		},
		article_no: article.article_no,
		article_sub_no: article.article_sub_no,
		jo_code: article.jo_code.clone(),
		heading: article.heading.clone().unwrap_or_default(),
		body: article.body.clone(),
		notes: article.notes.clone().unwrap_or_else(|| Value::Array(Vec::new())),
		body_ngram: ngram::body_ngram(&article.body),
	}
}
