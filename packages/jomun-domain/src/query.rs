use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::jo_code;

/// A bare article-number lookup: `"250"`, `"250의1"`, `"250-1"`.
static ARTICLE_NO: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^(\d{1,4})(?:[-의](\d{1,2}))?$").expect("static pattern"));
/// A formatted citation, internal spaces tolerated: `"제218조"`, `"제103조의2"`.
static CITATION: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^제\s*(\d{1,4})\s*조(?:\s*의\s*(\d{1,2}))?$").expect("static pattern")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
	ArticleNumber,
	Citation,
	Keyword,
}
impl Classification {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::ArticleNumber => "article_number",
			Self::Citation => "citation",
			Self::Keyword => "keyword",
		}
	}
}

/// The classifier's output, produced once per request and immutable thereafter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormalizedQuery {
	pub raw_text: String,
	pub search_terms: Vec<String>,
	pub detected_article_no: Option<u32>,
	pub detected_article_sub_no: Option<u32>,
	pub detected_jo_code: Option<String>,
	pub classification: Classification,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassifyError {
	Empty,
}

/// Classify a raw query string. Pure: the same input always yields the same
/// NormalizedQuery.
///
/// Priority order: bare article number, then formatted citation, then keyword
/// search. Number detection runs on the NFKC-folded text so full-width digits
/// (`２１８`) classify the same as ASCII ones; keyword terms are taken from the
/// trimmed input as typed.
pub fn classify(raw_text: &str) -> Result<NormalizedQuery, ClassifyError> {
	let trimmed = raw_text.trim();

	if trimmed.is_empty() {
		return Err(ClassifyError::Empty);
	}

	let folded: String = trimmed.nfkc().collect();

	if let Some(caps) = ARTICLE_NO.captures(&folded) {
		let (article_no, article_sub_no) = captured_numbers(&caps);

		return Ok(NormalizedQuery {
			raw_text: trimmed.to_string(),
			search_terms: Vec::new(),
			detected_article_no: Some(article_no),
			detected_article_sub_no: Some(article_sub_no),
			detected_jo_code: None,
			classification: Classification::ArticleNumber,
		});
	}
	if let Some(caps) = CITATION.captures(&folded) {
		let (article_no, article_sub_no) = captured_numbers(&caps);

		return Ok(NormalizedQuery {
			raw_text: trimmed.to_string(),
			search_terms: Vec::new(),
			detected_article_no: Some(article_no),
			detected_article_sub_no: Some(article_sub_no),
			detected_jo_code: Some(jo_code::encode(article_no, article_sub_no)),
			classification: Classification::Citation,
		});
	}

	Ok(NormalizedQuery {
		raw_text: trimmed.to_string(),
		search_terms: trimmed.split_whitespace().map(str::to_string).collect(),
		detected_article_no: None,
		detected_article_sub_no: None,
		detected_jo_code: None,
		classification: Classification::Keyword,
	})
}

fn captured_numbers(caps: &regex::Captures<'_>) -> (u32, u32) {
	// Both groups are 1-4 digit runs, so parsing cannot fail or overflow.
	let article_no = caps.get(1).and_then(|m| m.as_str().parse().ok()).unwrap_or(0);
	let article_sub_no = caps.get(2).and_then(|m| m.as_str().parse().ok()).unwrap_or(0);

	(article_no, article_sub_no)
}
