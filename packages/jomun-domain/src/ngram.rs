//! Character n-gram derivation for the auxiliary `body_ngram` index field.
//!
//! Korean body text has no delimiter-based word boundaries that give short
//! substrings any recall, so the indexer stores a sliding-window expansion of
//! the body next to it. The window runs over the raw code-point stream, so
//! whitespace and punctuation inside the text are valid window content.
//! Repeated grams are kept, in generation order, so they still contribute to
//! the engine's relevance weighting. The field is never shown to users.

pub const MIN_N: usize = 2;
pub const MAX_N: usize = 3;

/// All contiguous `min_n`..=`max_n`-length substrings of the trimmed text,
/// shortest length first, each length swept left to right. For a text of
/// char-length L this yields exactly `max(0, L-1)` 2-grams and `max(0, L-2)`
/// 3-grams.
pub fn ngrams(text: &str, min_n: usize, max_n: usize) -> Vec<String> {
	let chars: Vec<char> = text.trim().chars().collect();
	let mut out = Vec::new();

	for n in min_n..=max_n {
		if n == 0 || chars.len() < n {
			continue;
		}

		for window in chars.windows(n) {
			out.push(window.iter().collect());
		}
	}

	out
}

/// The searchable field value: space-joined 2- and 3-grams. Text too short to
/// produce a single gram is indexed as-is.
pub fn body_ngram(text: &str) -> String {
	let trimmed = text.trim();

	if trimmed.chars().count() < MIN_N {
		return trimmed.to_string();
	}

	ngrams(trimmed, MIN_N, MAX_N).join(" ")
}
