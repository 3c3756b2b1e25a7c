use serde_json::Value;
use time::OffsetDateTime;

/// One row of the authoritative `articles` table. Unique on
/// (law_code, article_no, article_sub_no); `jo_code` is the fixed-width
/// encoding of the number pair.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Article {
	pub law_code: String,
	pub article_no: i32,
	pub article_sub_no: i32,
	pub jo_code: String,
	pub heading: Option<String>,
	pub body: String,
	/// JSONB array of amendment notes, e.g. `["[전문개정 2023.03.14]"]`.
	pub notes: Option<Value>,
	/// JSONB clause/item/sub-item structure.
	pub clauses_json: Option<Value>,
	pub updated_at: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Law {
	pub code: String,
	pub name_ko: String,
}
