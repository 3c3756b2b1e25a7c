//! Thin reads over the authoritative store: article detail and the law list.
//! Search hits carry engine-side copies of the text; these endpoints serve
//! the canonical row.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::format_description::well_known::Rfc3339;

use jomun_domain::law::LawCode;
use jomun_storage::{models::Article, queries};

use crate::{JomunService, ServiceError, ServiceResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDetail {
	pub law_code: String,
	pub article_no: i32,
	pub article_sub_no: i32,
	pub jo_code: String,
	pub heading: String,
	pub body: String,
	pub notes: Value,
	pub clauses: Value,
	pub updated_at: Option<String>,
}
impl From<Article> for ArticleDetail {
	fn from(article: Article) -> Self {
		Self {
			law_code: article.law_code,
			article_no: article.article_no,
			article_sub_no: article.article_sub_no,
			jo_code: article.jo_code,
			heading: article.heading.unwrap_or_default(),
			body: article.body,
			notes: article.notes.unwrap_or_else(|| Value::Array(Vec::new())),
			clauses: article.clauses_json.unwrap_or_else(|| Value::Array(Vec::new())),
			updated_at: article.updated_at.and_then(|ts| ts.format(&Rfc3339).ok()),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LawOut {
	pub code: String,
	pub name_ko: String,
}

impl JomunService {
	pub async fn article_detail(
		&self,
		law_code: &str,
		article_no: i32,
		article_sub_no: i32,
	) -> ServiceResult<ArticleDetail> {
		let law = LawCode::parse(law_code).ok_or_else(|| ServiceError::NotFound {
			message: format!("Unknown law code {law_code}."),
		})?;
		let article =
			queries::get_article(&self.db.pool, law.as_str(), article_no, article_sub_no).await?;

		Ok(ArticleDetail::from(article))
	}

	pub async fn list_laws(&self) -> ServiceResult<Vec<LawOut>> {
		let laws = queries::list_laws(&self.db.pool).await?;

		Ok(laws.into_iter().map(|law| LawOut { code: law.code, name_ko: law.name_ko }).collect())
	}
}
