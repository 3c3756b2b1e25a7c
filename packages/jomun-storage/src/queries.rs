use sqlx::PgPool;

use crate::{
	Error, Result,
	models::{Article, Law},
};

const ARTICLE_COLUMNS: &str = "\
law_code, article_no, article_sub_no, jo_code, heading, body, notes, clauses_json, updated_at";

pub async fn get_article(
	pool: &PgPool,
	law_code: &str,
	article_no: i32,
	article_sub_no: i32,
) -> Result<Article> {
	let article = sqlx::query_as::<_, Article>(&format!(
		"SELECT {ARTICLE_COLUMNS} \
		 FROM articles \
		 WHERE law_code = $1 AND article_no = $2 AND article_sub_no = $3 \
		 LIMIT 1",
	))
	.bind(law_code)
	.bind(article_no)
	.bind(article_sub_no)
	.fetch_optional(pool)
	.await?;

	article.ok_or_else(|| {
		Error::NotFound(format!("Article {law_code} {article_no}-{article_sub_no} does not exist."))
	})
}

pub async fn list_laws(pool: &PgPool) -> Result<Vec<Law>> {
	let laws = sqlx::query_as::<_, Law>("SELECT code, name_ko FROM laws ORDER BY code")
		.fetch_all(pool)
		.await?;

	Ok(laws)
}

/// Every article of one law in canonical order. The indexer's feed.
pub async fn list_articles(pool: &PgPool, law_code: &str) -> Result<Vec<Article>> {
	let articles = sqlx::query_as::<_, Article>(&format!(
		"SELECT {ARTICLE_COLUMNS} \
		 FROM articles \
		 WHERE law_code = $1 \
		 ORDER BY article_no, article_sub_no",
	))
	.bind(law_code)
	.fetch_all(pool)
	.await?;

	Ok(articles)
}

pub async fn ping(pool: &PgPool) -> Result<()> {
	sqlx::query("SELECT 1").execute(pool).await?;

	Ok(())
}
