//! Offline reindexing workflow: read the authoritative articles per law,
//! derive the ngram field, and push documents to the engine in batches.
//! Document upserts are keyed on the index's primary key, so re-running a
//! whole law is safe.

use serde_json::Value;

use jomun_domain::law::LawCode;
use jomun_providers::meili;
use jomun_service::{TargetIndex, prepare_for_indexing};
use jomun_storage::db::Db;

use crate::error::{Error, Result};

pub fn resolve_targets(law: Option<&str>) -> Result<Vec<TargetIndex>> {
	match law {
		None => Ok(vec![TargetIndex::Civil, TargetIndex::Criminal]),
		Some(code) => match LawCode::parse(code) {
			Some(LawCode::Civil) => Ok(vec![TargetIndex::Civil]),
			Some(LawCode::Criminal) => Ok(vec![TargetIndex::Criminal]),
			None => Err(Error::Validation(format!("Unknown law code {code}."))),
		},
	}
}

pub async fn run_reindex(
	cfg: &jomun_config::Config,
	db: &Db,
	targets: &[TargetIndex],
) -> Result<()> {
	for &target in targets {
		reindex_law(cfg, db, target).await?;
	}

	Ok(())
}

async fn reindex_law(cfg: &jomun_config::Config, db: &Db, target: TargetIndex) -> Result<()> {
	let law = target.law_code();
	let index = target.index_name(&cfg.engine).to_string();
	let articles = jomun_storage::queries::list_articles(&db.pool, law.as_str()).await?;

	tracing::info!(%law, %index, total = articles.len(), "Reindexing law.");

	let mut pushed = 0_usize;

	for batch in articles.chunks(cfg.indexing.batch_size as usize) {
		let documents = batch
			.iter()
			.map(|article| serde_json::to_value(prepare_for_indexing(article, target)))
			.collect::<Result<Vec<Value>, _>>()?;

		meili::add_documents(&cfg.engine, &index, &documents).await?;

		pushed += batch.len();

		tracing::info!(%law, %index, pushed, total = articles.len(), "Batch accepted.");
	}

	Ok(())
}
