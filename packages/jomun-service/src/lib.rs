pub mod articles;
pub mod health;
pub mod indexing;
pub mod search;

use std::{future::Future, pin::Pin, sync::Arc};

pub use articles::{ArticleDetail, LawOut};
pub use health::HealthReport;
pub use indexing::{IndexDocument, prepare_for_indexing};
pub use search::{
	SearchHit, SearchRequest, SearchResponse, Scope,
	gateway::{RawHit, TargetIndex},
	rescore::{ScoreBonus, ScoredHit},
};

use jomun_config::Config;
use jomun_providers::meili::{SearchPayload, SearchResults};
use jomun_storage::db::Db;

pub type ServiceResult<T> = Result<T, ServiceError>;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The seam to the external inverted-index engine. Production wires the
/// Meilisearch transport from `jomun-providers`; tests substitute a stub the
/// same way the pipeline would see a real engine.
pub trait EngineProvider
where
	Self: Send + Sync,
{
	fn search<'a>(
		&'a self,
		cfg: &'a jomun_config::Engine,
		index: &'a str,
		payload: SearchPayload,
	) -> BoxFuture<'a, jomun_providers::Result<SearchResults>>;

	fn health<'a>(
		&'a self,
		cfg: &'a jomun_config::Engine,
	) -> BoxFuture<'a, jomun_providers::Result<()>>;
}

pub struct MeiliEngine;
impl EngineProvider for MeiliEngine {
	fn search<'a>(
		&'a self,
		cfg: &'a jomun_config::Engine,
		index: &'a str,
		payload: SearchPayload,
	) -> BoxFuture<'a, jomun_providers::Result<SearchResults>> {
		Box::pin(async move { jomun_providers::meili::search(cfg, index, &payload).await })
	}

	fn health<'a>(
		&'a self,
		cfg: &'a jomun_config::Engine,
	) -> BoxFuture<'a, jomun_providers::Result<()>> {
		Box::pin(async move { jomun_providers::meili::health(cfg).await })
	}
}

pub struct Providers {
	pub engine: Arc<dyn EngineProvider>,
}
impl Default for Providers {
	fn default() -> Self {
		Self { engine: Arc::new(MeiliEngine) }
	}
}

pub struct JomunService {
	pub cfg: Config,
	pub db: Db,
	pub providers: Providers,
}
impl JomunService {
	pub fn new(cfg: Config, db: Db) -> Self {
		Self { cfg, db, providers: Providers::default() }
	}

	pub fn with_providers(cfg: Config, db: Db, providers: Providers) -> Self {
		Self { cfg, db, providers }
	}
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
	#[error("Invalid query: {message}")]
	InvalidQuery { message: String },
	#[error("Invalid scope: {scope} is not one of all, civil, or criminal.")]
	InvalidScope { scope: String },
	#[error("Not found: {message}")]
	NotFound { message: String },
	#[error("Malformed hit from index {index}: missing {field}.")]
	MalformedHit { index: String, field: &'static str },
	#[error("Index {index} does not exist on the search engine.")]
	IndexNotFound { index: String },
	#[error("Search engine timed out querying index {index}.")]
	EngineTimeout { index: String },
	#[error("Search engine unavailable for index {index}: {message}")]
	EngineUnavailable { index: String, message: String },
	#[error("All requested indices are unavailable.")]
	AllIndicesUnavailable,
	#[error("Storage error: {message}")]
	Storage { message: String },
}
impl From<jomun_storage::Error> for ServiceError {
	fn from(err: jomun_storage::Error) -> Self {
		match err {
			jomun_storage::Error::Sqlx(inner) => Self::Storage { message: inner.to_string() },
			jomun_storage::Error::NotFound(message) => Self::NotFound { message },
		}
	}
}
