use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	pub engine: Engine,
	pub search: Search,
	pub indexing: Indexing,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	pub postgres: Postgres,
}

#[derive(Debug, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
}

/// The Meilisearch deployment serving both article indices. Synonyms and typo
/// tolerance are provisioning-time index settings, not request-path state.
#[derive(Debug, Clone, Deserialize)]
pub struct Engine {
	pub host: String,
	/// Optional master/search key; dev deployments may run keyless.
	pub api_key: Option<String>,
	#[serde(default = "default_index_civil")]
	pub index_civil: String,
	#[serde(default = "default_index_criminal")]
	pub index_criminal: String,
	#[serde(default = "default_engine_timeout_ms")]
	pub timeout_ms: u64,
	#[serde(default = "default_health_timeout_ms")]
	pub health_timeout_ms: u64,
	/// Transport-level retries for the read-only query API.
	#[serde(default = "default_max_retries")]
	pub max_retries: u32,
}

#[derive(Debug, Deserialize)]
pub struct Search {
	#[serde(default = "default_limit")]
	pub default_limit: u32,
	/// Per-index candidate multiplier applied to `limit + offset` so rescoring
	/// never starves the requested page.
	#[serde(default = "default_overfetch_factor")]
	pub overfetch_factor: u32,
}

#[derive(Debug, Deserialize)]
pub struct Indexing {
	#[serde(default = "default_batch_size")]
	pub batch_size: u32,
}

fn default_index_civil() -> String {
	"civil-articles".to_string()
}

fn default_index_criminal() -> String {
	"criminal-articles".to_string()
}

fn default_engine_timeout_ms() -> u64 {
	8_000
}

fn default_health_timeout_ms() -> u64 {
	5_000
}

fn default_max_retries() -> u32 {
	2
}

fn default_limit() -> u32 {
	10
}

fn default_overfetch_factor() -> u32 {
	2
}

fn default_batch_size() -> u32 {
	500
}
