mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Engine, Indexing, Postgres, Search, Service, Storage};

use std::{fs, path::Path};

/// Hard cap on a single search page; requested limits are clamped to it.
pub const MAX_SEARCH_LIMIT: u32 = 50;

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.dsn.trim().is_empty() {
		return Err(Error::Validation {
			message: "storage.postgres.dsn must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.pool_max_conns == 0 {
		return Err(Error::Validation {
			message: "storage.postgres.pool_max_conns must be greater than zero.".to_string(),
		});
	}
	if cfg.engine.host.trim().is_empty() {
		return Err(Error::Validation { message: "engine.host must be non-empty.".to_string() });
	}

	for (label, index) in
		[("engine.index_civil", &cfg.engine.index_civil), ("engine.index_criminal", &cfg.engine.index_criminal)]
	{
		if index.trim().is_empty() {
			return Err(Error::Validation { message: format!("{label} must be non-empty.") });
		}
	}

	if cfg.engine.index_civil == cfg.engine.index_criminal {
		return Err(Error::Validation {
			message: "engine.index_civil and engine.index_criminal must name distinct indices."
				.to_string(),
		});
	}
	if cfg.engine.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "engine.timeout_ms must be greater than zero.".to_string(),
		});
	}
	if cfg.engine.health_timeout_ms == 0 {
		return Err(Error::Validation {
			message: "engine.health_timeout_ms must be greater than zero.".to_string(),
		});
	}
	if cfg.engine.max_retries > 5 {
		return Err(Error::Validation {
			message: "engine.max_retries must be 5 or fewer.".to_string(),
		});
	}
	if cfg.search.default_limit == 0 || cfg.search.default_limit > MAX_SEARCH_LIMIT {
		return Err(Error::Validation {
			message: format!("search.default_limit must be in the range 1-{MAX_SEARCH_LIMIT}."),
		});
	}
	if cfg.search.overfetch_factor == 0 {
		return Err(Error::Validation {
			message: "search.overfetch_factor must be greater than zero.".to_string(),
		});
	}
	if cfg.indexing.batch_size == 0 {
		return Err(Error::Validation {
			message: "indexing.batch_size must be greater than zero.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	if cfg.engine.api_key.as_deref().map(|key| key.trim().is_empty()).unwrap_or(false) {
		cfg.engine.api_key = None;
	}

	cfg.engine.host = cfg.engine.host.trim_end_matches('/').to_string();
}
