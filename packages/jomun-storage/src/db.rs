use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::Result;

/// Read-only handle on the authoritative article store. Schema and migrations
/// are owned elsewhere; this crate only queries.
pub struct Db {
	pub pool: PgPool,
}
impl Db {
	pub async fn connect(cfg: &jomun_config::Postgres) -> Result<Self> {
		let pool =
			PgPoolOptions::new().max_connections(cfg.pool_max_conns).connect(&cfg.dsn).await?;

		Ok(Self { pool })
	}

	/// Builds the pool without touching the database. Connections are
	/// established on first use, which lets callers that never hit Postgres
	/// (tests driving only the search path) construct a service anyway.
	pub fn connect_lazy(cfg: &jomun_config::Postgres) -> Result<Self> {
		let pool =
			PgPoolOptions::new().max_connections(cfg.pool_max_conns).connect_lazy(&cfg.dsn)?;

		Ok(Self { pool })
	}
}
