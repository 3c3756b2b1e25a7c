use serde::{Deserialize, Serialize};

use jomun_storage::queries;

use crate::JomunService;

/// Per-dependency health. A failing dependency reports its error message
/// instead of failing the route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
	pub ok: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub db: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub engine: Option<String>,
}

impl JomunService {
	pub async fn health(&self) -> HealthReport {
		let db = queries::ping(&self.db.pool).await.err().map(|err| err.to_string());
		let engine =
			self.providers.engine.health(&self.cfg.engine).await.err().map(|err| err.to_string());

		HealthReport { ok: db.is_none() && engine.is_none(), db, engine }
	}
}
