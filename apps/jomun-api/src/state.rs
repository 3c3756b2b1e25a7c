use std::sync::Arc;

use jomun_service::JomunService;
use jomun_storage::db::Db;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<JomunService>,
}
impl AppState {
	pub async fn new(config: jomun_config::Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.postgres).await?;
		let service = JomunService::new(config, db);

		Ok(Self { service: Arc::new(service) })
	}

	pub fn with_service(service: JomunService) -> Self {
		Self { service: Arc::new(service) }
	}
}
