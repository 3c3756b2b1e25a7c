pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("{0}")]
	Validation(String),
	#[error(transparent)]
	Storage(#[from] jomun_storage::Error),
	#[error(transparent)]
	Provider(#[from] jomun_providers::Error),
	#[error(transparent)]
	SerdeJson(#[from] serde_json::Error),
}
