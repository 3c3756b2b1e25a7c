pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Search engine timed out querying index {index}.")]
	Timeout { index: String },
	#[error("Search engine unreachable for index {index}: {message}")]
	Unavailable { index: String, message: String },
	#[error("Index {index} does not exist on the search engine.")]
	IndexNotFound { index: String },
	#[error("Search engine rejected the request for index {index} (HTTP {status}): {message}")]
	Engine { index: String, status: u16, message: String },
	#[error("Invalid search engine response: {message}")]
	InvalidResponse { message: String },
	#[error("Search engine health check failed: {message}")]
	Unhealthy { message: String },
}
impl Error {
	/// Transient transport failures are the only errors worth retrying; the
	/// query API is read-only, so repeating a request is safe.
	pub fn is_transient(&self) -> bool {
		matches!(self, Self::Timeout { .. } | Self::Unavailable { .. })
	}
}
