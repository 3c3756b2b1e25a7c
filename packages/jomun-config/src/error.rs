pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Could not read the config file at {path:?}.")]
	ReadConfig { path: std::path::PathBuf, source: std::io::Error },
	#[error("The config file at {path:?} is not valid TOML.")]
	ParseConfig { path: std::path::PathBuf, source: toml::de::Error },
	#[error("Invalid config: {message}")]
	Validation { message: String },
}
