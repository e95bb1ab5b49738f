pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Request carries no verified identity.")]
	Unauthorized,
	#[error("Not found: {message}")]
	NotFound { message: String },
	#[error("Invalid input: {message}")]
	InvalidInput { message: String },
	#[error("Storage error: {source}")]
	Storage { source: memo_storage::Error },
	#[error("Failed to encode response: {source}")]
	Encode {
		#[from]
		source: serde_json::Error,
	},
}
impl From<memo_storage::Error> for Error {
	fn from(err: memo_storage::Error) -> Self {
		match err {
			memo_storage::Error::NotFound(message) => Self::NotFound { message },
			other => Self::Storage { source: other },
		}
	}
}
