#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Sqlx(#[from] sqlx::Error),
	#[error("Failed to {operation}: {source}")]
	Query { operation: &'static str, source: sqlx::Error },
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),
	#[error("Not found: {0}")]
	NotFound(String),
}
impl Error {
	pub(crate) fn query(operation: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
		move |source| Self::Query { operation, source }
	}
}
