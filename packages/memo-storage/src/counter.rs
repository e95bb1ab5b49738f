use sqlx::PgPool;

use crate::{BoxFuture, Error, Result, db::Db};

/// Row key of the page click counter.
pub const CLICKS_COUNTER: &str = "clicks";

pub trait CounterStore
where
	Self: Send + Sync,
{
	/// A counter that was never incremented reads as zero.
	fn count<'a>(&'a self, counter: &'a str) -> BoxFuture<'a, Result<u64>>;

	/// Returns the value after the increment.
	fn increment<'a>(&'a self, counter: &'a str) -> BoxFuture<'a, Result<u64>>;
}

pub struct PgCounterStore {
	pool: PgPool,
	count_sql: String,
	increment_sql: String,
}
impl PgCounterStore {
	/// `table` must already be a validated SQL identifier.
	pub fn new(db: &Db, table: &str) -> Self {
		Self {
			pool: db.pool.clone(),
			count_sql: format!("SELECT count FROM {table} WHERE counter = $1"),
			increment_sql: format!(
				"\
INSERT INTO {table} (counter, count)
VALUES ($1, 1)
ON CONFLICT (counter) DO UPDATE
SET count = {table}.count + 1
RETURNING count"
			),
		}
	}
}
impl CounterStore for PgCounterStore {
	fn count<'a>(&'a self, counter: &'a str) -> BoxFuture<'a, Result<u64>> {
		Box::pin(async move {
			let value: Option<i64> = sqlx::query_scalar(&self.count_sql)
				.bind(counter)
				.fetch_optional(&self.pool)
				.await
				.map_err(Error::query("read counter"))?;

			to_count(value.unwrap_or(0))
		})
	}

	fn increment<'a>(&'a self, counter: &'a str) -> BoxFuture<'a, Result<u64>> {
		Box::pin(async move {
			let value: i64 = sqlx::query_scalar(&self.increment_sql)
				.bind(counter)
				.fetch_one(&self.pool)
				.await
				.map_err(Error::query("increment counter"))?;

			to_count(value)
		})
	}
}

fn to_count(value: i64) -> Result<u64> {
	u64::try_from(value)
		.map_err(|_| Error::InvalidArgument(format!("Counter holds a negative value {value}.")))
}
