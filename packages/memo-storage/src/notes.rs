use sqlx::PgPool;

use crate::{BoxFuture, Error, Result, db::Db, models::Note};

/// Tenant-partitioned persistence for notes.
///
/// Every method is scoped by a tenant id; there is no way to read or write across
/// partitions. `create` and `update` are both plain puts of the full item, so the
/// difference between them lives in the caller.
pub trait NoteStore
where
	Self: Send + Sync,
{
	fn create<'a>(&'a self, note: &'a Note) -> BoxFuture<'a, Result<()>>;

	/// Fails with [`Error::NotFound`] when no item exists at `(tenant_id, note_id)`.
	fn get<'a>(&'a self, tenant_id: &'a str, note_id: &'a str) -> BoxFuture<'a, Result<Note>>;

	fn update<'a>(&'a self, note: &'a Note) -> BoxFuture<'a, Result<()>>;

	/// Removing a missing item succeeds.
	fn delete<'a>(&'a self, tenant_id: &'a str, note_id: &'a str) -> BoxFuture<'a, Result<()>>;

	fn list<'a>(&'a self, tenant_id: &'a str) -> BoxFuture<'a, Result<Vec<Note>>>;
}

pub struct PgNoteStore {
	pool: PgPool,
	put_sql: String,
	get_sql: String,
	delete_sql: String,
	list_sql: String,
}
impl PgNoteStore {
	/// `table` must already be a validated SQL identifier.
	pub fn new(db: &Db, table: &str) -> Self {
		Self {
			pool: db.pool.clone(),
			put_sql: format!(
				"\
INSERT INTO {table} (user_id, note_id, content, attachment, created_at)
VALUES ($1, $2, $3, $4, $5)
ON CONFLICT (user_id, note_id) DO UPDATE
SET
	content = EXCLUDED.content,
	attachment = EXCLUDED.attachment,
	created_at = EXCLUDED.created_at"
			),
			get_sql: format!(
				"\
SELECT user_id, note_id, content, attachment, created_at
FROM {table}
WHERE user_id = $1 AND note_id = $2"
			),
			delete_sql: format!("DELETE FROM {table} WHERE user_id = $1 AND note_id = $2"),
			list_sql: format!(
				"\
SELECT user_id, note_id, content, attachment, created_at
FROM {table}
WHERE user_id = $1"
			),
		}
	}

	async fn put(&self, note: &Note, operation: &'static str) -> Result<()> {
		sqlx::query(&self.put_sql)
			.bind(note.tenant_id.as_str())
			.bind(note.note_id.as_str())
			.bind(note.content.as_str())
			.bind(note.attachment.as_str())
			.bind(note.created_at)
			.execute(&self.pool)
			.await
			.map_err(Error::query(operation))?;

		Ok(())
	}
}
impl NoteStore for PgNoteStore {
	fn create<'a>(&'a self, note: &'a Note) -> BoxFuture<'a, Result<()>> {
		Box::pin(self.put(note, "create note"))
	}

	fn get<'a>(&'a self, tenant_id: &'a str, note_id: &'a str) -> BoxFuture<'a, Result<Note>> {
		Box::pin(async move {
			sqlx::query_as::<_, Note>(&self.get_sql)
				.bind(tenant_id)
				.bind(note_id)
				.fetch_optional(&self.pool)
				.await
				.map_err(Error::query("get note"))?
				.ok_or_else(|| Error::NotFound(format!("Note {note_id:?} does not exist.")))
		})
	}

	fn update<'a>(&'a self, note: &'a Note) -> BoxFuture<'a, Result<()>> {
		Box::pin(self.put(note, "update note"))
	}

	fn delete<'a>(&'a self, tenant_id: &'a str, note_id: &'a str) -> BoxFuture<'a, Result<()>> {
		Box::pin(async move {
			sqlx::query(&self.delete_sql)
				.bind(tenant_id)
				.bind(note_id)
				.execute(&self.pool)
				.await
				.map_err(Error::query("delete note"))?;

			Ok(())
		})
	}

	fn list<'a>(&'a self, tenant_id: &'a str) -> BoxFuture<'a, Result<Vec<Note>>> {
		Box::pin(async move {
			let notes = sqlx::query_as::<_, Note>(&self.list_sql)
				.bind(tenant_id)
				.fetch_all(&self.pool)
				.await
				.map_err(Error::query("list notes"))?;

			Ok(notes)
		})
	}
}
