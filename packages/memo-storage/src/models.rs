use time::OffsetDateTime;

/// A single item of the notes table, addressed by `(tenant_id, note_id)`.
#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct Note {
	#[sqlx(rename = "user_id")]
	pub tenant_id: String,
	pub note_id: String,
	pub content: String,
	/// Empty when the note has no attachment.
	pub attachment: String,
	pub created_at: OffsetDateTime,
}
