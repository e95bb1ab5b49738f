use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;

use memo_storage::Note;

use crate::{Error, Result};

/// Body of create and update requests. Absent or `null` fields read as empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteInput {
	#[serde(default, deserialize_with = "null_as_empty")]
	pub content: String,
	#[serde(default, deserialize_with = "null_as_empty")]
	pub attachment: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
	pub user_id: String,
	pub note_id: String,
	pub content: String,
	pub attachment: String,
	#[serde(with = "crate::time_serde")]
	pub created_at: OffsetDateTime,
}
impl From<Note> for NoteResponse {
	fn from(note: Note) -> Self {
		Self {
			user_id: note.tenant_id,
			note_id: note.note_id,
			content: note.content,
			attachment: note.attachment,
			created_at: note.created_at,
		}
	}
}

pub(crate) fn decode_input(body: Option<&str>) -> Result<NoteInput> {
	serde_json::from_str(body.unwrap_or_default())
		.map_err(|err| Error::InvalidInput { message: format!("Malformed note body: {err}") })
}

pub(crate) fn encode<T>(value: &T) -> Result<String>
where
	T: Serialize + ?Sized,
{
	Ok(serde_json::to_string(value)?)
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
