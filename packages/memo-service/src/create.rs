use uuid::Uuid;

use memo_storage::Note;

use crate::{
	ApiRequest, ApiResponse, Identity, MemoService, NoteInput, NoteResponse, Result, notes,
};

impl MemoService {
	/// `POST /notes`: stores a new note under a fresh id and returns it.
	pub async fn handle_create(&self, req: &ApiRequest) -> ApiResponse {
		self.respond("create", async {
			let tenant_id = Identity::resolve(req).require()?;
			let input = notes::decode_input(req.body.as_deref())?;
			let note = self.create_note(&tenant_id, input).await?;

			notes::encode(&NoteResponse::from(note))
		})
		.await
	}

	pub async fn create_note(&self, tenant_id: &str, input: NoteInput) -> Result<Note> {
		let note = Note {
			tenant_id: tenant_id.to_string(),
			note_id: Uuid::new_v4().to_string(),
			content: input.content,
			attachment: input.attachment,
			created_at: crate::now_micros(),
		};

		self.notes.create(&note).await?;

		tracing::info!(note_id = %note.note_id, "Note created.");

		Ok(note)
	}
}
