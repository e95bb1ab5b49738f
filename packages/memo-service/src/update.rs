use crate::{ApiRequest, ApiResponse, Identity, MemoService, NoteInput, Result, notes};

impl MemoService {
	/// `PUT /notes/{id}`: answers with an empty body on success.
	pub async fn handle_update(&self, req: &ApiRequest) -> ApiResponse {
		self.respond("update", async {
			let tenant_id = Identity::resolve(req).require()?;
			let note_id = crate::path_note_id(req)?;
			let input = notes::decode_input(req.body.as_deref())?;

			self.update_note(&tenant_id, note_id, input).await?;

			Ok(String::new())
		})
		.await
	}

	/// Replaces the content unconditionally and the attachment only when a non-empty one is
	/// supplied. The read and the write are separate store calls, so a concurrent update of
	/// the same note can be lost.
	pub async fn update_note(
		&self,
		tenant_id: &str,
		note_id: &str,
		input: NoteInput,
	) -> Result<()> {
		let mut note = self.notes.get(tenant_id, note_id).await?;

		note.content = input.content;

		if !input.attachment.is_empty() {
			note.attachment = input.attachment;
		}

		self.notes.update(&note).await?;

		tracing::info!(note_id, "Note updated.");

		Ok(())
	}
}
