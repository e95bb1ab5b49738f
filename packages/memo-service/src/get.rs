use memo_storage::Note;

use crate::{ApiRequest, ApiResponse, Identity, MemoService, NoteResponse, Result, notes};

impl MemoService {
	/// `GET /notes/{id}`.
	pub async fn handle_get(&self, req: &ApiRequest) -> ApiResponse {
		self.respond("get", async {
			let tenant_id = Identity::resolve(req).require()?;
			let note_id = crate::path_note_id(req)?;
			let note = self.get_note(&tenant_id, note_id).await?;

			notes::encode(&NoteResponse::from(note))
		})
		.await
	}

	pub async fn get_note(&self, tenant_id: &str, note_id: &str) -> Result<Note> {
		Ok(self.notes.get(tenant_id, note_id).await?)
	}
}
