use memo_storage::Note;

use crate::{ApiRequest, ApiResponse, Identity, MemoService, NoteResponse, Result, notes};

impl MemoService {
	/// `GET /notes`: every note of the caller, as a JSON array.
	pub async fn handle_list(&self, req: &ApiRequest) -> ApiResponse {
		self.respond("list", async {
			let tenant_id = Identity::resolve(req).require()?;
			let items: Vec<NoteResponse> =
				self.list_notes(&tenant_id).await?.into_iter().map(NoteResponse::from).collect();

			notes::encode(&items)
		})
		.await
	}

	pub async fn list_notes(&self, tenant_id: &str) -> Result<Vec<Note>> {
		Ok(self.notes.list(tenant_id).await?)
	}
}
