use crate::{ApiRequest, ApiResponse, Identity, MemoService, Result};

impl MemoService {
	/// `DELETE /notes/{id}`: succeeds whether or not the note existed.
	pub async fn handle_delete(&self, req: &ApiRequest) -> ApiResponse {
		self.respond("delete", async {
			let tenant_id = Identity::resolve(req).require()?;
			let note_id = crate::path_note_id(req)?;

			self.delete_note(&tenant_id, note_id).await?;

			Ok(String::new())
		})
		.await
	}

	pub async fn delete_note(&self, tenant_id: &str, note_id: &str) -> Result<()> {
		self.notes.delete(tenant_id, note_id).await?;

		tracing::info!(note_id, "Note deleted.");

		Ok(())
	}
}
