pub mod counter;
pub mod create;
pub mod delete;
pub mod get;
pub mod identity;
pub mod list;
pub mod notes;
pub mod request;
pub mod response;
pub mod time_serde;
pub mod update;

mod error;

pub use counter::CountResponse;
pub use error::{Error, Result};
pub use identity::Identity;
pub use notes::{NoteInput, NoteResponse};
pub use request::{ApiRequest, PATH_PARAM_ID};
pub use response::{ApiResponse, StatusCodes};

use std::{future::Future, sync::Arc};

use time::OffsetDateTime;
use tracing::Instrument;
use uuid::Uuid;

use memo_storage::{CounterStore, NoteStore};

/// Request handlers for notes and the click counter.
///
/// Holds no per-request state; every call gets its stores through the injected handles.
pub struct MemoService {
	pub notes: Arc<dyn NoteStore>,
	pub counters: Arc<dyn CounterStore>,
	pub status_codes: StatusCodes,
}
impl MemoService {
	pub fn new(notes: Arc<dyn NoteStore>, counters: Arc<dyn CounterStore>) -> Self {
		Self { notes, counters, status_codes: StatusCodes::default() }
	}

	pub fn with_status_codes(mut self, status_codes: StatusCodes) -> Self {
		self.status_codes = status_codes;

		self
	}

	/// Runs one handler invocation inside its own request span and converts the outcome into
	/// a wire response.
	pub(crate) async fn respond<F>(&self, operation: &'static str, handler: F) -> ApiResponse
	where
		F: Future<Output = Result<String>>,
	{
		let request_id = Uuid::new_v4();
		let span = tracing::info_span!("memo.request", operation, %request_id);
		let status_codes = self.status_codes;

		async move {
			match handler.await {
				Ok(body) => response::ok(body),
				Err(err) => response::from_error(&err, status_codes),
			}
		}
		.instrument(span)
		.await
	}
}

/// The note id from the path. A missing id is reported the same way as an unknown one.
pub(crate) fn path_note_id(req: &ApiRequest) -> Result<&str> {
	req.path_parameter(PATH_PARAM_ID).filter(|id| !id.is_empty()).ok_or_else(|| {
		Error::NotFound { message: "Request path carries no note id.".to_string() }
	})
}

/// Current time truncated to microseconds, the precision the notes table keeps.
pub(crate) fn now_micros() -> OffsetDateTime {
	let now = OffsetDateTime::now_utc();

	now.replace_nanosecond(now.nanosecond() / 1_000 * 1_000).unwrap_or(now)
}
