use serde::{Deserialize, Serialize};

use memo_storage::CLICKS_COUNTER;

use crate::{ApiResponse, MemoService, Result, notes};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResponse {
	pub count: u64,
}

// The counter is public: neither handler looks at the caller's identity.
impl MemoService {
	/// `GET /clicks`.
	pub async fn handle_clicks(&self) -> ApiResponse {
		self.respond("clicks", async {
			let count = self.click_count().await?;

			notes::encode(&CountResponse { count })
		})
		.await
	}

	/// `POST /clicks`: records one click and returns the new total.
	pub async fn handle_click(&self) -> ApiResponse {
		self.respond("click", async {
			let count = self.record_click().await?;

			notes::encode(&CountResponse { count })
		})
		.await
	}

	pub async fn click_count(&self) -> Result<u64> {
		Ok(self.counters.count(CLICKS_COUNTER).await?)
	}

	pub async fn record_click(&self) -> Result<u64> {
		Ok(self.counters.increment(CLICKS_COUNTER).await?)
	}
}
