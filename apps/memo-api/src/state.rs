use std::sync::Arc;

use axum::http::HeaderName;
use color_eyre::eyre;

use memo_service::{MemoService, StatusCodes};
use memo_storage::{
	CounterStore, MemoryCounterStore, MemoryNoteStore, NoteStore, PgCounterStore, PgNoteStore,
	db::Db,
};

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<MemoService>,
	/// Header the upstream authenticator fills with the verified identity id.
	pub identity_header: HeaderName,
}
impl AppState {
	pub async fn new(config: &memo_config::Config) -> color_eyre::Result<Self> {
		let (notes, counters) = open_stores(config).await?;
		let status_codes: StatusCodes =
			config.service.status_codes.parse().map_err(|err: String| eyre::eyre!(err))?;
		let identity_header: HeaderName = config.security.identity_header.parse()?;
		let service = MemoService::new(notes, counters).with_status_codes(status_codes);

		Ok(Self::with_service(service, identity_header))
	}

	pub fn with_service(service: MemoService, identity_header: HeaderName) -> Self {
		Self { service: Arc::new(service), identity_header }
	}
}

async fn open_stores(
	config: &memo_config::Config,
) -> color_eyre::Result<(Arc<dyn NoteStore>, Arc<dyn CounterStore>)> {
	let storage = &config.storage;

	match storage.backend.as_str() {
		"postgres" => {
			let postgres = storage.postgres.as_ref().ok_or_else(|| {
				eyre::eyre!("storage.postgres is required when storage.backend is postgres.")
			})?;
			let db = Db::connect(postgres).await?;

			db.ensure_schema(&storage.notes_table, &storage.counter_table).await?;

			Ok((
				Arc::new(PgNoteStore::new(&db, &storage.notes_table)),
				Arc::new(PgCounterStore::new(&db, &storage.counter_table)),
			))
		},
		"memory" => {
			tracing::warn!("Using the in-memory backend; notes are lost on restart.");

			Ok((Arc::new(MemoryNoteStore::new()), Arc::new(MemoryCounterStore::new())))
		},
		other => Err(eyre::eyre!("Unsupported storage.backend {other:?}.")),
	}
}
