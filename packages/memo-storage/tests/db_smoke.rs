use time::{OffsetDateTime, macros::datetime};
use uuid::Uuid;

use memo_config::Postgres;
use memo_storage::{
	CLICKS_COUNTER, CounterStore, Error, Note, NoteStore, PgCounterStore, PgNoteStore, db::Db,
};
use memo_testkit::TestDatabase;

async fn bootstrap(test_db: &TestDatabase) -> (Db, String, String) {
	let cfg = Postgres { dsn: test_db.dsn().to_string(), pool_max_conns: 2 };
	let db = Db::connect(&cfg).await.expect("Failed to connect to Postgres.");
	let notes_table = test_db.table_name("notes");
	let counter_table = test_db.table_name("counter");

	db.ensure_schema(&notes_table, &counter_table).await.expect("Failed to ensure schema.");

	(db, notes_table, counter_table)
}

fn note(tenant_id: &str, content: &str, created_at: OffsetDateTime) -> Note {
	Note {
		tenant_id: tenant_id.to_string(),
		note_id: Uuid::new_v4().to_string(),
		content: content.to_string(),
		attachment: String::new(),
		created_at,
	}
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set MEMO_PG_DSN to run."]
async fn ensure_schema_is_repeatable() {
	let Some(base_dsn) = memo_testkit::env_dsn() else {
		eprintln!("Skipping ensure_schema_is_repeatable; set MEMO_PG_DSN to run this test.");

		return;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let (db, notes_table, counter_table) = bootstrap(&test_db).await;

	db.ensure_schema(&notes_table, &counter_table).await.expect("Second bootstrap failed.");

	let count: i64 = sqlx::query_scalar(
		"SELECT count(*) FROM information_schema.tables WHERE table_name = ANY($1)",
	)
	.bind(vec![notes_table.clone(), counter_table.clone()])
	.fetch_one(&db.pool)
	.await
	.expect("Failed to query schema tables.");

	assert_eq!(count, 2);

	db.pool.close().await;
	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set MEMO_PG_DSN to run."]
async fn note_store_is_tenant_scoped() {
	let Some(base_dsn) = memo_testkit::env_dsn() else {
		eprintln!("Skipping note_store_is_tenant_scoped; set MEMO_PG_DSN to run this test.");

		return;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let (db, notes_table, _) = bootstrap(&test_db).await;
	let store = PgNoteStore::new(&db, &notes_table);
	let created_at = datetime!(2024-03-01 09:30:00.123456 UTC);
	let mine = note("u1", "buy milk", created_at);
	let theirs = note("u2", "call mom", created_at);

	store.create(&mine).await.expect("Failed to create note.");
	store.create(&theirs).await.expect("Failed to create note.");

	assert_eq!(store.get("u1", &mine.note_id).await.expect("Get failed."), mine);

	let err = store.get("u1", &theirs.note_id).await.expect_err("Cross-tenant get must fail.");

	assert!(matches!(err, Error::NotFound(_)));

	store.delete("u1", &theirs.note_id).await.expect("Cross-tenant delete is a no-op.");

	assert_eq!(store.list("u2").await.expect("List failed."), vec![theirs.clone()]);

	let mut edited = mine.clone();

	edited.content = "buy oat milk".to_string();
	edited.attachment = "s3://bucket/list.png".to_string();

	store.update(&edited).await.expect("Failed to update note.");

	assert_eq!(store.list("u1").await.expect("List failed."), vec![edited]);

	store.delete("u1", &mine.note_id).await.expect("Failed to delete note.");
	store.delete("u1", &mine.note_id).await.expect("Repeated delete must succeed.");

	assert!(store.list("u1").await.expect("List failed.").is_empty());

	db.pool.close().await;
	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set MEMO_PG_DSN to run."]
async fn counter_store_increments_atomically() {
	let Some(base_dsn) = memo_testkit::env_dsn() else {
		eprintln!("Skipping counter_store_increments_atomically; set MEMO_PG_DSN to run this test.");

		return;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let (db, _, counter_table) = bootstrap(&test_db).await;
	let store = PgCounterStore::new(&db, &counter_table);

	assert_eq!(store.count(CLICKS_COUNTER).await.expect("Count failed."), 0);
	assert_eq!(store.increment(CLICKS_COUNTER).await.expect("Increment failed."), 1);
	assert_eq!(store.increment(CLICKS_COUNTER).await.expect("Increment failed."), 2);
	assert_eq!(store.count(CLICKS_COUNTER).await.expect("Count failed."), 2);

	db.pool.close().await;
	test_db.cleanup().await.expect("Failed to cleanup test database.");
}
