use time::macros::datetime;

use memo_storage::{
	CLICKS_COUNTER, CounterStore, Error, MemoryCounterStore, MemoryNoteStore, Note, NoteStore,
};

fn note(tenant_id: &str, note_id: &str, content: &str) -> Note {
	Note {
		tenant_id: tenant_id.to_string(),
		note_id: note_id.to_string(),
		content: content.to_string(),
		attachment: String::new(),
		created_at: datetime!(2024-03-01 09:30:00 UTC),
	}
}

#[tokio::test]
async fn get_returns_what_create_stored() {
	let store = MemoryNoteStore::new();
	let stored = note("u1", "n1", "buy milk");

	store.create(&stored).await.expect("Failed to create note.");

	let fetched = store.get("u1", "n1").await.expect("Failed to get note.");

	assert_eq!(fetched, stored);
}

#[tokio::test]
async fn partitions_do_not_leak_across_tenants() {
	let store = MemoryNoteStore::new();

	store.create(&note("a", "shared-id", "a's note")).await.expect("Failed to create note.");
	store.create(&note("b", "shared-id", "b's note")).await.expect("Failed to create note.");

	let err = store.get("a", "missing").await.expect_err("Missing note must fail.");

	assert!(matches!(err, Error::NotFound(_)));
	assert_eq!(store.get("a", "shared-id").await.expect("Get failed.").content, "a's note");

	store.delete("a", "shared-id").await.expect("Failed to delete note.");

	assert!(store.get("a", "shared-id").await.is_err());
	assert_eq!(store.get("b", "shared-id").await.expect("Get failed.").content, "b's note");
	assert_eq!(store.list("b").await.expect("List failed.").len(), 1);
	assert!(store.list("a").await.expect("List failed.").is_empty());
}

#[tokio::test]
async fn update_overwrites_the_whole_item() {
	let store = MemoryNoteStore::new();
	let mut stored = note("u1", "n1", "draft");

	stored.attachment = "s3://bucket/a.png".to_string();

	store.create(&stored).await.expect("Failed to create note.");

	let replacement = note("u1", "n1", "final");

	store.update(&replacement).await.expect("Failed to update note.");

	assert_eq!(store.get("u1", "n1").await.expect("Get failed."), replacement);
	assert_eq!(store.list("u1").await.expect("List failed.").len(), 1);
}

#[tokio::test]
async fn deleting_a_missing_item_succeeds() {
	let store = MemoryNoteStore::new();

	store.delete("nobody", "nothing").await.expect("Delete of a missing item must succeed.");
	store.create(&note("u1", "n1", "x")).await.expect("Failed to create note.");
	store.delete("u1", "n1").await.expect("Failed to delete note.");
	store.delete("u1", "n1").await.expect("Second delete must succeed.");
}

#[tokio::test]
async fn counter_starts_at_zero_and_counts_up() {
	let store = MemoryCounterStore::new();

	assert_eq!(store.count(CLICKS_COUNTER).await.expect("Count failed."), 0);
	assert_eq!(store.increment(CLICKS_COUNTER).await.expect("Increment failed."), 1);
	assert_eq!(store.increment(CLICKS_COUNTER).await.expect("Increment failed."), 2);
	assert_eq!(store.count(CLICKS_COUNTER).await.expect("Count failed."), 2);
	assert_eq!(store.count("other").await.expect("Count failed."), 0);
}
