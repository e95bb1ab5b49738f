use std::{
	collections::{BTreeMap, HashMap},
	future,
	sync::{Mutex, MutexGuard},
};

use crate::{BoxFuture, CounterStore, Error, NoteStore, Result, models::Note};

/// Notes kept in process memory, partitioned by tenant the same way the table is.
#[derive(Debug, Default)]
pub struct MemoryNoteStore {
	partitions: Mutex<HashMap<String, BTreeMap<String, Note>>>,
}
impl MemoryNoteStore {
	pub fn new() -> Self {
		Self::default()
	}

	fn partitions(&self) -> MutexGuard<'_, HashMap<String, BTreeMap<String, Note>>> {
		self.partitions.lock().unwrap_or_else(|err| err.into_inner())
	}

	fn put(&self, note: &Note) -> Result<()> {
		self.partitions()
			.entry(note.tenant_id.clone())
			.or_default()
			.insert(note.note_id.clone(), note.clone());

		Ok(())
	}
}
impl NoteStore for MemoryNoteStore {
	fn create<'a>(&'a self, note: &'a Note) -> BoxFuture<'a, Result<()>> {
		Box::pin(future::ready(self.put(note)))
	}

	fn get<'a>(&'a self, tenant_id: &'a str, note_id: &'a str) -> BoxFuture<'a, Result<Note>> {
		let found = self
			.partitions()
			.get(tenant_id)
			.and_then(|partition| partition.get(note_id))
			.cloned()
			.ok_or_else(|| Error::NotFound(format!("Note {note_id:?} does not exist.")));

		Box::pin(future::ready(found))
	}

	fn update<'a>(&'a self, note: &'a Note) -> BoxFuture<'a, Result<()>> {
		Box::pin(future::ready(self.put(note)))
	}

	fn delete<'a>(&'a self, tenant_id: &'a str, note_id: &'a str) -> BoxFuture<'a, Result<()>> {
		let mut partitions = self.partitions();

		if let Some(partition) = partitions.get_mut(tenant_id) {
			partition.remove(note_id);

			if partition.is_empty() {
				partitions.remove(tenant_id);
			}
		}

		Box::pin(future::ready(Ok(())))
	}

	fn list<'a>(&'a self, tenant_id: &'a str) -> BoxFuture<'a, Result<Vec<Note>>> {
		let notes = self
			.partitions()
			.get(tenant_id)
			.map(|partition| partition.values().cloned().collect())
			.unwrap_or_default();

		Box::pin(future::ready(Ok(notes)))
	}
}

#[derive(Debug, Default)]
pub struct MemoryCounterStore {
	counters: Mutex<HashMap<String, u64>>,
}
impl MemoryCounterStore {
	pub fn new() -> Self {
		Self::default()
	}

	fn counters(&self) -> MutexGuard<'_, HashMap<String, u64>> {
		self.counters.lock().unwrap_or_else(|err| err.into_inner())
	}
}
impl CounterStore for MemoryCounterStore {
	fn count<'a>(&'a self, counter: &'a str) -> BoxFuture<'a, Result<u64>> {
		let value = self.counters().get(counter).copied().unwrap_or(0);

		Box::pin(future::ready(Ok(value)))
	}

	fn increment<'a>(&'a self, counter: &'a str) -> BoxFuture<'a, Result<u64>> {
		let mut counters = self.counters();
		let value = counters.entry(counter.to_string()).or_insert(0);

		*value = value.saturating_add(1);

		let next = *value;

		Box::pin(future::ready(Ok(next)))
	}
}
