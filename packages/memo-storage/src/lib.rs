pub mod counter;
pub mod db;
pub mod memory;
pub mod models;
pub mod notes;
pub mod schema;

mod error;

pub use counter::{CLICKS_COUNTER, CounterStore, PgCounterStore};
pub use error::Error;
pub use memory::{MemoryCounterStore, MemoryNoteStore};
pub use models::Note;
pub use notes::{NoteStore, PgNoteStore};

use std::{future::Future, pin::Pin};

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
