//! # Storage Layer
//!
//! The [`WordStore`] trait is the persistence adapter for the word
//! collection: one durable slot holding the entire serialized collection.
//! There is no per-word persistence: every save overwrites the whole
//! blob, which keeps the adapter trivial and the on-disk state always
//! consistent with memory.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage. The slot is the
//!   `wordaid-words.json` file in the wordaid data directory.
//! - [`memory::InMemoryStore`]: test storage. Holds the serialized JSON
//!   text in memory so load/save still exercise the serde path, and
//!   corrupt payloads can be injected for recovery tests.
//!
//! ## Contract
//!
//! - `load` returns `Ok(None)` when the slot has never been written.
//! - `load` returns a `Serialization` error when the slot exists but
//!   cannot be parsed; callers are expected to recover, not crash.
//! - `clear` removes the slot entirely, which is different from saving an
//!   empty collection: a cleared slot re-seeds on the next initialize.

use crate::error::Result;
use crate::model::Word;

pub mod fs;
pub mod memory;

/// Name of the persisted collection slot, kept stable across versions.
pub const STORAGE_KEY: &str = "wordaid-words";

pub trait WordStore {
    /// Serialize and persist the full collection, overwriting any prior value.
    fn save(&mut self, words: &[Word]) -> Result<()>;

    /// Read the collection back, or `None` if nothing was ever saved.
    fn load(&self) -> Result<Option<Vec<Word>>>;

    /// Remove the persisted slot entirely.
    fn clear(&mut self) -> Result<()>;
}
