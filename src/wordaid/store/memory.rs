use super::WordStore;
use crate::error::{Result, WordAidError};
use crate::model::Word;

/// In-memory store for tests. The slot holds serialized JSON text rather
/// than structured data, so load/save go through the same serde path as
/// `FileStore` and corrupt payloads can be injected.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    slot: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-loads the slot with a raw payload, valid or not.
    pub fn with_raw(payload: impl Into<String>) -> Self {
        Self {
            slot: Some(payload.into()),
        }
    }

    /// Whether anything is currently persisted.
    pub fn has_data(&self) -> bool {
        self.slot.is_some()
    }
}

impl WordStore for InMemoryStore {
    fn save(&mut self, words: &[Word]) -> Result<()> {
        let content = serde_json::to_string_pretty(words).map_err(WordAidError::Serialization)?;
        self.slot = Some(content);
        Ok(())
    }

    fn load(&self) -> Result<Option<Vec<Word>>> {
        match &self.slot {
            None => Ok(None),
            Some(content) => {
                let words =
                    serde_json::from_str(content).map_err(WordAidError::Serialization)?;
                Ok(Some(words))
            }
        }
    }

    fn clear(&mut self) -> Result<()> {
        self.slot = None;
        Ok(())
    }
}
