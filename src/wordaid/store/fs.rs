use super::{WordStore, STORAGE_KEY};
use crate::error::{Result, WordAidError};
use crate::model::Word;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Path of the collection file inside the store root.
    pub fn data_path(&self) -> PathBuf {
        self.root.join(format!("{}.json", STORAGE_KEY))
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(WordAidError::Io)?;
        }
        Ok(())
    }
}

impl WordStore for FileStore {
    fn save(&mut self, words: &[Word]) -> Result<()> {
        self.ensure_dir(&self.root)?;
        let content = serde_json::to_string_pretty(words).map_err(WordAidError::Serialization)?;
        fs::write(self.data_path(), content).map_err(WordAidError::Io)?;
        debug!("saved {} words to {}", words.len(), self.data_path().display());
        Ok(())
    }

    fn load(&self) -> Result<Option<Vec<Word>>> {
        let path = self.data_path();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(WordAidError::Io)?;
        let words: Vec<Word> =
            serde_json::from_str(&content).map_err(WordAidError::Serialization)?;
        Ok(Some(words))
    }

    fn clear(&mut self) -> Result<()> {
        let path = self.data_path();
        if path.exists() {
            fs::remove_file(path).map_err(WordAidError::Io)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WordForm;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        (dir, store)
    }

    fn sample() -> Vec<Word> {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 30, 45).unwrap();
        vec![
            Word::new(
                WordForm::new("run", "走る")
                    .with_pronunciation("/rʌn/")
                    .with_example("I run every morning."),
                now,
            ),
            Word::new(WordForm::new("jump", "跳ぶ"), now),
        ]
    }

    #[test]
    fn load_absent_returns_none() {
        let (_dir, store) = setup();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips_field_for_field() {
        let (_dir, mut store) = setup();
        let words = sample();
        store.save(&words).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, words);
        // Timestamps must survive the textual round trip exactly
        assert_eq!(loaded[0].created_at, words[0].created_at);
        assert_eq!(loaded[0].updated_at, words[0].updated_at);
    }

    #[test]
    fn empty_collection_round_trips() {
        let (_dir, mut store) = setup();
        store.save(&[]).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn corrupt_payload_is_a_serialization_error() {
        let (dir, store) = setup();
        fs::write(dir.path().join("wordaid-words.json"), "{not json").unwrap();

        match store.load() {
            Err(WordAidError::Serialization(_)) => {}
            other => panic!("Expected Serialization error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn clear_removes_the_slot() {
        let (_dir, mut store) = setup();
        store.save(&sample()).unwrap();
        assert!(store.data_path().exists());

        store.clear().unwrap();
        assert!(!store.data_path().exists());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn clear_on_missing_slot_is_a_noop() {
        let (_dir, mut store) = setup();
        store.clear().unwrap();
    }
}
