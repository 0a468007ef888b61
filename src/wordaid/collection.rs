//! The in-memory word collection and its mutation gateway.
//!
//! [`WordCollection`] is the single owner of the collection state. Every
//! mutation goes through it, and every successful mutation writes the full
//! collection back to the store before returning, including a delete that
//! leaves the collection empty, so a reload can never resurrect stale
//! entries. `clear` is the one exception: it removes the stored slot
//! entirely, which makes the next `initialize` re-seed.

use crate::clock::{Clock, SystemClock};
use crate::error::{Result, WordAidError};
use crate::filter;
use crate::model::{Word, WordForm};
use crate::store::WordStore;
use log::warn;
use uuid::Uuid;

pub struct WordCollection<S: WordStore> {
    store: S,
    words: Vec<Word>,
    clock: Box<dyn Clock>,
}

impl<S: WordStore> WordCollection<S> {
    pub fn new(store: S) -> Self {
        Self::with_clock(store, Box::new(SystemClock))
    }

    pub fn with_clock(store: S, clock: Box<dyn Clock>) -> Self {
        Self {
            store,
            words: Vec::new(),
            clock,
        }
    }

    /// Loads persisted state. An empty slot seeds the two demonstration
    /// words and persists them right away; an unreadable slot is treated
    /// like an empty collection (the next mutation re-persists valid
    /// state) rather than an error the caller has to handle.
    pub fn initialize(&mut self) -> Result<()> {
        match self.store.load() {
            Ok(Some(words)) => {
                self.words = words;
            }
            Ok(None) => {
                self.words = seed_words(self.clock.as_ref());
                self.store.save(&self.words)?;
            }
            Err(WordAidError::Serialization(err)) => {
                warn!("stored word collection is unreadable, starting empty: {err}");
                self.words = Vec::new();
            }
            Err(err) => return Err(err),
        }
        Ok(())
    }

    /// Validates and creates a word, newest first. Returns the new word.
    pub fn add(&mut self, form: WordForm) -> Result<Word> {
        let form = validated(form)?;
        let word = Word::new(form, self.clock.now());
        self.words.insert(0, word.clone());
        self.store.save(&self.words)?;
        Ok(word)
    }

    /// Replaces the mutable fields of the word with `id`. Unknown ids are
    /// a silent no-op (`None`): nothing changes and nothing is persisted,
    /// which makes duplicate invocations harmless.
    pub fn update(&mut self, id: Uuid, form: WordForm) -> Result<Option<Word>> {
        let form = validated(form)?;
        let now = self.clock.now();
        let Some(word) = self.words.iter_mut().find(|w| w.id == id) else {
            return Ok(None);
        };
        word.apply(form, now);
        let updated = word.clone();
        self.store.save(&self.words)?;
        Ok(Some(updated))
    }

    /// Removes the word with `id` if present and returns it so callers can
    /// label the result. Unknown ids are a silent no-op.
    pub fn delete(&mut self, id: Uuid) -> Result<Option<Word>> {
        let Some(pos) = self.words.iter().position(|w| w.id == id) else {
            return Ok(None);
        };
        let removed = self.words.remove(pos);
        self.store.save(&self.words)?;
        Ok(Some(removed))
    }

    /// Empties the collection and removes the persisted slot.
    pub fn clear(&mut self) -> Result<()> {
        self.words.clear();
        self.store.clear()
    }

    /// The full collection, most recently created first.
    pub fn list(&self) -> &[Word] {
        &self.words
    }

    /// Filtered view of the collection; see [`crate::filter`].
    pub fn search(&self, query: &str) -> Vec<&Word> {
        filter::filter(&self.words, query)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn validated(form: WordForm) -> Result<WordForm> {
    let form = form.normalized();
    if form.english.is_empty() || form.japanese.is_empty() {
        return Err(WordAidError::Validation(
            "english and japanese are required".to_string(),
        ));
    }
    Ok(form)
}

/// The fixed two-entry demonstration set, used only when no persisted
/// data exists on first load.
pub fn seed_words(clock: &dyn Clock) -> Vec<Word> {
    let now = clock.now();
    vec![
        Word::new(
            WordForm::new("beautiful", "美しい")
                .with_pronunciation("/ˈbjuːtɪfəl/")
                .with_example("The sunset was beautiful tonight."),
            now,
        ),
        Word::new(
            WordForm::new("challenge", "挑戦")
                .with_pronunciation("/ˈtʃæləndʒ/")
                .with_example("Learning English is a rewarding challenge."),
            now,
        ),
    ]
}
