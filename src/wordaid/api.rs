//! # API Facade
//!
//! `WordAidApi` is the single entry point for every operation, regardless
//! of the UI driving it. It owns the [`WordCollection`] core, dispatches to
//! the command layer, and returns structured `CmdResult`s: no stdout, no
//! formatting, no terminal assumptions. The CLI in `main.rs` is one client
//! of this facade; anything else (a TUI, a GUI shell) would be another.
//!
//! Generic over [`WordStore`] so tests can run the whole stack against
//! `InMemoryStore` without touching the filesystem.

use crate::collection::WordCollection;
use crate::commands;
use crate::error::Result;
use crate::model::WordForm;
use crate::store::WordStore;
use std::path::PathBuf;

pub struct WordAidApi<S: WordStore> {
    words: WordCollection<S>,
    paths: commands::WordAidPaths,
}

impl<S: WordStore> WordAidApi<S> {
    pub fn new(store: S, paths: commands::WordAidPaths) -> Self {
        Self {
            words: WordCollection::new(store),
            paths,
        }
    }

    /// Loads persisted state, seeding the demonstration words on first run.
    /// Must be called once before any other operation.
    pub fn initialize(&mut self) -> Result<()> {
        self.words.initialize()
    }

    pub fn add_word(&mut self, form: WordForm) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.words, form)
    }

    pub fn update_word(
        &mut self,
        position: usize,
        patch: commands::WordPatch,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.words, position, patch)
    }

    pub fn delete_words(&mut self, positions: &[usize]) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.words, positions)
    }

    pub fn clear_words(&mut self, skip_confirm: bool) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.words, skip_confirm)
    }

    pub fn list_words(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.words)
    }

    pub fn search_words(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.words, term)
    }

    pub fn view_words(&self, positions: &[usize]) -> Result<commands::CmdResult> {
        commands::view::run(&self.words, positions)
    }

    pub fn word_stats(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.words)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn data_dir(&self) -> PathBuf {
        self.paths.data_dir.clone()
    }

    pub fn paths(&self) -> &commands::WordAidPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, ListedWord, MessageLevel, VocabStats, WordAidPaths, WordPatch};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api() -> WordAidApi<InMemoryStore> {
        let paths = WordAidPaths {
            data_dir: PathBuf::from("/tmp/wordaid-test"),
        };
        WordAidApi::new(InMemoryStore::new(), paths)
    }

    #[test]
    fn initialize_then_list_shows_seeds() {
        let mut api = api();
        api.initialize().unwrap();
        let result = api.list_words().unwrap();
        assert_eq!(result.listed_words.len(), 2);
    }

    #[test]
    fn add_then_search_dispatches_through_the_stack() {
        let mut api = api();
        api.initialize().unwrap();
        api.clear_words(true).unwrap();

        api.add_word(WordForm::new("run", "走る")).unwrap();
        let result = api.search_words("ru").unwrap();
        assert_eq!(result.listed_words.len(), 1);
        assert_eq!(result.listed_words[0].word.english, "run");
    }
}
