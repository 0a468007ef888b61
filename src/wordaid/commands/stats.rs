use crate::collection::WordCollection;
use crate::commands::{CmdResult, VocabStats};
use crate::error::Result;
use crate::store::WordStore;

pub fn run<S: WordStore>(words: &WordCollection<S>) -> Result<CmdResult> {
    let stats = VocabStats {
        total: words.len(),
        with_pronunciation: words
            .list()
            .iter()
            .filter(|w| w.pronunciation.is_some())
            .count(),
        with_example: words.list().iter().filter(|w| w.example.is_some()).count(),
    };

    Ok(CmdResult::default().with_stats(stats))
}
