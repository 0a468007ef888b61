use crate::collection::WordCollection;
use crate::commands::{CmdResult, ListedWord};
use crate::error::Result;
use crate::store::WordStore;

/// Lists the words matching `term`. Positions are taken from the full
/// listing, not the filtered one, so matches can still be addressed by
/// `view`/`edit`/`delete` afterwards.
pub fn run<S: WordStore>(words: &WordCollection<S>, term: &str) -> Result<CmdResult> {
    let listed = words
        .list()
        .iter()
        .enumerate()
        .filter(|(_, word)| term.is_empty() || crate::filter::matches(word, term))
        .map(|(i, word)| ListedWord {
            position: i + 1,
            word: word.clone(),
        })
        .collect();

    Ok(CmdResult::default().with_listed_words(listed))
}
