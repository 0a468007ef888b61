use crate::collection::WordCollection;
use crate::commands::{CmdResult, ListedWord};
use crate::error::Result;
use crate::store::WordStore;

use super::helpers::resolve_positions;

pub fn run<S: WordStore>(words: &WordCollection<S>, positions: &[usize]) -> Result<CmdResult> {
    let resolved = resolve_positions(words, positions)?;

    let listed = resolved
        .into_iter()
        .filter_map(|(position, id)| {
            words
                .list()
                .iter()
                .find(|w| w.id == id)
                .map(|word| ListedWord {
                    position,
                    word: word.clone(),
                })
        })
        .collect();

    Ok(CmdResult::default().with_listed_words(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WordAidError;
    use crate::model::WordForm;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn views_the_requested_cards() {
        let mut words = WordCollection::new(InMemoryStore::new());
        words.add(WordForm::new("run", "走る")).unwrap();
        words.add(WordForm::new("jump", "跳ぶ")).unwrap();

        let result = run(&words, &[2]).unwrap();
        assert_eq!(result.listed_words.len(), 1);
        assert_eq!(result.listed_words[0].word.english, "run");
    }

    #[test]
    fn unknown_position_is_an_api_error() {
        let words = WordCollection::new(InMemoryStore::new());
        assert!(matches!(run(&words, &[1]), Err(WordAidError::Api(_))));
    }
}
