use super::ListedWord;
use crate::collection::WordCollection;
use crate::error::{Result, WordAidError};
use crate::store::WordStore;
use uuid::Uuid;

/// The full collection as (position, word) pairs, newest first.
pub fn listed_words<S: WordStore>(words: &WordCollection<S>) -> Vec<ListedWord> {
    words
        .list()
        .iter()
        .enumerate()
        .map(|(i, word)| ListedWord {
            position: i + 1,
            word: word.clone(),
        })
        .collect()
}

/// Resolves 1-based listing positions to stable word ids.
pub fn resolve_positions<S: WordStore>(
    words: &WordCollection<S>,
    positions: &[usize],
) -> Result<Vec<(usize, Uuid)>> {
    positions
        .iter()
        .map(|&pos| {
            words
                .list()
                .get(pos.checked_sub(1).ok_or_else(|| invalid_position(pos))?)
                .map(|word| (pos, word.id))
                .ok_or_else(|| invalid_position(pos))
        })
        .collect()
}

fn invalid_position(pos: usize) -> WordAidError {
    WordAidError::Api(format!("No word at position {}", pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WordForm;
    use crate::store::memory::InMemoryStore;

    fn with_words(count: usize) -> WordCollection<InMemoryStore> {
        let mut col = WordCollection::new(InMemoryStore::new());
        for i in 0..count {
            col.add(WordForm::new(format!("w{i}"), format!("語{i}")))
                .unwrap();
        }
        col
    }

    #[test]
    fn positions_map_onto_newest_first_order() {
        let col = with_words(3);
        let resolved = resolve_positions(&col, &[1, 3]).unwrap();
        assert_eq!(resolved[0].1, col.list()[0].id);
        assert_eq!(resolved[1].1, col.list()[2].id);
    }

    #[test]
    fn out_of_range_position_is_an_api_error() {
        let col = with_words(1);
        assert!(matches!(
            resolve_positions(&col, &[2]),
            Err(WordAidError::Api(_))
        ));
        assert!(matches!(
            resolve_positions(&col, &[0]),
            Err(WordAidError::Api(_))
        ));
    }

    #[test]
    fn listed_words_carries_positions() {
        let col = with_words(2);
        let listed = listed_words(&col);
        assert_eq!(listed[0].position, 1);
        assert_eq!(listed[1].position, 2);
        assert_eq!(listed[0].word.english, "w1");
    }
}
