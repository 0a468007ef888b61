use crate::collection::WordCollection;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::WordStore;

use super::helpers::listed_words;

pub fn run<S: WordStore>(words: &WordCollection<S>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_words(listed_words(words)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WordForm;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_newest_first_with_positions() {
        let mut words = WordCollection::new(InMemoryStore::new());
        words.add(WordForm::new("run", "走る")).unwrap();
        words.add(WordForm::new("jump", "跳ぶ")).unwrap();

        let result = run(&words).unwrap();
        assert_eq!(result.listed_words.len(), 2);
        assert_eq!(result.listed_words[0].position, 1);
        assert_eq!(result.listed_words[0].word.english, "jump");
        assert_eq!(result.listed_words[1].word.english, "run");
    }

    #[test]
    fn empty_collection_lists_nothing() {
        let words = WordCollection::new(InMemoryStore::new());
        let result = run(&words).unwrap();
        assert!(result.listed_words.is_empty());
    }
}
