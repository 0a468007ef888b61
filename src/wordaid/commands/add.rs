use crate::collection::WordCollection;
use crate::commands::{CmdMessage, CmdResult, ListedWord};
use crate::error::Result;
use crate::model::WordForm;
use crate::store::WordStore;

pub fn run<S: WordStore>(words: &mut WordCollection<S>, form: WordForm) -> Result<CmdResult> {
    let word = words.add(form)?;

    let mut result = CmdResult::default();
    result.add_message(
        CmdMessage::success(format!("Word added: {}", word.english))
            .with_detail(word.japanese.clone()),
    );
    // A new word is always the newest, so it lists at position 1
    result.listed_words.push(ListedWord {
        position: 1,
        word: word.clone(),
    });
    result.affected_words.push(word);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WordAidError;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn adds_and_reports_the_new_word() {
        let mut words = WordCollection::new(InMemoryStore::new());
        let result = run(&mut words, WordForm::new("run", "走る")).unwrap();

        assert_eq!(result.affected_words.len(), 1);
        assert_eq!(result.affected_words[0].english, "run");
        assert_eq!(result.listed_words[0].position, 1);
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn validation_failure_leaves_collection_untouched() {
        let mut words = WordCollection::new(InMemoryStore::new());
        let err = run(&mut words, WordForm::new("", "走る")).unwrap_err();

        assert!(matches!(err, WordAidError::Validation(_)));
        assert!(words.is_empty());
    }
}
