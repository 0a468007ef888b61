use crate::collection::WordCollection;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::WordStore;

use super::helpers::resolve_positions;

pub fn run<S: WordStore>(
    words: &mut WordCollection<S>,
    positions: &[usize],
) -> Result<CmdResult> {
    let resolved = resolve_positions(words, positions)?;
    let mut result = CmdResult::default();

    for (position, id) in resolved {
        match words.delete(id)? {
            Some(word) => {
                result.add_message(
                    CmdMessage::success(format!("Word deleted ({}): {}", position, word.english))
                        .with_detail(word.japanese.clone()),
                );
                result.affected_words.push(word);
            }
            None => {
                // Already gone, e.g. the same entry named twice
                result.add_message(CmdMessage::warning(format!(
                    "Word at position {} was already deleted.",
                    position
                )));
            }
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WordForm;
    use crate::store::memory::InMemoryStore;

    fn seeded() -> WordCollection<InMemoryStore> {
        let mut words = WordCollection::new(InMemoryStore::new());
        words.add(WordForm::new("a", "あ")).unwrap();
        words.add(WordForm::new("b", "い")).unwrap();
        words.add(WordForm::new("c", "う")).unwrap();
        words
    }

    #[test]
    fn deletes_the_named_word_and_reports_it() {
        let mut words = seeded();
        // Newest first: position 2 is "b"
        let result = run(&mut words, &[2]).unwrap();

        assert_eq!(result.affected_words.len(), 1);
        assert_eq!(result.affected_words[0].english, "b");
        let order: Vec<_> = words.list().iter().map(|w| w.english.as_str()).collect();
        assert_eq!(order, vec!["c", "a"]);
    }

    #[test]
    fn duplicate_positions_warn_instead_of_failing() {
        let mut words = seeded();
        let result = run(&mut words, &[1, 1]).unwrap();

        assert_eq!(result.affected_words.len(), 1);
        assert!(matches!(
            result.messages[1].level,
            crate::commands::MessageLevel::Warning
        ));
        assert_eq!(words.len(), 2);
    }
}
