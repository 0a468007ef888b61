use crate::collection::WordCollection;
use crate::commands::{CmdMessage, CmdResult, WordPatch};
use crate::error::{Result, WordAidError};
use crate::model::WordForm;
use crate::store::WordStore;

use super::helpers::resolve_positions;

/// Applies a partial edit to the word at `position`: fields present in the
/// patch replace the stored ones, the rest carry over unchanged.
pub fn run<S: WordStore>(
    words: &mut WordCollection<S>,
    position: usize,
    patch: WordPatch,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if patch.is_empty() {
        result.add_message(CmdMessage::info("Nothing to update."));
        return Ok(result);
    }

    let (_, id) = resolve_positions(words, &[position])?[0];
    let current = words
        .list()
        .iter()
        .find(|w| w.id == id)
        .cloned()
        .ok_or_else(|| WordAidError::Api(format!("No word at position {}", position)))?;

    let form = WordForm {
        english: patch.english.unwrap_or(current.english),
        japanese: patch.japanese.unwrap_or(current.japanese),
        pronunciation: patch.pronunciation.or(current.pronunciation),
        example: patch.example.or(current.example),
    };

    match words.update(id, form)? {
        Some(word) => {
            result.add_message(
                CmdMessage::success(format!("Word updated: {}", word.english))
                    .with_detail(word.japanese.clone()),
            );
            result.affected_words.push(word);
        }
        None => {
            result.add_message(CmdMessage::warning("Word no longer exists."));
        }
    }

    Ok(result)
}
