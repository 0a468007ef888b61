use crate::collection::WordCollection;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, WordAidError};
use crate::store::WordStore;
use std::io::{self, Write};

pub fn run<S: WordStore>(words: &mut WordCollection<S>, skip_confirm: bool) -> Result<CmdResult> {
    if words.is_empty() {
        let mut res = CmdResult::default();
        res.add_message(CmdMessage::info("The word book is already empty."));
        return Ok(res);
    }

    if !skip_confirm {
        print!(
            "This will permanently remove all {} words. [Y] to confirm: ",
            words.len()
        );
        io::stdout().flush().map_err(WordAidError::Io)?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).map_err(WordAidError::Io)?;

        if input.trim() != "Y" {
            let mut res = CmdResult::default();
            res.add_message(CmdMessage::info("Operation cancelled."));
            return Ok(res);
        }
    }

    let count = words.len();
    words.clear()?;

    let mut result = CmdResult::default();
    result.add_message(
        CmdMessage::success("All words deleted.")
            .with_detail(format!("Removed {} entries and reset the word book.", count)),
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WordForm;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn clears_everything_when_confirmed() {
        let mut words = WordCollection::new(InMemoryStore::new());
        words.add(WordForm::new("run", "走る")).unwrap();

        let result = run(&mut words, true).unwrap();
        assert!(words.is_empty());
        assert!(matches!(
            result.messages[0].level,
            crate::commands::MessageLevel::Success
        ));
    }

    #[test]
    fn empty_collection_reports_info_without_prompting() {
        let mut words = WordCollection::new(InMemoryStore::new());
        // skip_confirm = false must not reach the stdin prompt
        let result = run(&mut words, false).unwrap();
        assert!(matches!(
            result.messages[0].level,
            crate::commands::MessageLevel::Info
        ));
    }
}
