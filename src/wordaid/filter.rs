//! Pure search filtering over the word collection.
//!
//! English and pronunciation match case-insensitively; Japanese is matched
//! as an exact substring since case folding is meaningless for the script.
//! An empty query matches everything. Order is preserved and nothing is
//! mutated, so this is safe to re-run on every render.

use crate::model::Word;

/// Returns the words matching `query`, in their original order.
pub fn filter<'a>(words: &'a [Word], query: &str) -> Vec<&'a Word> {
    if query.is_empty() {
        return words.iter().collect();
    }
    words.iter().filter(|w| matches(w, query)).collect()
}

/// True when any of english, japanese, or pronunciation contains `query`.
pub fn matches(word: &Word, query: &str) -> bool {
    let query_lower = query.to_lowercase();

    if word.english.to_lowercase().contains(&query_lower) {
        return true;
    }
    if word.japanese.contains(query) {
        return true;
    }
    if let Some(pronunciation) = &word.pronunciation {
        if pronunciation.to_lowercase().contains(&query_lower) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WordForm;
    use chrono::Utc;

    fn word(english: &str, japanese: &str, pronunciation: Option<&str>) -> Word {
        let mut form = WordForm::new(english, japanese);
        if let Some(p) = pronunciation {
            form = form.with_pronunciation(p);
        }
        Word::new(form, Utc::now())
    }

    #[test]
    fn empty_query_matches_everything_in_order() {
        let words = vec![word("jump", "跳ぶ", None), word("run", "走る", None)];
        let found = filter(&words, "");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].english, "jump");
        assert_eq!(found[1].english, "run");
    }

    #[test]
    fn english_matches_case_insensitively() {
        let words = vec![word("Beautiful", "美しい", None)];
        assert_eq!(filter(&words, "BEAUT").len(), 1);
        assert_eq!(filter(&words, "beaut").len(), 1);
    }

    #[test]
    fn japanese_matches_exact_substring() {
        let words = vec![word("run", "走る", None), word("challenge", "挑戦", None)];
        let found = filter(&words, "走");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].english, "run");
    }

    #[test]
    fn pronunciation_matches_when_present() {
        let words = vec![
            word("beautiful", "美しい", Some("/ˈbjuːtɪfəl/")),
            word("run", "走る", None),
        ];
        let found = filter(&words, "bjuː");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].english, "beautiful");
    }

    #[test]
    fn unmatched_query_returns_nothing() {
        let words = vec![word("run", "走る", None)];
        assert!(filter(&words, "xyz").is_empty());
    }

    #[test]
    fn substring_scenario_from_listing() {
        // run/jump: "ru" must hit only the english substring of "run"
        let words = vec![word("jump", "跳ぶ", None), word("run", "走る", None)];
        let found = filter(&words, "ru");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].english, "run");
    }
}
