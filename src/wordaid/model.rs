use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single vocabulary entry: the English term, its Japanese translation,
/// and optional pronunciation and example sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: Uuid,
    pub english: String,
    pub japanese: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Word {
    /// Builds a new word from an already-validated form.
    /// `id` is assigned here and never changes; both timestamps start at `now`.
    pub fn new(form: WordForm, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            english: form.english,
            japanese: form.japanese,
            pronunciation: form.pronunciation,
            example: form.example,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the mutable fields from a form and bumps `updated_at`.
    /// `id` and `created_at` are left alone.
    pub fn apply(&mut self, form: WordForm, now: DateTime<Utc>) {
        self.english = form.english;
        self.japanese = form.japanese;
        self.pronunciation = form.pronunciation;
        self.example = form.example;
        self.updated_at = now;
    }
}

/// Input payload for creating or updating a word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordForm {
    pub english: String,
    pub japanese: String,
    pub pronunciation: Option<String>,
    pub example: Option<String>,
}

impl WordForm {
    pub fn new(english: impl Into<String>, japanese: impl Into<String>) -> Self {
        Self {
            english: english.into(),
            japanese: japanese.into(),
            pronunciation: None,
            example: None,
        }
    }

    pub fn with_pronunciation(mut self, pronunciation: impl Into<String>) -> Self {
        self.pronunciation = Some(pronunciation.into());
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    /// Trims every field; optional fields that trim to empty become absent.
    pub fn normalized(self) -> Self {
        Self {
            english: self.english.trim().to_string(),
            japanese: self.japanese.trim().to_string(),
            pronunciation: normalize_optional(self.pronunciation),
            example: normalize_optional(self.example),
        }
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_trims_required_fields() {
        let form = WordForm::new("  run  ", " 走る ").normalized();
        assert_eq!(form.english, "run");
        assert_eq!(form.japanese, "走る");
    }

    #[test]
    fn normalized_drops_blank_optionals() {
        let form = WordForm::new("run", "走る")
            .with_pronunciation("   ")
            .with_example(" He runs fast. ")
            .normalized();
        assert_eq!(form.pronunciation, None);
        assert_eq!(form.example.as_deref(), Some("He runs fast."));
    }

    #[test]
    fn apply_keeps_id_and_created_at() {
        let now = Utc::now();
        let mut word = Word::new(WordForm::new("run", "走る"), now);
        let id = word.id;

        let later = now + chrono::Duration::seconds(5);
        word.apply(WordForm::new("sprint", "疾走"), later);

        assert_eq!(word.id, id);
        assert_eq!(word.created_at, now);
        assert_eq!(word.updated_at, later);
        assert_eq!(word.english, "sprint");
    }
}
