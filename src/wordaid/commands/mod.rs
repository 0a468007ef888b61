use crate::config::WordAidConfig;
use crate::model::Word;
use std::path::PathBuf;

pub mod add;
pub mod clear;
pub mod config;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod search;
pub mod stats;
pub mod update;
pub mod view;

/// Where wordaid keeps its data on disk.
#[derive(Debug, Clone)]
pub struct WordAidPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A user-facing notification: a short line plus an optional detail line,
/// the CLI rendering of the original app's toasts.
#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
    pub detail: Option<String>,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
            detail: None,
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
            detail: None,
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
            detail: None,
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// A word paired with its 1-based position in the current listing, which
/// is how the CLI lets users refer to entries.
#[derive(Debug, Clone)]
pub struct ListedWord {
    pub position: usize,
    pub word: Word,
}

/// Collection-level counts for the stats view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocabStats {
    pub total: usize,
    pub with_pronunciation: usize,
    pub with_example: usize,
}

impl VocabStats {
    /// Share of words carrying a pronunciation, rounded to whole percent.
    pub fn pronunciation_pct(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.with_pronunciation as f64 / self.total as f64) * 100.0).round() as u32
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_words: Vec<Word>,
    pub listed_words: Vec<ListedWord>,
    pub config: Option<WordAidConfig>,
    pub stats: Option<VocabStats>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_words(mut self, words: Vec<ListedWord>) -> Self {
        self.listed_words = words;
        self
    }

    pub fn with_config(mut self, config: WordAidConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_stats(mut self, stats: VocabStats) -> Self {
        self.stats = Some(stats);
        self
    }
}

/// Partial edit payload: only the fields the user passed. `Some("")` for
/// pronunciation/example clears the field.
#[derive(Debug, Clone, Default)]
pub struct WordPatch {
    pub english: Option<String>,
    pub japanese: Option<String>,
    pub pronunciation: Option<String>,
    pub example: Option<String>,
}

impl WordPatch {
    pub fn is_empty(&self) -> bool {
        self.english.is_none()
            && self.japanese.is_none()
            && self.pronunciation.is_none()
            && self.example.is_none()
    }
}
