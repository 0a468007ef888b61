use crate::error::{Result, WordAidError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SPEECH_LANG: &str = "en-US";

/// Configuration for wordaid, stored next to the word collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordAidConfig {
    /// Language tag handed to the text-to-speech collaborator (e.g. "en-US")
    #[serde(default = "default_speech_lang")]
    pub speech_lang: String,
}

fn default_speech_lang() -> String {
    DEFAULT_SPEECH_LANG.to_string()
}

impl Default for WordAidConfig {
    fn default() -> Self {
        Self {
            speech_lang: DEFAULT_SPEECH_LANG.to_string(),
        }
    }
}

impl WordAidConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(WordAidError::Io)?;
        let config: WordAidConfig =
            serde_json::from_str(&content).map_err(WordAidError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(WordAidError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(WordAidError::Serialization)?;
        fs::write(config_path, content).map_err(WordAidError::Io)?;
        Ok(())
    }

    pub fn get_speech_lang(&self) -> &str {
        &self.speech_lang
    }

    pub fn set_speech_lang(&mut self, lang: &str) {
        self.speech_lang = lang.trim().to_string();
    }

    /// Look up a config value by its CLI key name.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "speech-lang" => Some(self.speech_lang.clone()),
            _ => None,
        }
    }

    /// Set a config value by its CLI key name.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "speech-lang" => {
                if value.trim().is_empty() {
                    return Err("speech-lang cannot be empty".to_string());
                }
                self.set_speech_lang(value);
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }
}
