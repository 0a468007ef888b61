use crate::commands::{CmdMessage, CmdResult, WordAidPaths};
use crate::config::WordAidConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &WordAidPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.data_dir;
    match action {
        ConfigAction::ShowAll => {
            let config = WordAidConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = WordAidConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => {
                    result.add_message(CmdMessage::info(val));
                    Ok(result)
                }
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)));
                    Ok(result)
                }
            }
        }
        ConfigAction::Set(key, value) => {
            let mut config = WordAidConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            config.save(dir)?;
            let mut result = CmdResult::default().with_config(config.clone());
            let display_val = config.get(&key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, display_val)));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn paths(dir: &TempDir) -> WordAidPaths {
        WordAidPaths {
            data_dir: dir.path().to_path_buf(),
        }
    }

    #[test]
    fn set_then_show_round_trips() {
        let dir = TempDir::new().unwrap();
        run(
            &paths(&dir),
            ConfigAction::Set("speech-lang".into(), "en-GB".into()),
        )
        .unwrap();

        let result = run(&paths(&dir), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap().speech_lang, "en-GB");
    }

    #[test]
    fn unknown_key_is_an_error_message_not_a_failure() {
        let dir = TempDir::new().unwrap();
        let result = run(&paths(&dir), ConfigAction::ShowKey("nope".into())).unwrap();
        assert!(matches!(
            result.messages[0].level,
            crate::commands::MessageLevel::Error
        ));
    }
}
