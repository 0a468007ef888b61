use crate::error::{Result, WordAidError};
use std::process::Command;

/// Speaks `text` through the system text-to-speech facility, fire and
/// forget: the child process is spawned and left to finish on its own.
/// - macOS: uses `say`
/// - Linux: uses espeak or spd-say
/// - Windows: uses PowerShell's System.Speech
///
/// `lang` is a BCP 47 language tag such as "en-US"; platforms that cannot
/// take a tag directly fall back to their default voice.
pub fn speak(text: &str, lang: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        let _ = lang;
        speak_macos(text)
    }

    #[cfg(target_os = "linux")]
    {
        speak_linux(text, lang)
    }

    #[cfg(target_os = "windows")]
    {
        let _ = lang;
        speak_windows(text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = (text, lang);
        Err(WordAidError::Api(
            "Speech output not supported on this platform".to_string(),
        ))
    }
}

#[cfg(target_os = "macos")]
fn speak_macos(text: &str) -> Result<()> {
    Command::new("say")
        .arg(text)
        .spawn()
        .map(|_| ())
        .map_err(|e| WordAidError::Api(format!("Failed to spawn say: {}", e)))
}

#[cfg(target_os = "linux")]
fn speak_linux(text: &str, lang: &str) -> Result<()> {
    // Try espeak first, then spd-say
    let result = Command::new("espeak")
        .args(["-v", &espeak_voice(lang)])
        .arg(text)
        .spawn();

    match result {
        Ok(_) => Ok(()),
        Err(_) => Command::new("spd-say")
            .args(["-l", lang])
            .arg(text)
            .spawn()
            .map(|_| ())
            .map_err(|e| {
                WordAidError::Api(format!(
                    "Failed to spawn espeak or spd-say: {}. Install espeak or speech-dispatcher.",
                    e
                ))
            }),
    }
}

#[cfg(target_os = "windows")]
fn speak_windows(text: &str) -> Result<()> {
    let script = format!(
        "Add-Type -AssemblyName System.Speech; \
         (New-Object System.Speech.Synthesis.SpeechSynthesizer).Speak('{}')",
        text.replace('\'', "''")
    );
    Command::new("powershell")
        .args(["-NoProfile", "-Command", &script])
        .spawn()
        .map(|_| ())
        .map_err(|e| WordAidError::Api(format!("Failed to spawn powershell: {}", e)))
}

/// Maps a BCP 47 tag to the lowercase voice name espeak expects
/// ("en-US" becomes "en-us").
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn espeak_voice(lang: &str) -> String {
    lang.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_espeak_voice_lowercases_the_tag() {
        assert_eq!(espeak_voice("en-US"), "en-us");
        assert_eq!(espeak_voice("ja-JP"), "ja-jp");
    }
}
