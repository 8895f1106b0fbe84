//! Reading model configs from disk.

use super::format::ModelTextConfig;
use phonoseq_core::{Result, TextError};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Whole-line `//` comments, which hand-edited model configs often carry.
fn comment_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^\s*//.*$").expect("Invalid regex"))
}

/// Parse the text settings out of a model config JSON document.
pub fn parse_config(json: &str) -> Result<ModelTextConfig> {
    let json = comment_line().replace_all(json, "");
    Ok(serde_json::from_str(&json)?)
}

/// Load the text settings of the model config at `path`.
pub fn load_config(path: impl AsRef<Path>) -> Result<ModelTextConfig> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|err| TextError::Io {
        path: path.to_path_buf(),
        err,
    })?;

    let config = parse_config(&json)?;
    log::debug!(
        "loaded text config from {}: cleaner {}, phonemes {}",
        path.display(),
        config.text_cleaner,
        config.use_phonemes
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_model_config() {
        let json = r#"{
            // model section
            "model": "tacotron2",
            "audio": {"sample_rate": 22050},
            "text_cleaner": "phoneme_cleaners",
            "use_phonemes": true,
            "phoneme_language": "en-us",
            "characters": {
                "pad": "_",
                "eos": "~",
                "bos": "^",
                "characters": "abc ",
                "punctuations": "!. ",
                "phonemes": "ab",
                "unique": true
            }
        }"#;

        let config = parse_config(json).unwrap();
        assert!(config.use_phonemes);
        assert_eq!(config.text_cleaner, "phoneme_cleaners");
        let characters = config.characters.unwrap();
        assert_eq!(characters.characters, "abc ");
        assert!(characters.arpabet);
    }

    #[test]
    fn test_comment_marker_inside_string_survives() {
        let config = parse_config(r#"{"phoneme_language": "//en"}"#).unwrap();
        assert_eq!(config.phoneme_language, "//en");
    }

    #[test]
    fn test_missing_file() {
        let err = load_config("/nonexistent/config.json").unwrap_err();
        assert!(matches!(err, TextError::Io { .. }));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(parse_config("{"), Err(TextError::Json(_))));
    }
}
