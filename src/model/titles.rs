//! Default title bar texts for the convenience dialogs.

use std::fs;
use std::path::Path;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::constants::*;

/// Title used by each convenience dialog when the caller passes none.
///
/// Missing fields fall back to their defaults when deserialized, so a
/// partial document overrides only what it names.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Titles {
    pub error: String,
    pub warning: String,
    pub info: String,
    pub yes_no: String,
    pub yes_no_cancel: String,
    pub retry_cancel: String,
    pub cancel_retry_continue: String,
    pub abort_retry_ignore: String,
}

impl Default for Titles {
    fn default() -> Self {
        Self {
            error: DEFAULT_TITLE_ERROR.to_string(),
            warning: DEFAULT_TITLE_WARNING.to_string(),
            info: DEFAULT_TITLE_INFO.to_string(),
            yes_no: DEFAULT_TITLE_QUESTION.to_string(),
            yes_no_cancel: DEFAULT_TITLE_QUESTION.to_string(),
            retry_cancel: DEFAULT_TITLE_RETRY.to_string(),
            cancel_retry_continue: DEFAULT_TITLE_RETRY.to_string(),
            abort_retry_ignore: DEFAULT_TITLE_RETRY.to_string(),
        }
    }
}

impl Titles {
    /// Parse a titles document.
    pub fn from_json(contents: &str) -> serde_json::Result<Self> {
        serde_json::from_str(contents)
    }

    /// Parse a titles document, returning defaults if it is invalid.
    pub fn from_json_or_default(contents: &str) -> Self {
        Self::from_json(contents).unwrap_or_else(|e| {
            warn!("ignoring invalid title overrides: {}", e);
            Self::default()
        })
    }

    /// Load titles from a JSON file, returning defaults if not found or invalid.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => {
                info!("loading title overrides from {}", path.display());
                Self::from_json_or_default(&contents)
            }
            Err(e) => {
                debug!("no title overrides at {} ({})", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_document_keeps_other_defaults() {
        let titles = Titles::from_json(r#"{ "error": "Fehler" }"#).expect("valid json");
        assert_eq!(titles.error, "Fehler");
        assert_eq!(titles.warning, Titles::default().warning);
    }

    #[test]
    fn test_invalid_document_falls_back_to_defaults() {
        assert!(Titles::from_json("not json").is_err());
        assert_eq!(Titles::from_json_or_default("not json"), Titles::default());
        assert_eq!(
            Titles::from_json_or_default(r#"{ "error": 42 }"#),
            Titles::default()
        );
    }

    #[test]
    fn test_valid_document_is_used() {
        let titles = Titles::from_json_or_default(r#"{ "info": "Hinweis" }"#);
        assert_eq!(titles.info, "Hinweis");
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("win32-msgbox-no-such-dir/titles.json");
        assert_eq!(Titles::load(&path), Titles::default());
    }
}
