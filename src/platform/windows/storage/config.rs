//! JSON title overrides for Windows.
//!
//! Reads %APPDATA%/Win32MsgBox/titles.json. The file is optional; any field
//! it leaves out keeps its default title.

use std::path::PathBuf;

use crate::model::Titles;

/// Get config file path: %APPDATA%/Win32MsgBox/titles.json
pub fn config_path() -> PathBuf {
    let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(appdata)
        .join("Win32MsgBox")
        .join("titles.json")
}

/// Load titles from the config file, returning defaults if not found or invalid.
pub fn load_titles() -> Titles {
    Titles::load(&config_path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_ends_with_file_name() {
        assert!(config_path().ends_with("Win32MsgBox/titles.json"));
    }
}
