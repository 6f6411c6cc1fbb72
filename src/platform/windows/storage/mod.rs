//! Configuration storage for Windows.
//!
//! Reads title overrides from a JSON file in %APPDATA%/Win32MsgBox/titles.json

pub mod config;

pub use config::*;
