//! Platform-specific implementations.
//!
//! Only Windows provides a native message box binding. The model and the
//! dialog facade build everywhere; other targets supply their own
//! `Presenter`.

#[cfg(target_os = "windows")]
pub mod windows;
