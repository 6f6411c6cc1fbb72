//! Windows-specific implementation using the Win32 API.
//!
//! This module contains all Windows-specific code:
//! - FFI helpers (UTF-16 strings, HWND conversion)
//! - The `MessageBoxExW` presenter
//! - Storage (JSON title overrides)

pub mod ffi;
pub mod presenter;
pub mod storage;

pub use presenter::NativePresenter;
