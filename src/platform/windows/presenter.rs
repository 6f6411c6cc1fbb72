//! `MessageBoxExW` binding.

use windows::core::PCWSTR;
use windows::Win32::UI::WindowsAndMessaging::{MessageBoxExW, MESSAGEBOX_STYLE};

use super::ffi::{hwnd_from, to_wide};
use crate::dialogs::Presenter;
use crate::model::{DialogOptions, OwnerHandle};

/// Language of the system-provided button captions. Zero selects the
/// user's default language.
const LANG_NEUTRAL_DEFAULT: u16 = 0;

/// Presents message boxes with `user32!MessageBoxExW`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativePresenter;

impl Presenter for NativePresenter {
    fn present(
        &self,
        owner: Option<OwnerHandle>,
        message: &str,
        title: &str,
        options: DialogOptions,
    ) -> i32 {
        let message_wide = to_wide(message);
        let title_wide = to_wide(title);

        // Both buffers are NUL-terminated and outlive the call.
        let result = unsafe {
            MessageBoxExW(
                owner.map(hwnd_from),
                PCWSTR(message_wide.as_ptr()),
                PCWSTR(title_wide.as_ptr()),
                MESSAGEBOX_STYLE(options.bits()),
                LANG_NEUTRAL_DEFAULT,
            )
        };
        result.0
    }
}
