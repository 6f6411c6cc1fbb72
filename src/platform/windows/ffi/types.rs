//! Type conversions for Windows FFI.

use windows::Win32::Foundation::HWND;

use crate::model::OwnerHandle;

/// Encode a string as NUL-terminated UTF-16.
///
/// The text is not escaped or wrapped. An interior NUL ends the string as
/// far as the OS is concerned.
pub fn to_wide(text: &str) -> Vec<u16> {
    text.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Native window handle for an owner.
pub fn hwnd_from(handle: OwnerHandle) -> HWND {
    HWND(handle.get() as *mut std::ffi::c_void)
}

/// Owner handle for a native window. `None` for a null HWND.
pub fn owner_handle(hwnd: HWND) -> Option<OwnerHandle> {
    OwnerHandle::new(hwnd.0 as isize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_wide_appends_terminator() {
        assert_eq!(to_wide("OK"), vec![0x4F, 0x4B, 0]);
        assert_eq!(to_wide(""), vec![0]);
    }

    #[test]
    fn test_hwnd_round_trip() {
        let handle = OwnerHandle::new(0x0004_0A1C).expect("non-null");
        assert_eq!(owner_handle(hwnd_from(handle)), Some(handle));
        assert_eq!(owner_handle(HWND(std::ptr::null_mut())), None);
    }
}
