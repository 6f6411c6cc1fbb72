//! The window a message box is parented to.

use std::num::NonZeroIsize;

use raw_window_handle::{HasWindowHandle, RawWindowHandle};

/// A native window handle (an `HWND` on Windows). Never null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OwnerHandle(NonZeroIsize);

impl OwnerHandle {
    /// Wrap a raw handle value. Returns `None` for a null handle.
    pub fn new(raw: isize) -> Option<Self> {
        NonZeroIsize::new(raw).map(OwnerHandle)
    }

    pub fn get(self) -> isize {
        self.0.get()
    }
}

impl From<NonZeroIsize> for OwnerHandle {
    fn from(raw: NonZeroIsize) -> Self {
        OwnerHandle(raw)
    }
}

/// Owner of a message box.
///
/// An owned box blocks only its owner. An unowned box is shown task-modal so
/// it still blocks every top-level window of the calling thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Owner {
    #[default]
    Unowned,
    Window(OwnerHandle),
}

impl Owner {
    /// Resolve the owner from a GUI framework window.
    ///
    /// Only a Win32 handle can own a native message box. Any other platform
    /// handle, or a window whose handle is currently unavailable, resolves to
    /// [`Owner::Unowned`].
    pub fn from_window<W: HasWindowHandle + ?Sized>(window: &W) -> Self {
        let handle = match window.window_handle() {
            Ok(handle) => handle,
            Err(err) => {
                log::debug!("owner window handle unavailable ({}), showing unowned", err);
                return Owner::Unowned;
            }
        };

        match handle.as_raw() {
            RawWindowHandle::Win32(win32) => Owner::Window(OwnerHandle(win32.hwnd)),
            other => {
                log::debug!("owner window is not a Win32 window ({:?}), showing unowned", other);
                Owner::Unowned
            }
        }
    }

    /// The native handle, if the box has an owner.
    pub fn handle(self) -> Option<OwnerHandle> {
        match self {
            Owner::Unowned => None,
            Owner::Window(handle) => Some(handle),
        }
    }
}

impl From<OwnerHandle> for NonZeroIsize {
    fn from(handle: OwnerHandle) -> Self {
        handle.0
    }
}

impl From<OwnerHandle> for Owner {
    fn from(handle: OwnerHandle) -> Self {
        Owner::Window(handle)
    }
}

impl From<Option<OwnerHandle>> for Owner {
    fn from(handle: Option<OwnerHandle>) -> Self {
        handle.map_or(Owner::Unowned, Owner::Window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_handle_is_rejected() {
        assert_eq!(OwnerHandle::new(0), None);
        assert_eq!(OwnerHandle::new(0x1234).map(OwnerHandle::get), Some(0x1234));
    }

    #[test]
    fn test_handle_converts_to_non_zero() {
        let handle = OwnerHandle::new(0x0004_0A1C).expect("non-null");
        assert_eq!(NonZeroIsize::from(handle).get(), 0x0004_0A1C);
    }

    #[test]
    fn test_default_is_unowned() {
        assert_eq!(Owner::default(), Owner::Unowned);
        assert_eq!(Owner::default().handle(), None);
    }

    #[test]
    fn test_from_optional_handle() {
        let handle = OwnerHandle::new(42).expect("non-null");
        assert_eq!(Owner::from(Some(handle)), Owner::Window(handle));
        assert_eq!(Owner::from(None::<OwnerHandle>), Owner::Unowned);
    }
}
