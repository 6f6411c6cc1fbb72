//! Typed call-through to the native modal message box.
//!
//! The model layer (result codes, option bits, owner, titles) and the dialog
//! facade are plain Rust with no FFI, so they build and test on every
//! target. The `MessageBoxExW` binding lives in `platform::windows`.
//!
//! ```ignore
//! use win32_msgbox::{Dialogs, Outcome, Owner};
//!
//! let dialogs = Dialogs::native();
//! let owner = Owner::from_window(&window);
//! match dialogs.show_yes_no_cancel(owner, "Save changes?", None) {
//!     Outcome::Yes => save(),
//!     Outcome::No => discard(),
//!     _ => {}
//! }
//! ```

pub mod dialogs;
pub mod model;
pub mod platform;

// Re-export the public surface for convenience
pub use dialogs::{msg_box, DialogKind, Dialogs, Presenter};
pub use model::{
    Buttons, DefaultButton, DialogOptions, Icon, Modality, Outcome, OutcomeError, Owner,
    OwnerHandle, Titles,
};

#[cfg(target_os = "windows")]
pub use platform::windows::NativePresenter;
