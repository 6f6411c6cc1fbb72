//! Generic invoker and the named convenience dialogs.
//!
//! ```text
//! Dialogs::show_yes_no ─┐
//! Dialogs::show_error  ─┼─▶ DialogKind ─▶ msg_box ─▶ Presenter::present
//!        ...           ─┘   (options,      (owner      (MessageBoxExW, or a
//!                            title)         routing)    recorder in tests)
//! ```
//!
//! [`Presenter`] is the only seam to the OS. Production code binds it to
//! `NativePresenter`; tests bind it to a recorder.

pub mod facade;
pub mod kind;
pub mod presenter;

pub use facade::Dialogs;
pub use kind::DialogKind;
pub use presenter::{msg_box, Presenter};
