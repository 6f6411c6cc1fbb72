//! Message box domain model.
//!
//! This module contains pure types with no FFI dependencies: the result
//! codes, the option bitmask and its axes, the owning window and the default
//! titles. Everything here builds and tests on every target.
//!
//! The native binding is in `platform::windows`.

pub mod constants;
pub mod options;
pub mod outcome;
pub mod owner;
pub mod titles;

pub use options::{Buttons, DefaultButton, DialogOptions, Icon, Modality};
pub use outcome::{Outcome, OutcomeError};
pub use owner::{Owner, OwnerHandle};
pub use titles::Titles;
