//! Option bits accepted by the native message box.
//!
//! The mask is built from four independent axes: button set, icon, default
//! button and modality. Each axis has its own enum; any axis values combine
//! with `|` into a [`DialogOptions`]. Conflicting bits are not rejected, the
//! OS decides what they mean.
//!
//! ```
//! use win32_msgbox::model::{Buttons, DefaultButton, DialogOptions, Icon};
//!
//! let options = Buttons::YesNo | Icon::Question | DefaultButton::Second;
//! assert_eq!(options.bits(), 0x124);
//! assert_eq!(options.buttons(), Some(Buttons::YesNo));
//! ```

use std::ops::{BitOr, BitOrAssign};

use bitflags::bitflags;

use super::constants::*;

bitflags! {
    /// Combined option bitmask passed to the native message box.
    ///
    /// Zero-valued settings (OK button set, first default button,
    /// application modality, no icon) are the empty mask.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DialogOptions: u32 {
        const OK_CANCEL = MB_OKCANCEL;
        const ABORT_RETRY_IGNORE = MB_ABORTRETRYIGNORE;
        const YES_NO_CANCEL = MB_YESNOCANCEL;
        const YES_NO = MB_YESNO;
        const RETRY_CANCEL = MB_RETRYCANCEL;
        const CANCEL_TRY_CONTINUE = MB_CANCELTRYCONTINUE;

        const ICON_ERROR = MB_ICONERROR;
        const ICON_QUESTION = MB_ICONQUESTION;
        const ICON_WARNING = MB_ICONWARNING;
        const ICON_INFORMATION = MB_ICONINFORMATION;

        const DEF_BUTTON2 = MB_DEFBUTTON2;
        const DEF_BUTTON3 = MB_DEFBUTTON3;
        const DEF_BUTTON4 = MB_DEFBUTTON4;

        const SYSTEM_MODAL = MB_SYSTEMMODAL;
        const TASK_MODAL = MB_TASKMODAL;

        // Bits this crate has no name for still reach the OS untouched.
        const _ = !0;
    }
}

impl Default for DialogOptions {
    fn default() -> Self {
        Self::empty()
    }
}

impl DialogOptions {
    /// Button set encoded in the mask, if it is a known one.
    pub fn buttons(self) -> Option<Buttons> {
        Buttons::from_bits(self.bits() & Buttons::MASK)
    }

    /// Icon encoded in the mask. `None` when no known icon bits are set.
    pub fn icon(self) -> Option<Icon> {
        Icon::from_bits(self.bits() & Icon::MASK)
    }

    pub fn default_button(self) -> Option<DefaultButton> {
        DefaultButton::from_bits(self.bits() & DefaultButton::MASK)
    }

    /// Modality encoded in the mask. `None` for the undefined `0x3000`.
    pub fn modality(self) -> Option<Modality> {
        Modality::from_bits(self.bits() & Modality::MASK)
    }
}

/// Which buttons the box shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum Buttons {
    #[default]
    Ok = MB_OK,
    OkCancel = MB_OKCANCEL,
    AbortRetryIgnore = MB_ABORTRETRYIGNORE,
    YesNoCancel = MB_YESNOCANCEL,
    YesNo = MB_YESNO,
    RetryCancel = MB_RETRYCANCEL,
    CancelTryContinue = MB_CANCELTRYCONTINUE,
}

impl Buttons {
    fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            MB_OK => Some(Buttons::Ok),
            MB_OKCANCEL => Some(Buttons::OkCancel),
            MB_ABORTRETRYIGNORE => Some(Buttons::AbortRetryIgnore),
            MB_YESNOCANCEL => Some(Buttons::YesNoCancel),
            MB_YESNO => Some(Buttons::YesNo),
            MB_RETRYCANCEL => Some(Buttons::RetryCancel),
            MB_CANCELTRYCONTINUE => Some(Buttons::CancelTryContinue),
            _ => None,
        }
    }
}

/// Icon shown next to the message. Leaving the axis out shows no icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Icon {
    Error = MB_ICONERROR,
    Question = MB_ICONQUESTION,
    Warning = MB_ICONWARNING,
    Information = MB_ICONINFORMATION,
}

impl Icon {
    pub const STOP: Icon = Icon::Error;
    pub const HAND: Icon = Icon::Error;
    pub const EXCLAMATION: Icon = Icon::Warning;
    pub const ASTERISK: Icon = Icon::Information;

    fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            MB_ICONERROR => Some(Icon::Error),
            MB_ICONQUESTION => Some(Icon::Question),
            MB_ICONWARNING => Some(Icon::Warning),
            MB_ICONINFORMATION => Some(Icon::Information),
            _ => None,
        }
    }
}

/// Which button has focus when the box opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum DefaultButton {
    #[default]
    First = MB_DEFBUTTON1,
    Second = MB_DEFBUTTON2,
    Third = MB_DEFBUTTON3,
    Fourth = MB_DEFBUTTON4,
}

impl DefaultButton {
    fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            MB_DEFBUTTON1 => Some(DefaultButton::First),
            MB_DEFBUTTON2 => Some(DefaultButton::Second),
            MB_DEFBUTTON3 => Some(DefaultButton::Third),
            MB_DEFBUTTON4 => Some(DefaultButton::Fourth),
            _ => None,
        }
    }
}

/// What the box blocks while it is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum Modality {
    /// Blocks the owner window.
    #[default]
    Application = MB_APPLMODAL,
    /// Blocks the owner window and stays on top.
    System = MB_SYSTEMMODAL,
    /// Blocks all top-level windows of the calling thread.
    Task = MB_TASKMODAL,
}

impl Modality {
    fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            MB_APPLMODAL => Some(Modality::Application),
            MB_SYSTEMMODAL => Some(Modality::System),
            MB_TASKMODAL => Some(Modality::Task),
            _ => None,
        }
    }
}

macro_rules! option_axis {
    ($axis:ident, $mask:expr) => {
        impl $axis {
            /// Bits of this axis within a [`DialogOptions`] mask.
            pub const MASK: u32 = $mask;

            pub const fn bits(self) -> u32 {
                self as u32
            }
        }

        impl From<$axis> for DialogOptions {
            fn from(value: $axis) -> Self {
                DialogOptions::from_bits_retain(value.bits())
            }
        }

        impl<R: Into<DialogOptions>> BitOr<R> for $axis {
            type Output = DialogOptions;

            fn bitor(self, rhs: R) -> DialogOptions {
                let rhs: DialogOptions = rhs.into();
                DialogOptions::from(self).union(rhs)
            }
        }

        impl BitOr<$axis> for DialogOptions {
            type Output = DialogOptions;

            fn bitor(self, rhs: $axis) -> DialogOptions {
                self.union(DialogOptions::from(rhs))
            }
        }

        impl BitOrAssign<$axis> for DialogOptions {
            fn bitor_assign(&mut self, rhs: $axis) {
                *self = *self | rhs;
            }
        }
    };
}

option_axis!(Buttons, MB_TYPEMASK);
option_axis!(Icon, MB_ICONMASK);
option_axis!(DefaultButton, MB_DEFMASK);
option_axis!(Modality, MB_MODEMASK);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_values_match_os_contract() {
        assert_eq!(Buttons::CancelTryContinue.bits(), 0x6);
        assert_eq!(Icon::Information.bits(), 0x40);
        assert_eq!(DefaultButton::Fourth.bits(), 0x300);
        assert_eq!(Modality::Task.bits(), 0x2000);
    }

    #[test]
    fn test_icon_aliases() {
        assert_eq!(Icon::STOP, Icon::Error);
        assert_eq!(Icon::HAND, Icon::Error);
        assert_eq!(Icon::EXCLAMATION, Icon::Warning);
        assert_eq!(Icon::ASTERISK, Icon::Information);
    }

    #[test]
    fn test_zero_valued_settings_are_empty() {
        let options = Buttons::Ok | DefaultButton::First | Modality::Application;
        assert!(options.is_empty());
        assert_eq!(options, DialogOptions::default());
    }

    #[test]
    fn test_or_assign_adds_axis() {
        let mut options = DialogOptions::from(Buttons::RetryCancel);
        options |= Modality::Task;
        assert_eq!(options.bits(), 0x2005);
    }

    #[test]
    fn test_conflicting_bits_are_kept() {
        // Error | Question overlaps the warning pattern; no validation applies.
        let options = Icon::Error | Icon::Question;
        assert_eq!(options.bits(), 0x30);
        assert_eq!(options.icon(), Some(Icon::Warning));
    }

    #[test]
    fn test_unknown_bits_are_retained() {
        let options = DialogOptions::from_bits_retain(0x0004_0000) | Buttons::YesNo;
        assert_eq!(options.bits(), 0x0004_0004);
    }
}
