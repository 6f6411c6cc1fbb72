//! Which button closed the message box.

use std::fmt;

use thiserror::Error;

use super::constants::*;

/// The button the user activated, as reported by the native message box.
///
/// Named members carry the integer code defined by the OS. A code without a
/// named member is kept as [`Outcome::Unrecognized`] so the raw value is
/// never lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The box could not be created.
    None,
    Ok,
    Cancel,
    Abort,
    Retry,
    Ignore,
    Yes,
    No,
    TryAgain,
    Continue,
    /// A code with no named member, passed through unchanged.
    Unrecognized(i32),
}

/// Strict conversion failure for [`Outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OutcomeError {
    #[error("unrecognized message box result code {0}")]
    UnrecognizedCode(i32),
}

impl Outcome {
    /// Every named member, in code order.
    pub const NAMED: [Outcome; 10] = [
        Outcome::None,
        Outcome::Ok,
        Outcome::Cancel,
        Outcome::Abort,
        Outcome::Retry,
        Outcome::Ignore,
        Outcome::Yes,
        Outcome::No,
        Outcome::TryAgain,
        Outcome::Continue,
    ];

    /// Map a raw result code. Never fails: unknown codes become
    /// [`Outcome::Unrecognized`].
    pub fn from_code(code: i32) -> Self {
        match Self::named(code) {
            Some(outcome) => outcome,
            None => {
                log::warn!("message box returned unrecognized result code {}", code);
                Outcome::Unrecognized(code)
            }
        }
    }

    /// The OS integer for this outcome.
    pub fn code(self) -> i32 {
        match self {
            Outcome::None => ID_NONE,
            Outcome::Ok => IDOK,
            Outcome::Cancel => IDCANCEL,
            Outcome::Abort => IDABORT,
            Outcome::Retry => IDRETRY,
            Outcome::Ignore => IDIGNORE,
            Outcome::Yes => IDYES,
            Outcome::No => IDNO,
            Outcome::TryAgain => IDTRYAGAIN,
            Outcome::Continue => IDCONTINUE,
            Outcome::Unrecognized(code) => code,
        }
    }

    /// Returns true unless this is [`Outcome::Unrecognized`].
    pub fn is_named(self) -> bool {
        !matches!(self, Outcome::Unrecognized(_))
    }

    fn named(code: i32) -> Option<Self> {
        let outcome = match code {
            ID_NONE => Outcome::None,
            IDOK => Outcome::Ok,
            IDCANCEL => Outcome::Cancel,
            IDABORT => Outcome::Abort,
            IDRETRY => Outcome::Retry,
            IDIGNORE => Outcome::Ignore,
            IDYES => Outcome::Yes,
            IDNO => Outcome::No,
            IDTRYAGAIN => Outcome::TryAgain,
            IDCONTINUE => Outcome::Continue,
            _ => return None,
        };
        Some(outcome)
    }
}

impl TryFrom<i32> for Outcome {
    type Error = OutcomeError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::named(code).ok_or(OutcomeError::UnrecognizedCode(code))
    }
}

impl From<Outcome> for i32 {
    fn from(outcome: Outcome) -> Self {
        outcome.code()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::None => f.write_str("None"),
            Outcome::Ok => f.write_str("OK"),
            Outcome::Cancel => f.write_str("Cancel"),
            Outcome::Abort => f.write_str("Abort"),
            Outcome::Retry => f.write_str("Retry"),
            Outcome::Ignore => f.write_str("Ignore"),
            Outcome::Yes => f.write_str("Yes"),
            Outcome::No => f.write_str("No"),
            Outcome::TryAgain => f.write_str("Try Again"),
            Outcome::Continue => f.write_str("Continue"),
            Outcome::Unrecognized(code) => write!(f, "Unrecognized ({})", code),
        }
    }
}
