//! The eight convenience dialogs and their fixed option bits.

use crate::model::{Buttons, DefaultButton, DialogOptions, Icon, Titles};

/// A convenience dialog variant.
///
/// The first three are announcements with a single OK button; their outcome
/// carries no information. The rest are decisions the caller branches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogKind {
    Error,
    Warning,
    Info,
    YesNo,
    YesNoCancel,
    RetryCancel,
    CancelRetryContinue,
    AbortRetryIgnore,
}

impl DialogKind {
    pub const ALL: [DialogKind; 8] = [
        DialogKind::Error,
        DialogKind::Warning,
        DialogKind::Info,
        DialogKind::YesNo,
        DialogKind::YesNoCancel,
        DialogKind::RetryCancel,
        DialogKind::CancelRetryContinue,
        DialogKind::AbortRetryIgnore,
    ];

    /// Button set, icon and default button shown by this variant.
    pub fn options(self) -> DialogOptions {
        match self {
            DialogKind::Error => Buttons::Ok | Icon::Error | DefaultButton::First,
            DialogKind::Warning => Buttons::Ok | Icon::Warning | DefaultButton::First,
            DialogKind::Info => Buttons::Ok | Icon::Information | DefaultButton::First,
            DialogKind::YesNo => Buttons::YesNo | Icon::Question | DefaultButton::Second,
            DialogKind::YesNoCancel => {
                Buttons::YesNoCancel | Icon::Question | DefaultButton::Second
            }
            DialogKind::RetryCancel => Buttons::RetryCancel | DefaultButton::First,
            DialogKind::CancelRetryContinue => {
                Buttons::CancelTryContinue | DefaultButton::Second
            }
            DialogKind::AbortRetryIgnore => {
                Buttons::AbortRetryIgnore | Icon::EXCLAMATION | DefaultButton::Second
            }
        }
    }

    pub fn default_title(self, titles: &Titles) -> &str {
        match self {
            DialogKind::Error => &titles.error,
            DialogKind::Warning => &titles.warning,
            DialogKind::Info => &titles.info,
            DialogKind::YesNo => &titles.yes_no,
            DialogKind::YesNoCancel => &titles.yes_no_cancel,
            DialogKind::RetryCancel => &titles.retry_cancel,
            DialogKind::CancelRetryContinue => &titles.cancel_retry_continue,
            DialogKind::AbortRetryIgnore => &titles.abort_retry_ignore,
        }
    }

    /// Returns true if the caller gets to branch on the outcome.
    pub fn returns_outcome(self) -> bool {
        !matches!(
            self,
            DialogKind::Error | DialogKind::Warning | DialogKind::Info
        )
    }

    /// Short human-readable label, used for demo buttons and logs.
    pub fn label(self) -> &'static str {
        match self {
            DialogKind::Error => "Error",
            DialogKind::Warning => "Warning",
            DialogKind::Info => "Info",
            DialogKind::YesNo => "Yes/No",
            DialogKind::YesNoCancel => "Yes/No/Cancel",
            DialogKind::RetryCancel => "Retry/Cancel",
            DialogKind::CancelRetryContinue => "Cancel/Try/Continue",
            DialogKind::AbortRetryIgnore => "Abort/Retry/Ignore",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_bits_per_kind() {
        let bits: Vec<u32> = DialogKind::ALL.iter().map(|k| k.options().bits()).collect();
        assert_eq!(
            bits,
            vec![0x010, 0x030, 0x040, 0x124, 0x123, 0x005, 0x106, 0x132]
        );
    }

    #[test]
    fn test_announcements_discard_outcome() {
        let returning: Vec<DialogKind> = DialogKind::ALL
            .into_iter()
            .filter(|k| k.returns_outcome())
            .collect();
        assert_eq!(returning.len(), 5);
        assert!(!DialogKind::Error.returns_outcome());
        assert!(DialogKind::AbortRetryIgnore.returns_outcome());
    }

    #[test]
    fn test_default_titles() {
        let titles = Titles::default();
        assert_eq!(DialogKind::Error.default_title(&titles), "Error");
        assert_eq!(DialogKind::Info.default_title(&titles), "Information");
        assert_eq!(DialogKind::YesNoCancel.default_title(&titles), "Question");
        assert_eq!(DialogKind::CancelRetryContinue.default_title(&titles), "Retry?");
    }
}
