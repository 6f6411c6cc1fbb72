//! Named convenience dialogs on top of [`msg_box`].

use super::kind::DialogKind;
use super::presenter::{msg_box, Presenter};
use crate::model::{DialogOptions, Outcome, Owner, Titles};

/// Convenience dialogs bound to a presenter and a set of default titles.
///
/// Every method blocks until the user dismisses the box. `title: None`
/// selects the default title for that dialog.
///
/// ```ignore
/// use win32_msgbox::{Dialogs, Outcome, Owner};
///
/// let dialogs = Dialogs::native();
/// if dialogs.show_yes_no(Owner::Unowned, "Exit program?", None) == Outcome::Yes {
///     std::process::exit(0);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Dialogs<P> {
    presenter: P,
    titles: Titles,
}

#[cfg(target_os = "windows")]
impl Dialogs<crate::platform::windows::NativePresenter> {
    /// Dialogs shown through `MessageBoxExW` with the default titles.
    pub fn native() -> Self {
        Self::new(crate::platform::windows::NativePresenter)
    }
}

impl<P: Presenter> Dialogs<P> {
    pub fn new(presenter: P) -> Self {
        Self::with_titles(presenter, Titles::default())
    }

    pub fn with_titles(presenter: P, titles: Titles) -> Self {
        Self { presenter, titles }
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn titles(&self) -> &Titles {
        &self.titles
    }

    /// Generic entry point: arbitrary options, explicit title.
    pub fn msg_box(
        &self,
        owner: impl Into<Owner>,
        message: &str,
        title: &str,
        options: impl Into<DialogOptions>,
    ) -> Outcome {
        msg_box(&self.presenter, owner.into(), message, title, options.into())
    }

    /// Show one of the convenience variants.
    pub fn show(
        &self,
        kind: DialogKind,
        owner: impl Into<Owner>,
        message: &str,
        title: Option<&str>,
    ) -> Outcome {
        let title = title.unwrap_or_else(|| kind.default_title(&self.titles));
        msg_box(&self.presenter, owner.into(), message, title, kind.options())
    }

    /// Error message with an OK button and a stop-sign icon.
    pub fn show_error(&self, owner: impl Into<Owner>, message: &str, title: Option<&str>) {
        self.show(DialogKind::Error, owner, message, title);
    }

    /// Warning message with an OK button and an exclamation icon.
    pub fn show_warning(&self, owner: impl Into<Owner>, message: &str, title: Option<&str>) {
        self.show(DialogKind::Warning, owner, message, title);
    }

    pub fn show_info(&self, owner: impl Into<Owner>, message: &str, title: Option<&str>) {
        self.show(DialogKind::Info, owner, message, title);
    }

    /// Yes/No question, "No" focused.
    pub fn show_yes_no(
        &self,
        owner: impl Into<Owner>,
        message: &str,
        title: Option<&str>,
    ) -> Outcome {
        self.show(DialogKind::YesNo, owner, message, title)
    }

    /// Yes/No/Cancel question, "No" focused.
    pub fn show_yes_no_cancel(
        &self,
        owner: impl Into<Owner>,
        message: &str,
        title: Option<&str>,
    ) -> Outcome {
        self.show(DialogKind::YesNoCancel, owner, message, title)
    }

    pub fn show_retry_cancel(
        &self,
        owner: impl Into<Owner>,
        message: &str,
        title: Option<&str>,
    ) -> Outcome {
        self.show(DialogKind::RetryCancel, owner, message, title)
    }

    /// Cancel/Try Again/Continue, "Try Again" focused.
    pub fn show_cancel_retry_continue(
        &self,
        owner: impl Into<Owner>,
        message: &str,
        title: Option<&str>,
    ) -> Outcome {
        self.show(DialogKind::CancelRetryContinue, owner, message, title)
    }

    /// Abort/Retry/Ignore with an exclamation icon, "Retry" focused.
    pub fn show_abort_retry_ignore(
        &self,
        owner: impl Into<Owner>,
        message: &str,
        title: Option<&str>,
    ) -> Outcome {
        self.show(DialogKind::AbortRetryIgnore, owner, message, title)
    }
}
