//! The native dialog seam and the generic entry point.

use log::debug;

use crate::model::{DialogOptions, Modality, Outcome, Owner, OwnerHandle};

/// Presents a native modal message box and blocks until it is dismissed.
///
/// Returns the raw integer code of the button that closed the box, exactly
/// as the OS reports it.
pub trait Presenter {
    fn present(
        &self,
        owner: Option<OwnerHandle>,
        message: &str,
        title: &str,
        options: DialogOptions,
    ) -> i32;
}

impl<P: Presenter + ?Sized> Presenter for &P {
    fn present(
        &self,
        owner: Option<OwnerHandle>,
        message: &str,
        title: &str,
        options: DialogOptions,
    ) -> i32 {
        (**self).present(owner, message, title, options)
    }
}

impl<P: Presenter + ?Sized> Presenter for Box<P> {
    fn present(
        &self,
        owner: Option<OwnerHandle>,
        message: &str,
        title: &str,
        options: DialogOptions,
    ) -> i32 {
        (**self).present(owner, message, title, options)
    }
}

/// Show a message box with arbitrary options.
///
/// An owned box is created as a child of its owner with `options` unchanged.
/// An unowned box gets [`Modality::Task`] added so it still blocks the
/// calling thread's windows. Message and title are passed through verbatim.
pub fn msg_box<P: Presenter + ?Sized>(
    presenter: &P,
    owner: Owner,
    message: &str,
    title: &str,
    options: DialogOptions,
) -> Outcome {
    let code = match owner {
        Owner::Window(handle) => {
            debug!(
                "message box {:?} owned by {:#x}, options {:#06x}",
                title,
                handle.get(),
                options.bits()
            );
            presenter.present(Some(handle), message, title, options)
        }
        Owner::Unowned => {
            let options = options | Modality::Task;
            debug!(
                "message box {:?} unowned, options {:#06x}",
                title,
                options.bits()
            );
            presenter.present(None, message, title, options)
        }
    };

    let outcome = Outcome::from_code(code);
    debug!("message box {:?} closed with {:?}", title, outcome);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Buttons, Icon};
    use std::cell::RefCell;

    struct Recorder {
        reply: i32,
        calls: RefCell<Vec<(Option<OwnerHandle>, DialogOptions)>>,
    }

    impl Recorder {
        fn replying(reply: i32) -> Self {
            Self {
                reply,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl Presenter for Recorder {
        fn present(
            &self,
            owner: Option<OwnerHandle>,
            _message: &str,
            _title: &str,
            options: DialogOptions,
        ) -> i32 {
            self.calls.borrow_mut().push((owner, options));
            self.reply
        }
    }

    #[test]
    fn test_owned_box_keeps_options() {
        let recorder = Recorder::replying(1);
        let handle = OwnerHandle::new(0x10).expect("non-null");
        let options = Buttons::OkCancel | Icon::Information;

        let outcome = msg_box(&recorder, Owner::Window(handle), "m", "t", options);

        assert_eq!(outcome, Outcome::Ok);
        assert_eq!(*recorder.calls.borrow(), vec![(Some(handle), options)]);
    }

    #[test]
    fn test_unowned_box_is_task_modal() {
        let recorder = Recorder::replying(2);

        let outcome = msg_box(&recorder, Owner::Unowned, "m", "t", Buttons::OkCancel.into());

        assert_eq!(outcome, Outcome::Cancel);
        let calls = recorder.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, None);
        assert_eq!(calls[0].1.bits(), 0x2001);
    }

    #[test]
    fn test_presenter_through_box_and_reference() {
        let boxed: Box<dyn Presenter> = Box::new(Recorder::replying(7));
        assert_eq!(msg_box(&boxed, Owner::Unowned, "m", "t", DialogOptions::empty()), Outcome::No);
        assert_eq!(msg_box(&&boxed, Owner::Unowned, "m", "t", DialogOptions::empty()), Outcome::No);
    }
}
