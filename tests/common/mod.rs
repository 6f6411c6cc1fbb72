//! Recording presenter shared by the integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use win32_msgbox::{DialogOptions, OwnerHandle, Presenter};

/// One call that reached the presenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presented {
    pub owner: Option<OwnerHandle>,
    pub message: String,
    pub title: String,
    pub options: DialogOptions,
}

/// Stands in for the native message box: records every call and answers
/// with a scripted result code.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    reply: Cell<i32>,
    calls: RefCell<Vec<Presented>>,
}

impl RecordingPresenter {
    /// Presenter that simulates the user pressing the button with `code`.
    pub fn replying(code: i32) -> Self {
        Self {
            reply: Cell::new(code),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn set_reply(&self, code: i32) {
        self.reply.set(code);
    }

    pub fn calls(&self) -> Vec<Presented> {
        self.calls.borrow().clone()
    }

    /// The only call made so far. Panics unless exactly one was made.
    pub fn single_call(&self) -> Presented {
        let calls = self.calls.borrow();
        assert_eq!(calls.len(), 1, "expected exactly one call, got {:?}", calls);
        calls[0].clone()
    }
}

impl Presenter for RecordingPresenter {
    fn present(
        &self,
        owner: Option<OwnerHandle>,
        message: &str,
        title: &str,
        options: DialogOptions,
    ) -> i32 {
        self.calls.borrow_mut().push(Presented {
            owner,
            message: message.to_string(),
            title: title.to_string(),
            options,
        });
        self.reply.get()
    }
}

pub fn handle(raw: isize) -> OwnerHandle {
    OwnerHandle::new(raw).expect("test handles are non-null")
}
