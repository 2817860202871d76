use color_eyre::eyre::eyre;
use std::{cell::RefCell, rc::Rc};

use crate::domain::{Notifier, NotifierError};

/// Keeps every delivered message so tests can inspect them after handing a
/// clone to a roster. Clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    messages: Rc<RefCell<Vec<String>>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier that rejects every message.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) -> Result<(), NotifierError> {
        if self.fail {
            return Err(NotifierError::UnexpectedError(eyre!(
                "Notifier rejected message: {message}"
            )));
        }

        self.messages.borrow_mut().push(message.to_owned());
        Ok(())
    }
}
