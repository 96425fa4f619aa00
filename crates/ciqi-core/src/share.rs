//! Shared-snapshot source
//!
//! A shared timeline arrives as the `data=` query parameter of a share
//! link. Rather than reaching into ambient state, the store reads the
//! pending payload through an injected [`ShareSource`] and clears it after
//! a reset, which keeps initialization deterministic and testable.

use std::cell::RefCell;
use std::rc::Rc;

/// A clearable source of one pending shared-snapshot payload
pub trait ShareSource {
    /// The pending payload, if any
    fn read(&self) -> Option<String>;

    /// Drop the pending payload so a later initialization does not re-adopt it
    fn clear(&self);
}

/// A source with no pending snapshot
pub struct NoShare;

impl ShareSource for NoShare {
    fn read(&self) -> Option<String> {
        None
    }

    fn clear(&self) {}
}

/// A one-shot in-process holder for a pasted share payload
pub struct PendingShare {
    payload: RefCell<Option<String>>,
}

impl PendingShare {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: RefCell::new(Some(payload.into())),
        }
    }

    /// A holder with nothing pending
    pub fn empty() -> Self {
        Self {
            payload: RefCell::new(None),
        }
    }
}

impl ShareSource for PendingShare {
    fn read(&self) -> Option<String> {
        self.payload.borrow().clone()
    }

    fn clear(&self) {
        self.payload.borrow_mut().take();
    }
}

impl<S: ShareSource> ShareSource for Rc<S> {
    fn read(&self) -> Option<String> {
        (**self).read()
    }

    fn clear(&self) {
        (**self).clear()
    }
}
