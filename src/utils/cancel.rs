use std::cell::Cell;
use std::rc::Rc;

/// Cancellation token shared between an in-flight request and the effect
/// cleanup that supersedes it.
///
/// Cancelling does not tear down the underlying fetch; it marks the request
/// as superseded so its eventual result is dropped instead of applied.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the request as superseded.
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    /// True once `cancel` was called on any clone of this token.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}
