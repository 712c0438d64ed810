//! Three-phase lifecycle of one asynchronous operation.

/// Idle → Loading → Ready | Failed.
///
/// `Loading` is entered when an operation is dispatched and left when it
/// resolves. Entering `Loading` clears any previous failure.
#[derive(Debug, Clone, PartialEq)]
pub enum AsyncResult<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Default for AsyncResult<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> AsyncResult<T> {
    /// Enter the pending phase.
    pub fn start(&mut self) {
        *self = Self::Loading;
    }

    /// Leave the pending phase with the operation's outcome.
    pub fn resolve(&mut self, outcome: Result<T, String>) {
        *self = match outcome {
            Ok(value) => Self::Ready(value),
            Err(message) => Self::Failed(message),
        };
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Failure message of the last resolution, if it failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
