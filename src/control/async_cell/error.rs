//! Error type for async cell delivery.

use thiserror::Error;

/// Why a value could not be delivered to, or received from, an [`AsyncCell`].
///
/// [`AsyncCell`]: super::AsyncCell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum CellError {
    /// The cell already holds a value; the new one was discarded.
    #[error("async cell already fulfilled")]
    AlreadyFulfilled,
    /// The cell was cancelled and will never hold a value.
    #[error("async cell cancelled")]
    Cancelled,
    /// The cell will never deliver to this waiter, e.g. because it was
    /// already fulfilled under [`LateObservers::Ignore`].
    ///
    /// [`LateObservers::Ignore`]: super::LateObservers::Ignore
    #[error("async cell will never deliver to this observer")]
    Abandoned,
}
