//! Bridge from async cells to `std::future::Future`.

use futures::channel::oneshot;

use super::{AsyncCell, CellError};

impl<A> AsyncCell<A>
where
    A: Clone + Send + 'static,
{
    /// Waits for the cell's value without blocking the executor.
    ///
    /// The waiter is registered like any other observer, so it follows the
    /// cell's [`LateObservers`](super::LateObservers) policy.
    ///
    /// # Errors
    ///
    /// - [`CellError::Cancelled`] if the cell is cancelled before delivery.
    /// - [`CellError::Abandoned`] if the waiter is dropped for any other
    ///   reason, e.g. the cell was already fulfilled under
    ///   [`LateObservers::Ignore`](super::LateObservers::Ignore).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zipwise::control::AsyncCell;
    ///
    /// # futures::executor::block_on(async {
    /// let left = AsyncCell::new();
    /// let right = AsyncCell::new();
    /// let sum = left.zip2_with(&right, |a: i32, b: i32| a + b);
    ///
    /// left.fulfill(2).unwrap();
    /// right.fulfill(3).unwrap();
    /// assert_eq!(sum.wait().await, Ok(5));
    /// # });
    /// ```
    pub async fn wait(&self) -> Result<A, CellError> {
        let (sender, receiver) = oneshot::channel();
        self.observe(move |value| {
            // The receiver may have been dropped by a cancelled wait.
            let _ = sender.send(value);
        });
        match receiver.await {
            Ok(value) => Ok(value),
            Err(oneshot::Canceled) if self.is_cancelled() => Err(CellError::Cancelled),
            Err(oneshot::Canceled) => Err(CellError::Abandoned),
        }
    }
}
