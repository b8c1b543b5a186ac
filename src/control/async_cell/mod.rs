//! Single-shot, push-based asynchronous value container.
//!
//! An `AsyncCell<A>` starts *pending* and is *fulfilled* at most once. Every
//! observer registered before delivery is invoked exactly once, synchronously,
//! by the thread that delivers the value. Clones share the same cell, so one
//! clone can be handed to a producer while another is combined or observed.
//!
//! # Delivery order
//!
//! Observer calls go through a per-thread queue instead of nesting. When an
//! observer fulfils another cell, that cell's observers run after the current
//! observer returns, still on the same thread and still before the outermost
//! [`fulfill`](AsyncCell::fulfill) returns. Long chains of derived cells are
//! therefore delivered in constant stack depth.
//!
//! # Combination
//!
//! [`zip2`](AsyncCell::zip2) builds a cell that is fulfilled with `(a, b)`
//! once *both* sources are fulfilled, in whichever order they arrive and even
//! when they arrive concurrently from different threads. A single mutex per
//! combination guards the "has the other side arrived" check, so the pair is
//! built exactly once and never from a partial value.
//!
//! # Late observers
//!
//! What happens to an observer registered *after* delivery is chosen per
//! cell with [`LateObservers`]. The default, [`LateObservers::Replay`],
//! invokes it immediately with the stored value. [`LateObservers::Ignore`]
//! drops it without ever invoking it. Combinators always see their sources'
//! values regardless of the policy; it only governs [`observe`](AsyncCell::observe).
//!
//! # Cancellation
//!
//! [`cancel`](AsyncCell::cancel) moves a pending cell into a terminal
//! cancelled state. Pending observers are dropped without being invoked, and
//! later deliveries are refused with [`CellError::Cancelled`]. Cells derived
//! from a cancelled cell stay pending forever.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use zipwise::control::AsyncCell;
//!
//! let count: AsyncCell<usize> = AsyncCell::new();
//! let message: AsyncCell<String> = AsyncCell::new();
//!
//! let received = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&received);
//! count
//!     .zip2_with(&message, |count, message| message.repeat(count))
//!     .observe(move |value| sink.lock().unwrap().push(value));
//!
//! message.fulfill("ab".to_string()).unwrap();
//! assert!(received.lock().unwrap().is_empty());
//!
//! count.fulfill(3).unwrap();
//! assert_eq!(*received.lock().unwrap(), vec!["ababab".to_string()]);
//! ```

mod delivery;
mod error;
#[cfg(feature = "async")]
mod future;
mod gather;
mod pairing;

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::typeclass::unpack3;

pub use error::CellError;

use delivery::Task;
use gather::GatherLatch;
use pairing::PairingLatch;

type Observer<A> = Box<dyn FnOnce(A) + Send>;

/// What happens to observers registered after a cell has been fulfilled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LateObservers {
    /// Invoke the observer immediately with the stored value.
    #[default]
    Replay,
    /// Drop the observer without invoking it.
    Ignore,
}

enum CellState<A> {
    Pending(Vec<Observer<A>>),
    Fulfilled(A),
    Cancelled,
}

struct Shared<A> {
    state: Mutex<CellState<A>>,
    late_observers: LateObservers,
}

/// A single-shot asynchronous value with push-based delivery.
///
/// # Type Parameters
///
/// * `A` - The delivered value. It is cloned once per observer, so it must be
///   `Clone`; it crosses threads, so it must be `Send + 'static`.
pub struct AsyncCell<A> {
    shared: Arc<Shared<A>>,
}

impl<A> Clone for AsyncCell<A> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<A> AsyncCell<A>
where
    A: Clone + Send + 'static,
{
    /// Creates a pending cell that replays its value to late observers.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(LateObservers::default())
    }

    /// Creates a pending cell with the given late-observer policy.
    #[must_use]
    pub fn with_policy(late_observers: LateObservers) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(CellState::Pending(Vec::new())),
                late_observers,
            }),
        }
    }

    /// Creates a cell that is already fulfilled with `value`.
    ///
    /// The cell replays, so every observer receives `value`.
    #[must_use]
    pub fn fulfilled(value: A) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(CellState::Fulfilled(value)),
                late_observers: LateObservers::Replay,
            }),
        }
    }

    /// Creates a pending cell and hands a clone of it to `producer`.
    ///
    /// The producer is called immediately and typically arranges for
    /// [`fulfill`](Self::fulfill) to be called later, e.g. from a spawned
    /// thread or a timer callback.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::thread;
    /// use zipwise::control::AsyncCell;
    ///
    /// let answer = AsyncCell::from_producer(|cell| {
    ///     thread::spawn(move || cell.fulfill(42)).join().unwrap().unwrap();
    /// });
    /// assert_eq!(answer.peek(), Some(42));
    /// ```
    pub fn from_producer<P>(producer: P) -> Self
    where
        P: FnOnce(Self),
    {
        let cell = Self::new();
        producer(cell.clone());
        cell
    }

    /// Returns the late-observer policy of this cell.
    #[inline]
    pub fn late_observers(&self) -> LateObservers {
        self.shared.late_observers
    }

    /// Delivers `value` and invokes every pending observer with a clone of it.
    ///
    /// Observers run on the calling thread after the cell's lock has been
    /// released, so they may freely observe or fulfill other cells. If this
    /// call is made from inside an observer, the observers are queued behind
    /// the ones already waiting and run once the current observer returns.
    ///
    /// # Errors
    ///
    /// - [`CellError::AlreadyFulfilled`] if a value was delivered before; the
    ///   stored value is kept.
    /// - [`CellError::Cancelled`] if the cell was cancelled.
    pub fn fulfill(&self, value: A) -> Result<(), CellError> {
        let observers = {
            let mut state = self.shared.state.lock();
            let observers = match &mut *state {
                CellState::Pending(observers) => std::mem::take(observers),
                CellState::Fulfilled(_) => {
                    tracing::debug!("rejected delivery to an already fulfilled async cell");
                    return Err(CellError::AlreadyFulfilled);
                }
                CellState::Cancelled => {
                    tracing::debug!("rejected delivery to a cancelled async cell");
                    return Err(CellError::Cancelled);
                }
            };
            *state = CellState::Fulfilled(value.clone());
            observers
        };

        tracing::trace!(observers = observers.len(), "async cell fulfilled");
        delivery::schedule(delivery_tasks(observers, value));
        Ok(())
    }

    /// Registers an observer for the cell's value.
    ///
    /// A pending cell stores the observer until delivery. A fulfilled cell
    /// applies its [`LateObservers`] policy. A cancelled cell drops it.
    pub fn observe<F>(&self, observer: F)
    where
        F: FnOnce(A) + Send + 'static,
    {
        self.register(observer, self.shared.late_observers);
    }

    /// Cancels a pending cell, dropping its observers without invoking them.
    ///
    /// Returns `true` if this call moved the cell from pending to cancelled,
    /// `false` if it was already fulfilled or cancelled.
    pub fn cancel(&self) -> bool {
        let dropped = {
            let mut state = self.shared.state.lock();
            match &mut *state {
                CellState::Pending(observers) => {
                    let observers = std::mem::take(observers);
                    *state = CellState::Cancelled;
                    observers
                }
                CellState::Fulfilled(_) | CellState::Cancelled => return false,
            }
        };
        tracing::debug!(observers = dropped.len(), "async cell cancelled");
        drop(dropped);
        true
    }

    /// Returns a clone of the value if the cell has been fulfilled.
    pub fn peek(&self) -> Option<A> {
        match &*self.shared.state.lock() {
            CellState::Fulfilled(value) => Some(value.clone()),
            CellState::Pending(_) | CellState::Cancelled => None,
        }
    }

    /// Returns `true` if the cell holds a value.
    pub fn is_fulfilled(&self) -> bool {
        matches!(*self.shared.state.lock(), CellState::Fulfilled(_))
    }

    /// Returns `true` if the cell was cancelled.
    pub fn is_cancelled(&self) -> bool {
        matches!(*self.shared.state.lock(), CellState::Cancelled)
    }

    fn register<F>(&self, observer: F, late_observers: LateObservers)
    where
        F: FnOnce(A) + Send + 'static,
    {
        let value = {
            let mut state = self.shared.state.lock();
            match &mut *state {
                CellState::Pending(observers) => {
                    observers.push(Box::new(observer));
                    return;
                }
                CellState::Fulfilled(value) => match late_observers {
                    LateObservers::Replay => value.clone(),
                    LateObservers::Ignore => {
                        tracing::trace!("ignored observer registered after delivery");
                        return;
                    }
                },
                CellState::Cancelled => {
                    tracing::trace!("dropped observer registered on a cancelled async cell");
                    return;
                }
            }
        };
        delivery::schedule([Box::new(move || observer(value)) as Task]);
    }

    /// Forwards this cell's value into `target`, always replaying.
    fn forward<B, F>(&self, target: &AsyncCell<B>, function: F)
    where
        B: Clone + Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        let target = target.clone();
        self.register(
            move |value| {
                if let Err(error) = target.fulfill(function(value)) {
                    tracing::trace!(%error, "derived async cell did not accept forwarded value");
                }
            },
            LateObservers::Replay,
        );
    }

    // =========================================================================
    // Functor
    // =========================================================================

    /// Returns a cell fulfilled with `function(value)` once this cell is.
    ///
    /// The new cell inherits this cell's late-observer policy.
    #[must_use]
    pub fn fmap<B, F>(&self, function: F) -> AsyncCell<B>
    where
        B: Clone + Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        let mapped = AsyncCell::with_policy(self.shared.late_observers);
        self.forward(&mapped, function);
        mapped
    }

    // =========================================================================
    // Zip
    // =========================================================================

    /// Returns a cell fulfilled with `(a, b)` once both cells are fulfilled.
    ///
    /// The combined cell is fulfilled exactly once, whichever source arrives
    /// first and even if both arrive concurrently. It inherits this cell's
    /// late-observer policy.
    #[must_use]
    pub fn zip2<B>(&self, other: &AsyncCell<B>) -> AsyncCell<(A, B)>
    where
        B: Clone + Send + 'static,
    {
        let combined = AsyncCell::with_policy(self.shared.late_observers);
        let latch = Arc::new(PairingLatch::new());

        let left_latch = Arc::clone(&latch);
        let left_target = combined.clone();
        self.register(
            move |left| {
                if let Some(pair) = left_latch.arrive_left(left) {
                    tracing::trace!("zipped async cell paired on left arrival");
                    deliver_combined(&left_target, pair);
                }
            },
            LateObservers::Replay,
        );

        let right_target = combined.clone();
        other.register(
            move |right| {
                if let Some(pair) = latch.arrive_right(right) {
                    tracing::trace!("zipped async cell paired on right arrival");
                    deliver_combined(&right_target, pair);
                }
            },
            LateObservers::Replay,
        );

        combined
    }

    /// Returns a cell fulfilled with `function(a, b)` once both cells are.
    #[must_use]
    pub fn zip2_with<B, C, F>(&self, other: &AsyncCell<B>, function: F) -> AsyncCell<C>
    where
        B: Clone + Send + 'static,
        C: Clone + Send + 'static,
        F: FnOnce(A, B) -> C + Send + 'static,
    {
        self.zip2(other).fmap(move |(a, b)| function(a, b))
    }

    /// Returns a cell fulfilled with `(a, b, c)` once all three are fulfilled.
    ///
    /// Built as `zip2(self, zip2(second, third))` and flattened.
    #[must_use]
    pub fn zip3<B, C>(&self, second: &AsyncCell<B>, third: &AsyncCell<C>) -> AsyncCell<(A, B, C)>
    where
        B: Clone + Send + 'static,
        C: Clone + Send + 'static,
    {
        self.zip2(&second.zip2(third)).fmap(unpack3)
    }

    /// Returns a cell fulfilled with `function(a, b, c)` once all three are.
    #[must_use]
    pub fn zip3_with<B, C, D, F>(
        &self,
        second: &AsyncCell<B>,
        third: &AsyncCell<C>,
        function: F,
    ) -> AsyncCell<D>
    where
        B: Clone + Send + 'static,
        C: Clone + Send + 'static,
        D: Clone + Send + 'static,
        F: FnOnce(A, B, C) -> D + Send + 'static,
    {
        self.zip3(second, third)
            .fmap(move |(a, b, c)| function(a, b, c))
    }

    // =========================================================================
    // Sequence
    // =========================================================================

    /// Returns a cell fulfilled with every value, in input order, once all
    /// cells are fulfilled.
    ///
    /// All inputs share one slot table, so the result is assembled once,
    /// when the last value arrives. It inherits the first cell's late-observer
    /// policy. An empty input yields a cell that is already fulfilled with `[]`.
    #[must_use]
    pub fn sequence(cells: Vec<Self>) -> AsyncCell<Vec<A>> {
        let Some(policy) = cells.first().map(Self::late_observers) else {
            return AsyncCell::fulfilled(Vec::new());
        };
        let gathered = AsyncCell::with_policy(policy);
        let latch = Arc::new(GatherLatch::new(cells.len()));

        for (index, cell) in cells.iter().enumerate() {
            let latch = Arc::clone(&latch);
            let target = gathered.clone();
            cell.register(
                move |value| {
                    if let Some(values) = latch.arrive(index, value) {
                        tracing::trace!(cells = values.len(), "sequenced async cell gathered every value");
                        deliver_combined(&target, values);
                    }
                },
                LateObservers::Replay,
            );
        }

        gathered
    }
}

fn delivery_tasks<A>(observers: Vec<Observer<A>>, value: A) -> Vec<Task>
where
    A: Clone + Send + 'static,
{
    let mut tasks: Vec<Task> = Vec::with_capacity(observers.len());
    let mut observers = observers.into_iter();
    let last = observers.next_back();
    for observer in observers {
        let value = value.clone();
        tasks.push(Box::new(move || observer(value)));
    }
    if let Some(observer) = last {
        tasks.push(Box::new(move || observer(value)));
    }
    tasks
}

fn deliver_combined<C>(target: &AsyncCell<C>, combined: C)
where
    C: Clone + Send + 'static,
{
    if let Err(error) = target.fulfill(combined) {
        tracing::debug!(%error, "combined async cell refused its value");
    }
}

impl<A> Default for AsyncCell<A>
where
    A: Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<A: fmt::Debug> fmt::Debug for AsyncCell<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = formatter.debug_struct("AsyncCell");
        match &*self.shared.state.lock() {
            CellState::Pending(observers) => debug
                .field("state", &"pending")
                .field("observers", &observers.len()),
            CellState::Fulfilled(value) => debug.field("state", &"fulfilled").field("value", value),
            CellState::Cancelled => debug.field("state", &"cancelled"),
        };
        debug
            .field("late_observers", &self.shared.late_observers)
            .finish()
    }
}

impl<A> fmt::Display for AsyncCell<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &*self.shared.state.lock() {
            CellState::Pending(_) => "pending",
            CellState::Fulfilled(_) => "fulfilled",
            CellState::Cancelled => "cancelled",
        };
        write!(formatter, "<AsyncCell: {state}>")
    }
}

static_assertions::assert_impl_all!(AsyncCell<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(AsyncCell<String>: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn recorder<A: Send + 'static>() -> (Arc<Mutex<Vec<A>>>, impl FnOnce(A) + Send + 'static) {
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&received);
        (received, move |value| sink.lock().push(value))
    }

    #[rstest]
    fn pending_observer_runs_on_delivery() {
        let cell: AsyncCell<i32> = AsyncCell::new();
        let (received, observer) = recorder::<i32>();
        cell.observe(observer);
        assert!(received.lock().is_empty());

        cell.fulfill(5).unwrap();
        assert_eq!(*received.lock(), vec![5]);
    }

    #[rstest]
    fn second_delivery_is_rejected_and_keeps_value() {
        let cell: AsyncCell<i32> = AsyncCell::new();
        cell.fulfill(1).unwrap();
        assert_eq!(cell.fulfill(2), Err(CellError::AlreadyFulfilled));
        assert_eq!(cell.peek(), Some(1));
    }

    #[rstest]
    fn late_observer_is_replayed_by_default() {
        let cell: AsyncCell<&str> = AsyncCell::new();
        cell.fulfill("done").unwrap();
        let (received, observer) = recorder::<&str>();
        cell.observe(observer);
        assert_eq!(*received.lock(), vec!["done"]);
    }

    #[rstest]
    fn late_observer_is_ignored_under_ignore_policy() {
        let cell: AsyncCell<&str> = AsyncCell::with_policy(LateObservers::Ignore);
        cell.fulfill("done").unwrap();
        let (received, observer) = recorder::<&str>();
        cell.observe(observer);
        assert!(received.lock().is_empty());
    }

    #[rstest]
    fn cancel_drops_pending_observers() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cell: AsyncCell<i32> = AsyncCell::new();
        let counter = Arc::clone(&calls);
        cell.observe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(cell.cancel());
        assert!(!cell.cancel());
        assert_eq!(cell.fulfill(1), Err(CellError::Cancelled));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(cell.is_cancelled());
    }

    #[rstest]
    fn cancel_after_fulfilment_is_a_no_op() {
        let cell: AsyncCell<i32> = AsyncCell::new();
        cell.fulfill(3).unwrap();
        assert!(!cell.cancel());
        assert_eq!(cell.peek(), Some(3));
    }

    #[rstest]
    fn fmap_transforms_delivered_value() {
        let cell: AsyncCell<i32> = AsyncCell::new();
        let mapped = cell.fmap(|value: i32| value.to_string());
        cell.fulfill(42).unwrap();
        assert_eq!(mapped.peek(), Some("42".to_string()));
    }

    #[rstest]
    fn zip2_waits_for_both_sides() {
        let left: AsyncCell<i32> = AsyncCell::new();
        let right: AsyncCell<char> = AsyncCell::new();
        let zipped = left.zip2(&right);

        left.fulfill(1).unwrap();
        assert!(!zipped.is_fulfilled());

        right.fulfill('a').unwrap();
        assert_eq!(zipped.peek(), Some((1, 'a')));
    }

    #[rstest]
    fn zip2_of_fulfilled_cells_under_ignore_still_pairs() {
        let left: AsyncCell<i32> = AsyncCell::with_policy(LateObservers::Ignore);
        let right: AsyncCell<i32> = AsyncCell::with_policy(LateObservers::Ignore);
        left.fulfill(1).unwrap();
        right.fulfill(2).unwrap();

        let zipped = left.zip2(&right);
        assert_eq!(zipped.peek(), Some((1, 2)));
        assert_eq!(zipped.late_observers(), LateObservers::Ignore);
    }

    #[rstest]
    fn sequence_of_nothing_is_fulfilled_empty() {
        let sequenced = AsyncCell::<i32>::sequence(Vec::new());
        assert_eq!(sequenced.peek(), Some(vec![]));
    }

    #[rstest]
    fn sequence_of_ten_thousand_cells_keeps_order() {
        let cells: Vec<AsyncCell<usize>> = (0..10_000).map(|_| AsyncCell::new()).collect();
        let sequenced = AsyncCell::sequence(cells.clone());
        for (index, cell) in cells.iter().enumerate() {
            cell.fulfill(index).unwrap();
        }
        assert_eq!(sequenced.peek(), Some((0..10_000).collect::<Vec<_>>()));
    }

    #[rstest]
    fn long_fmap_chain_delivers_without_nesting() {
        let root: AsyncCell<u64> = AsyncCell::new();
        let last = (0..20_000).fold(root.clone(), |cell, _| cell.fmap(|value| value + 1));
        root.fulfill(0).unwrap();
        assert_eq!(last.peek(), Some(20_000));
    }

    #[rstest]
    fn nested_fulfilment_runs_after_current_observer() {
        let outer: AsyncCell<i32> = AsyncCell::new();
        let inner: AsyncCell<i32> = AsyncCell::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        let inner_log = Arc::clone(&order);
        inner.observe(move |value| inner_log.lock().push(value));
        let outer_log = Arc::clone(&order);
        let inner_for_outer = inner.clone();
        outer.observe(move |value| {
            inner_for_outer.fulfill(value * 10).unwrap();
            outer_log.lock().push(value);
        });

        outer.fulfill(1).unwrap();
        assert_eq!(*order.lock(), vec![1, 10]);
    }

    #[rstest]
    fn display_shows_state() {
        let cell: AsyncCell<i32> = AsyncCell::new();
        assert_eq!(cell.to_string(), "<AsyncCell: pending>");
        cell.fulfill(1).unwrap();
        assert_eq!(cell.to_string(), "<AsyncCell: fulfilled>");
    }
}
