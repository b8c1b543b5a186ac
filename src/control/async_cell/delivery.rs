//! Per-thread delivery queue for observer calls.
//!
//! A delivery can trigger further deliveries: a `zip2` observer fulfils the
//! combined cell, whose `fmap` observer fulfils the next cell, and so on.
//! Calling those observers directly would nest one set of stack frames per
//! link of the chain. Instead every observer call is queued as a task on the
//! delivering thread. The outermost delivery drains the queue in a loop; a
//! delivery made while draining only enqueues and returns.
//!
//! Tasks run in FIFO order, and all of them have run by the time the
//! outermost `fulfill` (or replaying `observe`) returns.

use std::cell::RefCell;
use std::collections::VecDeque;

pub(super) type Task = Box<dyn FnOnce()>;

struct DeliveryQueue {
    draining: bool,
    tasks: VecDeque<Task>,
}

thread_local! {
    static QUEUE: RefCell<DeliveryQueue> = const {
        RefCell::new(DeliveryQueue {
            draining: false,
            tasks: VecDeque::new(),
        })
    };
}

/// Resets the queue if a task panics, so the thread can deliver again.
struct DrainGuard;

impl Drop for DrainGuard {
    fn drop(&mut self) {
        let abandoned = QUEUE.with_borrow_mut(|queue| {
            queue.draining = false;
            std::mem::take(&mut queue.tasks)
        });
        if !abandoned.is_empty() {
            tracing::debug!(tasks = abandoned.len(), "dropped queued deliveries after a panicking observer");
        }
    }
}

/// Enqueues `tasks` and, unless this thread is already draining, runs every
/// queued task before returning.
pub(super) fn schedule<I>(tasks: I)
where
    I: IntoIterator<Item = Task>,
{
    let drain_here = QUEUE.with_borrow_mut(|queue| {
        queue.tasks.extend(tasks);
        !std::mem::replace(&mut queue.draining, true)
    });
    if !drain_here {
        return;
    }

    let guard = DrainGuard;
    while let Some(task) = QUEUE.with_borrow_mut(|queue| queue.tasks.pop_front()) {
        task();
    }
    drop(guard);
}
