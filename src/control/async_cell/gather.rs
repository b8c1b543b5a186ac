//! Gathering latch for sequencing many async cells.
//!
//! One latch holds a slot per input cell and a count of empty slots, all
//! under a single mutex. Each arrival fills its slot; the arrival that
//! empties the count takes every value out, in slot order. Exactly one
//! arrival ever sees the count reach zero.

use parking_lot::Mutex;

struct Slots<A> {
    values: Vec<Option<A>>,
    remaining: usize,
}

/// Shared state between the delivery paths of one `sequence`.
pub(super) struct GatherLatch<A> {
    slots: Mutex<Slots<A>>,
}

impl<A> GatherLatch<A> {
    pub(super) fn new(len: usize) -> Self {
        Self {
            slots: Mutex::new(Slots {
                values: std::iter::repeat_with(|| None).take(len).collect(),
                remaining: len,
            }),
        }
    }

    /// Records the value for `index`; returns every value once all arrived.
    pub(super) fn arrive(&self, index: usize, value: A) -> Option<Vec<A>> {
        let mut slots = self.slots.lock();
        let Some(slot) = slots.values.get_mut(index) else {
            return None;
        };
        if slot.is_some() {
            return None;
        }
        *slot = Some(value);
        slots.remaining -= 1;
        if slots.remaining > 0 {
            return None;
        }
        std::mem::take(&mut slots.values)
            .into_iter()
            .collect::<Option<Vec<A>>>()
    }
}
