//! Pairing latch for zipping two async cells.
//!
//! A latch tracks which of the two sources of a `zip2` has delivered:
//!
//! ```text
//! WaitingBoth --first arrival--> WaitingOne(side, value) --second arrival--> Paired
//! ```
//!
//! Both delivery paths go through the same mutex, so the check "has the other
//! side arrived" and the transition that follows are one atomic step. Whatever
//! the interleaving, exactly one arrival observes the other side's value and
//! builds the pair; the other only records its own.

use parking_lot::Mutex;

enum Side<A, B> {
    Left(A),
    Right(B),
}

enum Pairing<A, B> {
    WaitingBoth,
    WaitingOne(Side<A, B>),
    Paired,
}

/// Shared state between the two delivery paths of one `zip2`.
pub(super) struct PairingLatch<A, B> {
    state: Mutex<Pairing<A, B>>,
}

impl<A, B> PairingLatch<A, B> {
    pub(super) fn new() -> Self {
        Self {
            state: Mutex::new(Pairing::WaitingBoth),
        }
    }

    /// Records the left value; returns the pair if the right one was waiting.
    pub(super) fn arrive_left(&self, left: A) -> Option<(A, B)> {
        let mut state = self.state.lock();
        match std::mem::replace(&mut *state, Pairing::Paired) {
            Pairing::WaitingBoth => {
                *state = Pairing::WaitingOne(Side::Left(left));
                None
            }
            Pairing::WaitingOne(Side::Right(right)) => Some((left, right)),
            unchanged => {
                *state = unchanged;
                None
            }
        }
    }

    /// Records the right value; returns the pair if the left one was waiting.
    pub(super) fn arrive_right(&self, right: B) -> Option<(A, B)> {
        let mut state = self.state.lock();
        match std::mem::replace(&mut *state, Pairing::Paired) {
            Pairing::WaitingBoth => {
                *state = Pairing::WaitingOne(Side::Right(right));
                None
            }
            Pairing::WaitingOne(Side::Left(left)) => Some((left, right)),
            unchanged => {
                *state = unchanged;
                None
            }
        }
    }

    #[cfg(test)]
    fn is_paired(&self) -> bool {
        matches!(*self.state.lock(), Pairing::Paired)
    }
}
