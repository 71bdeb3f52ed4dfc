use std::sync::{Arc, Condvar, Mutex, PoisonError};

struct Shared<T> {
    slot: Mutex<Option<T>>,
    ready: Condvar,
}

/// Sending half of a one-shot rendezvous.
///
/// Cloneable so it can move into a `'static` callback while the issuing code
/// keeps no reference of its own. The first signal wins; later signals are
/// ignored.
pub struct Signal<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T> Signal<T> {
    /// Stores the result and wakes the waiter.
    ///
    /// Returns `false` if a result was already stored, in which case `value`
    /// is dropped.
    pub fn signal(&self, value: T) -> bool {
        let mut slot = self
            .shared
            .slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if slot.is_some() {
            return false;
        }

        *slot = Some(value);
        self.shared.ready.notify_all();
        true
    }
}

/// Waiting half of a one-shot rendezvous.
///
/// Not cloneable: there is exactly one waiter, and it consumes the pair.
pub struct Wait<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Wait<T> {
    /// Blocks until a signal has been received, then returns the value.
    ///
    /// If the signal arrived before `wait` was called, this returns
    /// immediately. There is no timeout and no cancellation; a dropped
    /// [`Signal`] that never fired leaves the waiter blocked, so callers must
    /// ensure the callback signals on every status, failure included.
    pub fn wait(self) -> T {
        let mut slot = self
            .shared
            .slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        loop {
            if let Some(value) = slot.take() {
                return value;
            }
            slot = self
                .shared
                .ready
                .wait(slot)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }
}

/// Creates a connected signal/wait pair.
pub fn rendezvous<T>() -> (Signal<T>, Wait<T>) {
    let shared = Arc::new(Shared {
        slot: Mutex::new(None),
        ready: Condvar::new(),
    });

    (
        Signal {
            shared: Arc::clone(&shared),
        },
        Wait { shared },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn signal_before_wait_returns_immediately() {
        let (tx, rx) = rendezvous();
        assert!(tx.signal(7));
        assert_eq!(rx.wait(), 7);
    }

    #[test]
    fn wait_blocks_until_signaled_from_another_thread() {
        let (tx, rx) = rendezvous();

        let sender = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            tx.signal("done");
        });

        assert_eq!(rx.wait(), "done");
        sender.join().unwrap();
    }

    #[test]
    fn first_signal_wins() {
        let (tx, rx) = rendezvous();
        assert!(tx.signal(1));
        assert!(!tx.signal(2));
        assert_eq!(rx.wait(), 1);
    }

    #[test]
    fn racing_signals_deliver_exactly_one_value() {
        let (tx, rx) = rendezvous();

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let tx = tx.clone();
                thread::spawn(move || tx.signal(i))
            })
            .collect();

        let wins: usize = handles
            .into_iter()
            .map(|h| h.join().unwrap() as usize)
            .sum();

        assert_eq!(wins, 1);
        assert!(rx.wait() < 4);
    }
}
