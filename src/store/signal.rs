//! Observable state cell.

use tokio::sync::watch;

/// Owned state with change notification.
///
/// Views keep their state in signals and whoever renders them subscribes to
/// the receivers. Every write wakes all subscribers, writes never block and
/// succeed even when nobody is subscribed.
#[derive(Debug)]
pub struct Signal<T> {
    /// Holds the value and the subscriber list.
    tx: watch::Sender<T>,
}

impl<T> Signal<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self { tx: watch::Sender::new(value) }
    }

    /// Runs `f` against the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.tx.borrow())
    }

    /// Replaces the value and returns the previous one.
    pub fn set(&self, value: T) -> T {
        self.tx.send_replace(value)
    }

    /// Mutates the value in place and notifies subscribers.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.tx.send_modify(f);
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl<T: Clone> Signal<T> {
    #[must_use]
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }
}

impl<T: PartialEq> Signal<T> {
    /// Writes `value` only when it differs from the current one.
    ///
    /// Returns whether subscribers were notified.
    pub fn set_if_changed(&self, value: T) -> bool {
        self.tx.send_if_modified(|current| {
            if *current == value {
                return false;
            }
            *current = value;
            true
        })
    }
}

impl<T: Default> Default for Signal<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    #[googletest::test]
    fn set_notifies_subscribers() {
        let signal = Signal::new(1);
        let mut rx = signal.subscribe();

        let previous = signal.set(2);

        expect_that!(previous, eq(1));
        expect_that!(rx.has_changed().unwrap(), eq(true));
        expect_that!(*rx.borrow_and_update(), eq(2));
        expect_that!(rx.has_changed().unwrap(), eq(false));
    }

    #[googletest::test]
    fn set_if_changed_skips_equal_values() {
        let signal = Signal::new("en_gb".to_string());
        let rx = signal.subscribe();

        expect_that!(signal.set_if_changed("en_gb".to_string()), eq(false));
        expect_that!(rx.has_changed().unwrap(), eq(false));
        expect_that!(signal.set_if_changed("fr_fr".to_string()), eq(true));
        expect_that!(rx.has_changed().unwrap(), eq(true));
    }

    #[googletest::test]
    fn update_mutates_in_place() {
        let signal = Signal::new(vec![1, 2]);

        signal.update(|v| v.push(3));

        expect_that!(signal.get(), elements_are![eq(&1), eq(&2), eq(&3)]);
        expect_that!(signal.with(Vec::len), eq(3));
    }

    #[googletest::test]
    fn writes_succeed_without_subscribers() {
        let signal = Signal::<u64>::default();

        signal.set(5);

        expect_that!(signal.subscriber_count(), eq(0));
        expect_that!(signal.get(), eq(5));
    }

    #[tokio::test]
    async fn subscriber_wakes_on_change() {
        let signal = Signal::new(0_u64);
        let mut rx = signal.subscribe();

        let waiter = tokio::spawn(async move {
            rx.changed().await.unwrap();
            *rx.borrow()
        });
        signal.set(42);

        assert_eq!(waiter.await.unwrap(), 42);
    }
}
