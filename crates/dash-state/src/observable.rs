//! Synchronous publish/subscribe value holder.
//!
//! Observers run on the thread performing the write, in subscription
//! order, before the write returns. There is no batching: every call to
//! [`Observable::set`] or [`Observable::update`] is one notification round.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Listener<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct Listeners<T> {
    next_id: u64,
    entries: Vec<(u64, Listener<T>)>,
}

trait Detach {
    fn detach(&self, id: u64) -> bool;
}

impl<T> Detach for RefCell<Listeners<T>> {
    fn detach(&self, id: u64) -> bool {
        let mut listeners = self.borrow_mut();
        let before = listeners.entries.len();
        listeners.entries.retain(|(entry_id, _)| *entry_id != id);
        listeners.entries.len() != before
    }
}

/// Handle returned by `subscribe`.
///
/// Dropping the handle leaves the observer attached; call
/// [`Subscription::unsubscribe`] to detach it.
pub struct Subscription {
    id: u64,
    listeners: Weak<dyn Detach>,
}

impl Subscription {
    /// Detach the observer. Returns `false` if it was already detached or
    /// the container is gone.
    pub fn unsubscribe(self) -> bool {
        self.listeners
            .upgrade()
            .is_some_and(|listeners| listeners.detach(self.id))
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

/// A value plus the observers watching it.
pub struct Observable<T> {
    value: T,
    listeners: Rc<RefCell<Listeners<T>>>,
}

impl<T: 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            listeners: Rc::new(RefCell::new(Listeners {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Register an observer. It is called once immediately with the current
    /// value, then after every write.
    pub fn subscribe(&self, observer: impl FnMut(&T) + 'static) -> Subscription {
        let listener: Listener<T> = Rc::new(RefCell::new(observer));
        (&mut *listener.borrow_mut())(&self.value);

        let id = {
            let mut listeners = self.listeners.borrow_mut();
            let id = listeners.next_id;
            listeners.next_id += 1;
            listeners.entries.push((id, listener));
            id
        };

        let listeners: Rc<dyn Detach> = self.listeners.clone();
        Subscription {
            id,
            listeners: Rc::downgrade(&listeners),
        }
    }

    /// Replace the value and notify.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.notify();
    }

    /// Modify the value in place and notify.
    pub fn update(&mut self, f: impl FnOnce(&mut T)) {
        f(&mut self.value);
        self.notify();
    }

    /// Number of attached observers.
    pub fn subscriber_count(&self) -> usize {
        self.listeners.borrow().entries.len()
    }

    fn notify(&self) {
        // Clone the list first so observers may unsubscribe while running.
        let current: Vec<Listener<T>> = self
            .listeners
            .borrow()
            .entries
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in current {
            (&mut *listener.borrow_mut())(&self.value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscriber_sees_current_value_immediately() {
        let observable = Observable::new(7);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _sub = observable.subscribe(move |v| sink.borrow_mut().push(*v));
        assert_eq!(*seen.borrow(), vec![7]);
    }

    #[test]
    fn notifies_in_subscription_order() {
        let mut observable = Observable::new(0);
        let log = Rc::new(RefCell::new(Vec::new()));
        for name in ["a", "b", "c"] {
            let log = Rc::clone(&log);
            let _ = observable.subscribe(move |v: &i32| log.borrow_mut().push(format!("{name}{v}")));
        }
        log.borrow_mut().clear();

        observable.set(1);
        observable.update(|v| *v += 1);

        assert_eq!(*log.borrow(), vec!["a1", "b1", "c1", "a2", "b2", "c2"]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut observable = Observable::new(0);
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let sub = observable.subscribe(move |_| *counter.borrow_mut() += 1);

        observable.set(1);
        assert!(sub.unsubscribe());
        observable.set(2);

        assert_eq!(*calls.borrow(), 2);
        assert_eq!(observable.subscriber_count(), 0);
    }

    #[test]
    fn unsubscribe_after_container_dropped() {
        let observable = Observable::new(0);
        let sub = observable.subscribe(|_| {});
        drop(observable);
        assert!(!sub.unsubscribe());
    }
}
