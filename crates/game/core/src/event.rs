//! Synchronous notification fan-out.
//!
//! Components raise typed events through a [`Listeners`] list. Callbacks run
//! inline, in subscription order, before the raising operation returns, so
//! observers see events in exactly the order the slot engine produced them.

use core::fmt;

/// Ordered list of event callbacks.
pub struct Listeners<E> {
    callbacks: Vec<Box<dyn FnMut(&E)>>,
}

impl<E> Listeners<E> {
    pub fn new() -> Self {
        Self {
            callbacks: Vec::new(),
        }
    }

    /// Registers a callback. Callbacks are never removed.
    pub fn subscribe(&mut self, callback: impl FnMut(&E) + 'static) {
        self.callbacks.push(Box::new(callback));
    }

    /// Delivers `event` to every callback.
    pub fn emit(&mut self, event: E) {
        for callback in &mut self.callbacks {
            callback(&event);
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl<E> Default for Listeners<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Listeners<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn callbacks_run_in_subscription_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = Listeners::new();

        let first = Rc::clone(&seen);
        listeners.subscribe(move |e: &u32| first.borrow_mut().push(("first", *e)));
        let second = Rc::clone(&seen);
        listeners.subscribe(move |e: &u32| second.borrow_mut().push(("second", *e)));

        listeners.emit(7);

        assert_eq!(*seen.borrow(), vec![("first", 7), ("second", 7)]);
        assert_eq!(listeners.len(), 2);
    }
}
