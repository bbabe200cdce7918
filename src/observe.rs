//! Observable values with explicit subscriptions.
//!
//! UI state (active section, navbar visibility) is owned by the component
//! that computes it and read by whoever subscribes, instead of living in
//! ambient globals. Everything here is single-threaded; handlers run in
//! subscription order on the thread that calls [`Observable::set`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Handler<T> = Box<dyn FnMut(&T)>;

struct Entry<T> {
    id: usize,
    handler: Handler<T>,
}

struct Inner<T> {
    value: RefCell<T>,
    handlers: RefCell<Vec<Entry<T>>>,
    dead: RefCell<Vec<usize>>,
    next_id: Cell<usize>,
}

impl<T> Inner<T> {
    fn purge(&self) {
        let mut dead = self.dead.borrow_mut();
        if dead.is_empty() {
            return;
        }
        if let Ok(mut handlers) = self.handlers.try_borrow_mut() {
            handlers.retain(|e| !dead.contains(&e.id));
            dead.clear();
        }
    }
}

/// A value whose changes notify subscribers.
pub struct Observable<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                value: RefCell::new(value),
                handlers: RefCell::new(Vec::new()),
                dead: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Store `next` and notify subscribers, unless it equals the current
    /// value (repeated identical updates are absorbed).
    pub fn set(&self, next: T) {
        {
            let mut value = self.inner.value.borrow_mut();
            if *value == next {
                return;
            }
            *value = next;
        }
        self.notify();
    }

    fn notify(&self) {
        self.inner.purge();
        // Handlers run against a snapshot, with the registry released, so
        // a handler may subscribe or unsubscribe while we iterate.
        let snapshot = self.get();
        let mut current = std::mem::take(&mut *self.inner.handlers.borrow_mut());
        for entry in current.iter_mut() {
            if self.inner.dead.borrow().contains(&entry.id) {
                continue;
            }
            (entry.handler)(&snapshot);
        }
        // Subscriptions made during notification landed in the registry;
        // keep them after the pre-existing ones.
        let mut handlers = self.inner.handlers.borrow_mut();
        current.append(&mut handlers);
        *handlers = current;
        drop(handlers);
        self.inner.purge();
    }

    /// Register `handler` for future changes. The current value is not
    /// replayed; callers wanting it read `get()` first.
    pub fn subscribe(&self, handler: impl FnMut(&T) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.handlers.borrow_mut().push(Entry {
            id,
            handler: Box::new(handler),
        });
        let weak = Rc::downgrade(&self.inner);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.dead.borrow_mut().push(id);
                    inner.purge();
                }
            })),
        }
    }
}

/// Handle to one registration; dropping it (or calling
/// [`Subscription::unsubscribe`]) detaches the handler.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}
