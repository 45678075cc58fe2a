//! Single-handler event channel with synchronous, in-order dispatch.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use thiserror::Error;

use super::subscription::Subscription;

type Handler<E> = Arc<dyn Fn(E) + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventBusError {
    #[error("event bus '{bus}' already has a handler")]
    HandlerAlreadyRegistered { bus: &'static str },
}

struct BusInner<E> {
    name: &'static str,
    handler: Mutex<Option<(u64, Handler<E>)>>,
    pending: Mutex<VecDeque<E>>,
    dispatching: AtomicBool,
    next_id: Mutex<u64>,
}

impl<E: Send + 'static> BusInner<E> {
    fn send(&self, event: E) -> bool {
        if self.current_handler().is_none() {
            tracing::trace!(bus = self.name, "event dropped: no handler registered");
            return false;
        }

        self.pending.lock().push_back(event);
        // Whoever holds the flag drains the queue. The re-check picks up an
        // event queued by another thread just before the flag was released.
        while !self.dispatching.swap(true, Ordering::AcqRel) {
            let dispatch = DispatchGuard { bus: self };
            self.drain();
            drop(dispatch);
            if self.pending.lock().is_empty() {
                break;
            }
        }
        true
    }

    fn drain(&self) {
        loop {
            let Some(event) = self.pending.lock().pop_front() else {
                return;
            };
            match self.current_handler() {
                Some(handler) => handler(event),
                None => {
                    self.pending.lock().clear();
                    return;
                }
            }
        }
    }

    fn current_handler(&self) -> Option<Handler<E>> {
        self.handler
            .lock()
            .as_ref()
            .map(|(_, handler)| Arc::clone(handler))
    }
}

/// Releases the dispatch flag when a drain ends, unwinding included. A
/// panicking handler also discards whatever was still queued.
struct DispatchGuard<'a, E> {
    bus: &'a BusInner<E>,
}

impl<E> Drop for DispatchGuard<'_, E> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            let discarded = {
                let mut pending = self.bus.pending.lock();
                let discarded = pending.len();
                pending.clear();
                discarded
            };
            tracing::warn!(bus = self.bus.name, discarded, "event handler panicked");
        }
        self.bus.dispatching.store(false, Ordering::Release);
    }
}

/// Event channel owned by a presenter (or router).
///
/// Exactly one handler may be registered. `send` runs the handler
/// synchronously on the caller's thread; events sent from inside the handler
/// are queued and dispatched right after, preserving send order. Nothing is
/// buffered once the current dispatch finishes.
pub struct EventBus<E> {
    inner: Arc<BusInner<E>>,
}

impl<E: Send + 'static> EventBus<E> {
    pub fn new(name: &'static str) -> Self {
        Self {
            inner: Arc::new(BusInner {
                name,
                handler: Mutex::new(None),
                pending: Mutex::new(VecDeque::new()),
                dispatching: AtomicBool::new(false),
                next_id: Mutex::new(0),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        self.inner.name
    }

    /// Register the bus handler.
    ///
    /// The returned subscription unregisters it on drop.
    pub fn subscribe<F>(&self, handler: F) -> Result<Subscription, EventBusError>
    where
        F: Fn(E) + Send + Sync + 'static,
    {
        let id = {
            let mut slot = self.inner.handler.lock();
            if slot.is_some() {
                return Err(EventBusError::HandlerAlreadyRegistered {
                    bus: self.inner.name,
                });
            }
            let mut next_id = self.inner.next_id.lock();
            let id = *next_id;
            *next_id += 1;
            *slot = Some((id, Arc::new(handler)));
            id
        };

        let weak = Arc::downgrade(&self.inner);
        Ok(Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                let mut slot = inner.handler.lock();
                if matches!(slot.as_ref(), Some((current, _)) if *current == id) {
                    *slot = None;
                }
            }
        }))
    }

    /// Register the handler of a bus its owner just created.
    ///
    /// A bus that already has a handler keeps it; the rejection is logged
    /// and a detached subscription is returned.
    pub fn subscribe_owned<F>(&self, handler: F) -> Subscription
    where
        F: Fn(E) + Send + Sync + 'static,
    {
        self.subscribe(handler).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "owner handler not registered");
            Subscription::detached()
        })
    }

    pub fn send(&self, event: E) -> bool {
        self.inner.send(event)
    }

    pub fn has_handler(&self) -> bool {
        self.inner.handler.lock().is_some()
    }

    /// Non-owning sending handle for the producer side.
    pub fn sender(&self) -> EventSender<E> {
        EventSender {
            inner: Arc::downgrade(&self.inner),
        }
    }
}

/// Producer handle for an [`EventBus`].
///
/// Does not keep the bus alive: once the owner tears the bus down, sends are
/// dropped and report `false`.
pub struct EventSender<E> {
    inner: Weak<BusInner<E>>,
}

impl<E> Clone for EventSender<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<E: Send + 'static> EventSender<E> {
    /// A sender that is not connected to any bus.
    pub fn disconnected() -> Self {
        Self { inner: Weak::new() }
    }

    pub fn send(&self, event: E) -> bool {
        match self.inner.upgrade() {
            Some(inner) => inner.send(event),
            None => {
                tracing::trace!("event dropped: bus torn down");
                false
            }
        }
    }

    pub fn is_connected(&self) -> bool {
        self.inner.strong_count() > 0
    }
}
