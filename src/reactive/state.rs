//! Observable single-value cells with replay-on-subscribe semantics.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use super::subscription::Subscription;

type Observer<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Slot<T> {
    value: T,
    observers: Vec<(u64, Observer<T>)>,
    next_id: u64,
}

struct FieldInner<T> {
    name: &'static str,
    slot: Mutex<Slot<T>>,
}

/// Typed observable cell.
///
/// `set` replaces the value and notifies every observer in subscription
/// order. `subscribe` delivers the current value right away, then every
/// later change. Observers run after the internal lock is released, so an
/// observer may read the field (or subscribe to it) without deadlocking.
pub struct StateField<T> {
    inner: Arc<FieldInner<T>>,
}

impl<T> StateField<T>
where
    T: Clone + Send + 'static,
{
    pub fn new(name: &'static str, initial: T) -> Self {
        Self {
            inner: Arc::new(FieldInner {
                name,
                slot: Mutex::new(Slot {
                    value: initial,
                    observers: Vec::new(),
                    next_id: 0,
                }),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        self.inner.name
    }

    pub fn get(&self) -> T {
        self.inner.slot.lock().value.clone()
    }

    pub fn set(&self, value: T) {
        let (snapshot, observers) = {
            let mut slot = self.inner.slot.lock();
            slot.value = value;
            let observers: Vec<Observer<T>> =
                slot.observers.iter().map(|(_, o)| Arc::clone(o)).collect();
            (slot.value.clone(), observers)
        };
        tracing::trace!(
            field = self.inner.name,
            observers = observers.len(),
            "state field updated"
        );
        for observer in observers {
            observer(&snapshot);
        }
    }

    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        subscribe_inner(&self.inner, Arc::new(observer))
    }

    /// Read-only handle for views.
    pub fn observable(&self) -> Observable<T> {
        Observable {
            inner: Arc::clone(&self.inner),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.slot.lock().observers.len()
    }

    /// Drop every observer. Outstanding subscriptions become no-ops.
    pub fn release_observers(&self) {
        let released = std::mem::take(&mut self.inner.slot.lock().observers);
        if !released.is_empty() {
            tracing::trace!(
                field = self.inner.name,
                released = released.len(),
                "state field observers released"
            );
        }
    }
}

/// Read-only view of a [`StateField`]: can be read and observed, never set.
pub struct Observable<T> {
    inner: Arc<FieldInner<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Observable<T>
where
    T: Clone + Send + 'static,
{
    pub fn name(&self) -> &'static str {
        self.inner.name
    }

    pub fn get(&self) -> T {
        self.inner.slot.lock().value.clone()
    }

    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        subscribe_inner(&self.inner, Arc::new(observer))
    }
}

fn subscribe_inner<T>(inner: &Arc<FieldInner<T>>, observer: Observer<T>) -> Subscription
where
    T: Clone + Send + 'static,
{
    let (id, current) = {
        let mut slot = inner.slot.lock();
        let id = slot.next_id;
        slot.next_id += 1;
        slot.observers.push((id, Arc::clone(&observer)));
        (id, slot.value.clone())
    };
    observer(&current);

    let weak: Weak<FieldInner<T>> = Arc::downgrade(inner);
    Subscription::new(move || {
        if let Some(inner) = weak.upgrade() {
            inner.slot.lock().observers.retain(|(other, _)| *other != id);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder<T: Clone + Send + 'static>() -> (Arc<Mutex<Vec<T>>>, impl Fn(&T) + Send + Sync) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        (seen, move |value: &T| sink.lock().push(value.clone()))
    }

    #[test]
    fn subscribe_replays_current_value() {
        let field = StateField::new("count", 7);
        let (seen, observer) = recorder::<i32>();
        let _sub = field.subscribe(observer);
        assert_eq!(*seen.lock(), vec![7]);
    }

    #[test]
    fn set_notifies_in_subscription_order() {
        let field = StateField::new("count", 0);
        let order = Arc::new(Mutex::new(Vec::new()));

        let first = Arc::clone(&order);
        let _a = field.subscribe(move |v: &i32| first.lock().push(("a", *v)));
        let second = Arc::clone(&order);
        let _b = field.subscribe(move |v: &i32| second.lock().push(("b", *v)));

        field.set(1);
        assert_eq!(
            *order.lock(),
            vec![("a", 0), ("b", 0), ("a", 1), ("b", 1)]
        );
    }

    #[test]
    fn dropped_subscription_stops_delivery() {
        let field = StateField::new("count", 0);
        let (seen, observer) = recorder::<i32>();
        let sub = field.subscribe(observer);
        field.set(1);
        drop(sub);
        field.set(2);

        assert_eq!(*seen.lock(), vec![0, 1]);
        assert_eq!(field.subscriber_count(), 0);
    }

    #[test]
    fn observer_can_read_field_while_notified() {
        let field = StateField::new("count", 0);
        let reader = field.observable();
        let (seen, observer) = recorder::<i32>();
        let _sub = field.subscribe(move |_: &i32| observer(&reader.get()));
        field.set(5);
        assert_eq!(*seen.lock(), vec![0, 5]);
    }

    #[test]
    fn release_observers_detaches_everyone() {
        let field = StateField::new("name", String::from("a"));
        let (seen, observer) = recorder::<String>();
        let sub = field.observable().subscribe(observer);
        field.release_observers();
        field.set("b".into());
        drop(sub);

        assert_eq!(*seen.lock(), vec![String::from("a")]);
    }

    #[test]
    fn subscription_outliving_field_drops_quietly() {
        let field = StateField::new("flag", false);
        let sub = field.subscribe(|_| {});
        drop(field);
        drop(sub);
    }
}
