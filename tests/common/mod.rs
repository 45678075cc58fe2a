//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::oneshot;

use rxviper::config::ViewKind;
use rxviper::contracts::UseCase;
use rxviper::data::Item;
use rxviper::reactive::{EventBus, MainContext, Observable, Subscription};
use rxviper::search::{NavigationIntent, SearchFailure, SearchModule, SearchPresenter};

pub type SearchResult = Result<Vec<Item>, SearchFailure>;

/// Use case whose calls complete only when the test releases them.
///
/// Every `execute` takes the next gate in call order. A gate whose sender is
/// dropped completes with `ConnectionError`.
pub struct GatedUseCase {
    gates: Mutex<VecDeque<oneshot::Receiver<SearchResult>>>,
    calls: Mutex<Vec<String>>,
}

impl GatedUseCase {
    pub fn new(count: usize) -> (Arc<Self>, Vec<oneshot::Sender<SearchResult>>) {
        let mut receivers = VecDeque::with_capacity(count);
        let mut senders = Vec::with_capacity(count);
        for _ in 0..count {
            let (tx, rx) = oneshot::channel();
            senders.push(tx);
            receivers.push_back(rx);
        }
        let use_case = Arc::new(Self {
            gates: Mutex::new(receivers),
            calls: Mutex::new(Vec::new()),
        });
        (use_case, senders)
    }

    /// Keywords received so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl UseCase for GatedUseCase {
    type Input = String;
    type Output = Vec<Item>;
    type Failure = SearchFailure;

    async fn execute(&self, keyword: String) -> SearchResult {
        self.calls.lock().push(keyword);
        let gate = self.gates.lock().pop_front();
        match gate {
            Some(gate) => gate.await.unwrap_or(Err(SearchFailure::ConnectionError)),
            None => panic!("unexpected use case call"),
        }
    }
}

/// Use case that answers every call with the same result.
pub struct FixedUseCase {
    result: SearchResult,
    calls: Mutex<Vec<String>>,
}

impl FixedUseCase {
    pub fn ok(items: Vec<Item>) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(items),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(failure: SearchFailure) -> Arc<Self> {
        Arc::new(Self {
            result: Err(failure),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl UseCase for FixedUseCase {
    type Input = String;
    type Output = Vec<Item>;
    type Failure = SearchFailure;

    async fn execute(&self, keyword: String) -> SearchResult {
        self.calls.lock().push(keyword);
        self.result.clone()
    }
}

/// Every value an observable delivered, replay included.
pub struct Recorder<T> {
    seen: Arc<Mutex<Vec<T>>>,
    _subscription: Subscription,
}

impl<T: Clone + Send + Sync + 'static> Recorder<T> {
    pub fn attach(observable: &Observable<T>) -> Self {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let subscription = observable.subscribe(move |value: &T| sink.lock().push(value.clone()));
        Self {
            seen,
            _subscription: subscription,
        }
    }

    pub fn values(&self) -> Vec<T> {
        self.seen.lock().clone()
    }
}

/// Navigation channel standing in for a router.
pub struct NavigationLog {
    pub bus: EventBus<NavigationIntent>,
    seen: Arc<Mutex<Vec<NavigationIntent>>>,
    _subscription: Subscription,
}

impl NavigationLog {
    pub fn new() -> Self {
        let bus = EventBus::new("test-navigation");
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let subscription = bus
            .subscribe(move |intent| sink.lock().push(intent))
            .expect("fresh bus accepts a handler");
        Self {
            bus,
            seen,
            _subscription: subscription,
        }
    }

    pub fn intents(&self) -> Vec<NavigationIntent> {
        self.seen.lock().clone()
    }
}

/// Presenter wired to a navigation log and a delivery context on the
/// current runtime.
pub fn presenter_with(
    use_case: Arc<dyn UseCase<Input = String, Output = Vec<Item>, Failure = SearchFailure>>,
) -> (SearchPresenter, NavigationLog, MainContext) {
    let context = MainContext::new(Handle::current());
    let navigation = NavigationLog::new();
    let presenter = SearchPresenter::new(use_case, navigation.bus.sender(), context.handle(), "rust");
    (presenter, navigation, context)
}

/// Fully assembled module on the current runtime.
pub fn module_with(
    use_case: Arc<dyn UseCase<Input = String, Output = Vec<Item>, Failure = SearchFailure>>,
    view: ViewKind,
) -> (SearchModule, MainContext) {
    let context = MainContext::new(Handle::current());
    let module = SearchModule::assemble(use_case, context.handle(), "rust", view);
    (module, context)
}

pub fn item(id: &str, title: &str) -> Item {
    Item::new(id, title)
}

pub fn sample_items() -> Vec<Item> {
    vec![
        Item::new("a1", "t1"),
        Item::new("b2", "t2").with_summary("second"),
        Item::new("c3", "t3").with_stars(7),
    ]
}
