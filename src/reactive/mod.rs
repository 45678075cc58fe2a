//! Reactive plumbing shared by every screen module.
//!
//! ```text
//! View ──send──→ EventBus ──→ Presenter ──spawn──→ UseCase (runtime)
//!   ↑                                                   │
//!   └── StateField ←── set ←── MainContext ←── post ────┘
//! ```
//!
//! - **EventBus**: one handler, synchronous in-order dispatch
//! - **StateField**: observable cell, replays the latest value on subscribe
//! - **MainContext**: the single thread allowed to mutate screen state
//! - **Subscription**: scoped guard, unregisters on drop

mod context;
mod event_bus;
mod state;
mod subscription;

pub use context::{Job, MainContext, MainHandle};
pub use event_bus::{EventBus, EventBusError, EventSender};
pub use state::{Observable, StateField};
pub use subscription::{Subscription, SubscriptionBag};
