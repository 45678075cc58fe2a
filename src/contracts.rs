//! Layer contracts of a screen module.
//!
//! A module is assembled from a presenter, a use case, a wireframe (router)
//! and a view. The traits here are the seams between those layers.

use std::sync::Weak;

use async_trait::async_trait;

use crate::reactive::EventSender;
use crate::ui::mvi::Intent;

/// Single-purpose asynchronous business operation.
///
/// Each call produces exactly one result: the output or a typed failure.
#[async_trait]
pub trait UseCase: Send + Sync {
    type Input: Send + 'static;
    type Output: Send + 'static;
    type Failure: std::error::Error + Send + 'static;

    async fn execute(&self, input: Self::Input) -> Result<Self::Output, Self::Failure>;
}

/// Screen that can present a destination on top of itself.
pub trait ScreenHost<D>: Send + Sync {
    fn present(&self, destination: D);
}

/// Router of a screen module.
///
/// Built before the presenter, which only receives [`Wireframe::intents`].
/// The screen is attached afterwards as a non-owning reference; intents
/// arriving while no live screen is attached are dropped.
pub trait Wireframe {
    type Intent: Intent;
    type Destination;

    fn intents(&self) -> EventSender<Self::Intent>;

    fn attach(&self, host: Weak<dyn ScreenHost<Self::Destination>>);
}
