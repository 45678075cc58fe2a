//! Marker trait for intents.

/// Marker trait for intent objects.
///
/// Implemented by view events sent to presenters, navigation intents sent
/// to routers, and view-model intents consumed by reducers.
pub trait Intent: Send + 'static {}
