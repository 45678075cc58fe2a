//! Model-View-Intent primitives used by the declarative search view.
//!
//! # Architecture
//!
//! ```text
//! StateField change ──→ Intent ──→ Reducer ──→ View model ──→ render
//! ```
//!
//! - **UiState**: immutable snapshot holding everything needed to render
//! - **Intent**: a field change or a view-local gesture
//! - **Reducer**: pure function producing the next snapshot

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
