//! Marker trait for view-model snapshots.

/// Marker trait for UI state objects.
///
/// States are cloned to produce the next one and compared to skip redundant
/// renders.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
