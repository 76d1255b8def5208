//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States are replaced wholesale by reducers and compared with `PartialEq`
/// to decide whether a redraw is needed.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
