/// Marker trait for UI state objects.
///
/// States are cloned rather than mutated in place and compared to detect
/// changes between frames.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
