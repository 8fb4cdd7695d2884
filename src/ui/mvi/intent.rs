/// Marker trait for intent objects.
///
/// Intents are produced by the input layer and consumed by reducers.
pub trait Intent: Send + 'static {}
