//! Base trait for store state.

/// Marker trait for state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data observers need)
/// - Comparable (PartialEq for detecting changes)
pub trait State: Clone + PartialEq + Default + 'static {}
