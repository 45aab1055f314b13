//! Base trait for state trees.

/// Marker trait for state objects.
///
/// States should be:
/// - Value-like (Clone to snapshot for observers)
/// - Self-contained (all data needed to drive a presentation layer)
/// - Comparable (PartialEq for detecting changes)
pub trait State: Clone + PartialEq + Default + Send + 'static {}
