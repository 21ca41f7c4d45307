//! Widget-specific rendering helpers used to compose visuals.

/// Helpers for button visuals.
pub mod button;
/// Helpers for slider visuals.
pub mod slider;
