//! Evasive "No" button.
//!
//! Split into pure geometry (reachable area, accumulated offset, clamping) and
//! a thin Leptos adapter that measures the DOM and writes the CSS transform.

mod component;
pub mod geometry;

pub use component::{EvasiveButton, apply_transform, clear_transform, measure, viewport};
pub use geometry::{DEFAULT_MARGIN, Displacement, ElementRect, ReachableArea, Viewport, relocate};
