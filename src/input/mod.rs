//! Presentation-side input handling.
//!
//! Hit-testing depends on where things are drawn, so it lives here rather
//! than in the store. Frontends describe their slot geometry through
//! [`DropSurface`] and feed pointer events to a [`DragController`].

mod drag;
mod hit_test;

pub use drag::{DragController, DropOutcome, DropSurface, SlotBounds};
pub use hit_test::{find_slot_at_point, HoverTracker};
