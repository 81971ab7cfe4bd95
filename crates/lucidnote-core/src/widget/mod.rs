//! Selection and text-editing state for canvas elements.
//!
//! Kept apart from the element data so that rendering and hit-testing never
//! depend on transient UI state.

mod manager;
mod state;

pub use manager::WidgetManager;
pub use state::WidgetState;
