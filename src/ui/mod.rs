//! Presentation module
//!
//! Rendering of the timer read model. Nothing in here holds state or
//! invariants of its own.

pub mod display;

// Re-export main functions
pub use display::display_task;
