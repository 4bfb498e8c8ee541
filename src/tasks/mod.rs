//! Background tasks module
//!
//! This module contains the tasks that run alongside the status display:
//! the tick driver and the stdin command loop.

pub mod command_loop;
pub mod tick_driver;

// Re-export main functions
pub use command_loop::command_loop;
pub use tick_driver::tick_driver_task;
