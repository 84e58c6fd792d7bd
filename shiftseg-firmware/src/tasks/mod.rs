//! Embassy async tasks
//!
//! The refresh task reads the shared display buffer, the counter task
//! writes it.

pub mod counter;
pub mod refresh;

pub use counter::counter_task;
pub use refresh::{refresh_task, DisplayChain};
