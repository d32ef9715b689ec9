//! Storage layer for Homeroom
//!
//! Persistence mechanics are intentionally out of scope for the core; this
//! module defines the repository interface the rest of the portal consumes,
//! plus an in-memory reference implementation.

mod memory;
mod traits;

pub use memory::MemoryStore;
pub use traits::{ScheduleFilter, ScheduleRepository};
