//! Homeroom Core Library
//!
//! Models, roster configuration, conflict detection, and schedule storage
//! for the Homeroom school timetable portal.

pub mod conflict;
pub mod error;
pub mod invariants;
pub mod models;
pub mod roster;
pub mod samples;
pub mod storage;
pub mod views;

pub use conflict::{detect_conflicts, ReplaceScope, Simulation};
pub use error::{Error, Result};
pub use models::*;
pub use roster::{Roster, SpecialTeacher};
pub use storage::{MemoryStore, ScheduleFilter, ScheduleRepository};
pub use views::{all_class_timetables, class_timetable};
